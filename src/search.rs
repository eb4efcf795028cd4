//! Nearest-solution finder and the window/exponent sweep driver.

use crate::candidate::{Candidate, ResultSet};
use rayon::prelude::*;

// ============================================================================
// Configuration
// ============================================================================

/// Sweep configuration parameters.
///
/// All parameters are fixed for a run; there is no runtime reconfiguration.
#[derive(Clone, Debug)]
pub struct SweepConfig {
    /// Lower bound of the base window for the first iteration.
    pub start_number: u64,
    /// Amount the base window shifts upward per iteration.
    pub step_size: u64,
    /// Window width: the upper bound is `min_b + search_size`.
    pub search_size: u64,
    /// Strict acceptance threshold for the final result set. Stricter than
    /// the per-window running best, which keeps the closest candidate
    /// regardless of how close it is.
    pub max_miss: f64,
    /// Number of window shifts to run.
    pub iterations: u64,
    /// Smallest exponent to sweep (inclusive).
    pub min_n: u32,
    /// Largest exponent to sweep (inclusive).
    pub max_n: u32,
    /// Separation margin: `c` must exceed both `a` and `b` by more than this
    /// for a candidate to count as non-degenerate.
    pub diff_c_to_ab: u64,
    /// Run the exponent sweep for each window on the rayon pool. Selection
    /// is identical to the sequential sweep; each finder call is pure and
    /// results are collected in exponent order.
    pub parallel: bool,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            start_number: 1000,
            step_size: 1000,
            search_size: 3000,
            max_miss: 1e-8,
            iterations: 2,
            min_n: 5,
            max_n: 20,
            diff_c_to_ab: 20,
            parallel: false,
        }
    }
}

// ============================================================================
// Miss folding
// ============================================================================

/// Folds the fractional part of a raw root into the distance to the nearer
/// integer.
///
/// Returns `frac(raw)` when that is at most one half, else `1 - frac(raw)`.
/// A fractional part of exactly one half keeps the lower integer.
#[inline]
pub(crate) fn fold_miss(raw: f64) -> f64 {
    let frac = raw.fract();
    if frac > 0.5 {
        1.0 - frac
    } else {
        frac
    }
}

// ============================================================================
// NearestSolutionFinder
// ============================================================================

/// Offers one (a, b) pair to the running best.
///
/// The pair replaces the running best only if its miss is strictly smaller
/// (ties keep the earliest-found pair) AND `c = floor(raw)` exceeds both
/// bases by more than the separation margin. A pair that beats the best miss
/// but fails separation is discarded entirely: it does not update the
/// threshold later pairs are compared against.
#[inline]
fn offer(
    best: &mut Candidate,
    a: u64,
    b: u64,
    n: u32,
    raw: f64,
    miss: f64,
    diff_c_to_ab: u64,
) -> bool {
    if miss >= best.miss {
        return false;
    }
    // The floor of the raw root, not of the folded adjustment. When the fold
    // picked floor + 1 as the nearer integer, c still records the floor.
    let c = raw.floor() as u64;
    if c > b + diff_c_to_ab && c > a + diff_c_to_ab {
        *best = Candidate { a, b, c, n, miss };
        true
    } else {
        false
    }
}

/// Scans all base pairs `min_b <= a <= b <= max_b` for the exponent `n` and
/// returns the accepted candidate with the smallest miss.
///
/// The root `(a^n + b^n)^(1/n)` is computed with `f64` exponentiation; the
/// approximation error is the quantity under study, not a defect. Returns
/// the sentinel [`Candidate::default`] if the window is empty
/// (`min_b > max_b`) or no pair ever satisfies the separation margin.
///
/// Pure function of its inputs: repeated calls yield bit-identical results
/// on the same platform.
pub fn find_nearest(min_b: u64, max_b: u64, n: u32, diff_c_to_ab: u64) -> Candidate {
    let exponent = f64::from(n);
    let mut best = Candidate::default();

    for a in min_b..=max_b {
        let a_pow = (a as f64).powf(exponent);
        for b in a..=max_b {
            let raw = (a_pow + (b as f64).powf(exponent)).powf(1.0 / exponent);
            let miss = fold_miss(raw);
            offer(&mut best, a, b, n, raw, miss, diff_c_to_ab);
        }
    }

    best
}

// ============================================================================
// SearchDriver
// ============================================================================

/// Runs the finder for every exponent in the configured range over one
/// window, returning candidates in ascending exponent order.
fn exponent_sweep(cfg: &SweepConfig, min_b: u64, max_b: u64) -> Vec<Candidate> {
    let exponents: Vec<u32> = (cfg.min_n..=cfg.max_n).collect();
    if cfg.parallel {
        exponents
            .into_par_iter()
            .map(|n| find_nearest(min_b, max_b, n, cfg.diff_c_to_ab))
            .collect()
    } else {
        exponents
            .into_iter()
            .map(|n| find_nearest(min_b, max_b, n, cfg.diff_c_to_ab))
            .collect()
    }
}

/// Runs the full sweep: `iterations` window shifts, each scanning every
/// exponent in `min_n..=max_n`.
///
/// Prints one progress line per iteration and one line per (window, n) pair
/// with the candidate found. A candidate enters the returned [`ResultSet`]
/// only when its miss is strictly below `max_miss`; entries appear in sweep
/// order (iteration-major, then exponent).
pub fn run_sweep(cfg: &SweepConfig) -> ResultSet {
    let mut results = ResultSet::new();

    for iteration in 0..cfg.iterations {
        let min_b = cfg.start_number + iteration * cfg.step_size;
        let max_b = min_b + cfg.search_size;

        println!("Iteration {} started", iteration + 1);

        let found = exponent_sweep(cfg, min_b, max_b);
        for (n, candidate) in (cfg.min_n..=cfg.max_n).zip(found) {
            println!(
                "Nearest solution for the bases between {min_b} and {max_b} \
                 and the exponent {n} => {candidate}"
            );

            if candidate.miss < cfg.max_miss {
                debug_assert!(
                    crate::validate::verify_candidate(&candidate, cfg.diff_c_to_ab).is_ok()
                );
                results.push(candidate);
            }
        }
    }

    results
}

// ============================================================================
// Tests
// ============================================================================
