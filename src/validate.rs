//! Deterministic re-verification of reported near-miss candidates.

use crate::candidate::{Candidate, ResultSet};
use crate::search::fold_miss;

// ============================================================================
// Public API
// ============================================================================

/// Recomputes a candidate's approximation from (a, b, n) and checks every
/// recorded field against it, plus the separation margin.
///
/// The sentinel passes trivially: there is nothing to audit. The recomputed
/// miss must match the recorded one bit-for-bit, since both go through the
/// same floating-point operations.
///
/// # Errors
/// Returns a message describing the first violated invariant.
pub fn verify_candidate(candidate: &Candidate, diff_c_to_ab: u64) -> Result<(), String> {
    if !candidate.is_found() {
        return Ok(());
    }

    if candidate.a == 0 || candidate.b < candidate.a {
        return Err(format!(
            "bases must satisfy 1 <= a <= b, got a={} b={}",
            candidate.a, candidate.b
        ));
    }
    if candidate.n == 0 {
        return Err("found candidate has exponent 0".to_string());
    }
    if !(0.0..0.5).contains(&candidate.miss) {
        return Err(format!("miss {} outside [0, 0.5)", candidate.miss));
    }

    let exponent = f64::from(candidate.n);
    let raw = ((candidate.a as f64).powf(exponent) + (candidate.b as f64).powf(exponent))
        .powf(1.0 / exponent);

    let expected_c = raw.floor() as u64;
    if candidate.c != expected_c {
        return Err(format!(
            "recorded c = {} but floor of the recomputed root is {expected_c}",
            candidate.c
        ));
    }

    let expected_miss = fold_miss(raw);
    if candidate.miss.to_bits() != expected_miss.to_bits() {
        return Err(format!(
            "recorded miss = {} but recomputed miss is {expected_miss}",
            candidate.miss
        ));
    }

    if candidate.c <= candidate.a + diff_c_to_ab || candidate.c <= candidate.b + diff_c_to_ab {
        return Err(format!(
            "c = {} does not clear both bases (a={}, b={}) by more than {diff_c_to_ab}",
            candidate.c, candidate.a, candidate.b
        ));
    }

    Ok(())
}

/// Verifies every entry of a result set: each must be a real find, pass the
/// per-candidate audit, and sit strictly below the acceptance threshold.
///
/// # Errors
/// Returns a message naming the first offending entry.
pub fn verify_result_set(
    results: &ResultSet,
    max_miss: f64,
    diff_c_to_ab: u64,
) -> Result<(), String> {
    for (i, candidate) in results.iter().enumerate() {
        if !candidate.is_found() {
            return Err(format!("entry {i} is the sentinel"));
        }
        if candidate.miss >= max_miss {
            return Err(format!(
                "entry {i} has miss {} >= threshold {max_miss}",
                candidate.miss
            ));
        }
        verify_candidate(candidate, diff_c_to_ab).map_err(|e| format!("entry {i}: {e}"))?;
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
