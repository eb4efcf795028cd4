//! # Fermat Near-Miss Search
//!
//! A brute-force search for near-misses to Fermat's Last Theorem: triples
//! \((a, b, c)\) and exponents \(n > 2\) where \(a^n + b^n\) lands extremely
//! close to, but never exactly on, a perfect n-th power \(c^n\).
//!
//! This crate provides:
//! - A pure **nearest-solution finder** scanning all unordered base pairs in
//!   a window for a given exponent, keeping the closest non-degenerate
//!   candidate.
//! - A **sweep driver** shifting the window across iterations and sweeping an
//!   exponent range, accumulating candidates below a strict miss threshold.
//! - Deterministic **re-verification** of reported candidates.
//!
//! ## Quick Start
//!
//! ```no_run
//! use fermat::search::{run_sweep, SweepConfig};
//!
//! // Run the default sweep: windows of width 3000 starting at 1000,
//! // exponents 5..=20, keeping misses below 1e-8.
//! let results = run_sweep(&SweepConfig::default());
//! println!("{results}");
//! ```
//!
//! ## Single Window
//!
//! ```
//! use fermat::search::find_nearest;
//!
//! let found = find_nearest(5, 15, 3, 0);
//! assert!(found.is_found());
//! assert!(found.miss < 0.5);
//! ```
//!
//! ## Modules
//!
//! - [`candidate`]: the `Candidate` record and the append-only `ResultSet`.
//! - [`search`]: the finder, the sweep configuration, and the driver.
//! - [`validate`]: deterministic re-verification of reported candidates.
//!
//! ## Numeric Notes
//!
//! - The n-th root is computed with `f64` exponentiation on purpose: the
//!   rounding error of that approximation is the quantity being explored.
//!   FLT guarantees no exact solution exists, so every "hit" is a near-miss.
//! - The computation is deterministic for a given platform's `pow`; golden
//!   values in the test suite were snapshotted on x86-64 Linux.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)] // Mathematical variable names
#![allow(clippy::doc_markdown)] // LaTeX-style notation in docs

pub mod candidate;
pub mod search;
pub mod validate;

/// Re-export commonly used types for convenience.
pub mod prelude {
    pub use crate::candidate::{Candidate, ResultSet};
    pub use crate::search::{find_nearest, run_sweep, SweepConfig};
    pub use crate::validate::{verify_candidate, verify_result_set};
}
