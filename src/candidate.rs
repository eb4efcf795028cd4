//! Candidate records for Fermat near-misses and the accumulated result set.

use std::fmt;

// ============================================================================
// Candidate
// ============================================================================

/// A near-miss candidate: bases `a <= b`, an exponent `n`, the approximate
/// root `c`, and how far the real-valued root landed from an integer.
///
/// Representation:
/// - `c` is `floor((a^n + b^n)^(1/n))` as computed in `f64`. The floor is
///   taken of the raw root even when the fold decided the nearer integer is
///   `floor + 1`; this asymmetry is a fixed rule of the search.
/// - `miss` is the distance from the raw root to the nearer integer, folded
///   into `[0, 0.5)`.
///
/// The default value is the sentinel returned by an empty or fruitless scan:
/// all identifiers zero and `miss = 1.0`, which every real miss beats.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Candidate {
    /// Smaller base.
    pub a: u64,
    /// Larger base (`b >= a`).
    pub b: u64,
    /// Approximate n-th root of `a^n + b^n`, floored.
    pub c: u64,
    /// Exponent.
    pub n: u32,
    /// Distance from the raw root to the nearer integer, in `[0, 0.5)`.
    pub miss: f64,
}

impl Default for Candidate {
    fn default() -> Self {
        Self {
            a: 0,
            b: 0,
            c: 0,
            n: 0,
            miss: 1.0,
        }
    }
}

impl Candidate {
    /// Returns `true` if this is a real find rather than the sentinel.
    #[inline]
    pub fn is_found(&self) -> bool {
        self.miss < 1.0
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ a: {}, b: {}, c: {}, n: {}, miss: {} }}",
            self.a, self.b, self.c, self.n, self.miss
        )
    }
}

// ============================================================================
// ResultSet
// ============================================================================

/// Append-only ordered sequence of accepted candidates across a sweep.
///
/// Entries appear in sweep order (iteration-major, then exponent) and are
/// never reordered or removed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResultSet {
    entries: Vec<Candidate>,
}

impl ResultSet {
    /// Creates an empty result set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an accepted candidate.
    pub fn push(&mut self, candidate: Candidate) {
        self.entries.push(candidate);
    }

    /// Number of accepted candidates.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no candidate was accepted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over accepted candidates in sweep order.
    pub fn iter(&self) -> std::slice::Iter<'_, Candidate> {
        self.entries.iter()
    }

    /// Accepted candidates as a slice, in sweep order.
    pub fn as_slice(&self) -> &[Candidate] {
        &self.entries
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a Candidate;
    type IntoIter = std::slice::Iter<'a, Candidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl fmt::Display for ResultSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, candidate) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{candidate}")?;
        }
        write!(f, "]")
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_sentinel() {
        let c = Candidate::default();
        assert_eq!(c.a, 0);
        assert_eq!(c.b, 0);
        assert_eq!(c.c, 0);
        assert_eq!(c.n, 0);
        assert_eq!(c.miss, 1.0);
        assert!(!c.is_found());
    }

    #[test]
    fn found_candidate_is_found() {
        let c = Candidate {
            a: 9,
            b: 10,
            c: 12,
            n: 3,
            miss: 0.0023,
        };
        assert!(c.is_found());
    }

    #[test]
    fn candidate_display_renders_all_fields() {
        let c = Candidate {
            a: 1783,
            b: 2766,
            c: 2824,
            n: 5,
            miss: 0.25,
        };
        assert_eq!(c.to_string(), "{ a: 1783, b: 2766, c: 2824, n: 5, miss: 0.25 }");
    }

    #[test]
    fn sentinel_display() {
        assert_eq!(
            Candidate::default().to_string(),
            "{ a: 0, b: 0, c: 0, n: 0, miss: 1 }"
        );
    }

    #[test]
    fn result_set_preserves_insertion_order() {
        let mut set = ResultSet::new();
        assert!(set.is_empty());

        let first = Candidate {
            a: 1,
            b: 2,
            c: 30,
            n: 5,
            miss: 0.1,
        };
        let second = Candidate {
            a: 3,
            b: 4,
            c: 40,
            n: 6,
            miss: 0.05,
        };
        set.push(first);
        set.push(second);

        assert_eq!(set.len(), 2);
        assert_eq!(set.as_slice(), &[first, second]);
    }

    #[test]
    fn result_set_display_is_list_shaped() {
        let mut set = ResultSet::new();
        assert_eq!(set.to_string(), "[]");

        set.push(Candidate {
            a: 1,
            b: 2,
            c: 30,
            n: 5,
            miss: 0.5,
        });
        set.push(Candidate {
            a: 3,
            b: 4,
            c: 40,
            n: 6,
            miss: 0.25,
        });
        assert_eq!(
            set.to_string(),
            "[{ a: 1, b: 2, c: 30, n: 5, miss: 0.5 }, { a: 3, b: 4, c: 40, n: 6, miss: 0.25 }]"
        );
    }
}
