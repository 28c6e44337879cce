//! Alignment strategies crediting agreement between two line lists.
//!
//! The strategy decides how much two lists of rewritten lines agree. It is
//! the single policy point of the metric: span extraction, slicing and
//! aggregation never look at line contents.
//!
//! Both shipped strategies are order-respecting. A line that one side moved
//! and the other side left in place is never credited, because the diff
//! against the base records the moved line as an insertion elsewhere and the
//! untouched side contributes no rewritten lines at all.

use std::fmt;

use similar::{Algorithm, TextDiff};

/// Scores agreement between two lists of lines.
///
/// Implementations must be symmetric (`align(a, b) == align(b, a)`) and
/// bounded by `min(a.len(), b.len())`.
pub trait AlignmentStrategy: fmt::Debug + Send + Sync {
    /// Returns the name of the strategy.
    fn name(&self) -> &'static str;

    /// Returns the credited agreement between `left` and `right`.
    fn align(&self, left: &[&str], right: &[&str]) -> f64;
}

/// Credits one point per line in a longest common subsequence.
///
/// Duplicate lines are each matched at most once; identical lists (including
/// an identical reordering on both sides) get full credit.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactAlignment;

impl AlignmentStrategy for ExactAlignment {
    fn name(&self) -> &'static str {
        "exact"
    }

    fn align(&self, left: &[&str], right: &[&str]) -> f64 {
        weighted_lcs(left, right, |a, b| if a == b { 1.0 } else { 0.0 })
    }
}

/// Credits the best non-crossing pairing by character-level similarity.
///
/// Equal lines weigh 1.0, so this never credits less than [`ExactAlignment`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FuzzyAlignment;

impl AlignmentStrategy for FuzzyAlignment {
    fn name(&self) -> &'static str {
        "fuzzy"
    }

    fn align(&self, left: &[&str], right: &[&str]) -> f64 {
        weighted_lcs(left, right, line_similarity)
    }
}

/// Normalized similarity of two lines: `2 * M / (len(a) + len(b))`, where
/// `M` is the number of characters an optimal character diff keeps.
///
/// Returns 1.0 for equal lines (two empty lines included).
#[must_use]
pub fn line_similarity(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }
    let ratio = TextDiff::configure()
        .algorithm(Algorithm::Myers)
        .diff_chars(a, b)
        .ratio();
    f64::from(ratio)
}

/// Maximum total weight of a monotonic matching between `left` and `right`.
fn weighted_lcs<F>(left: &[&str], right: &[&str], weight: F) -> f64
where
    F: Fn(&str, &str) -> f64,
{
    if left.is_empty() || right.is_empty() {
        return 0.0;
    }

    let width = right.len() + 1;
    let mut prev = vec![0.0_f64; width];
    let mut curr = vec![0.0_f64; width];

    for &a in left {
        for (j, &b) in right.iter().enumerate() {
            let paired = prev[j] + weight(a, b);
            curr[j + 1] = paired.max(prev[j + 1]).max(curr[j]);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[right.len()]
}
