//! Base-anchored agreement scoring between two rewrites of the same text.
//!
//! Given an original text and two independent rewrites of it, a candidate
//! and a reference, [`anchored_ratio`] measures how closely the candidate's
//! edits match the reference's edits. The comparison is anchored to the
//! original: only regions at least one rewrite changed are scored, so
//! agreement on a small edit is not drowned out by a large unchanged file.
//!
//! # Example
//!
//! ```
//! use conflict_metrics::anchored_ratio;
//!
//! let original = "a\nb\nc";
//! let score = anchored_ratio(original, "a\nB\nc", "a\nB\nc", false);
//! assert!((score - 1.0).abs() < f64::EPSILON);
//! ```

pub mod anchored;
pub mod diff;
pub mod error;
pub mod lines;
pub mod settings;

pub use anchored::{
    AlignmentStrategy, AnchoredScorer, ExactAlignment, FuzzyAlignment, ScoreBreakdown, ScorePair,
};
pub use diff::{DiffAlgorithm, DiffOp, SequenceMatcher};
pub use error::MetricsError;
pub use lines::{LineMode, split_lines};
pub use settings::ScoringSettings;

/// Scores agreement between `candidate` and `reference` as rewrites of
/// `original`, in `[0, 1]`.
///
/// With `use_line_levenshtein` set, near-identical lines earn partial credit
/// by character similarity; otherwise only identical lines count. Returns
/// 1.0 when neither rewrite changed anything.
#[must_use]
pub fn anchored_ratio(
    original: &str,
    candidate: &str,
    reference: &str,
    use_line_levenshtein: bool,
) -> f64 {
    AnchoredScorer::new(use_line_levenshtein).score(original, candidate, reference)
}
