//! Base-anchored agreement between two rewrites of the same text.
//!
//! Each rewrite is diffed against the base. Regions either side changed are
//! merged into blocks and scored on the lines both sides produced there;
//! pure insertions are scored per base boundary. Lines neither side touched
//! never enter the score, so unrelated context does not dilute it.

pub mod alignment;
pub mod intervals;
pub mod score;
pub mod slices;
pub mod spans;

pub use alignment::{AlignmentStrategy, ExactAlignment, FuzzyAlignment, line_similarity};
pub use intervals::{MergedBlock, merge_spans};
pub use score::{BlockScore, ScoreBreakdown, ScorePair, SlotScore};
pub use spans::{ChangeSpan, Segment, Side, SideEdits};

use std::collections::BTreeSet;
use std::fmt;

use tracing::{debug, instrument, trace};

use crate::diff::{DiffAlgorithm, SequenceMatcher, is_well_formed};
use crate::error::MetricsError;
use crate::lines::{LineMode, split_lines};
use crate::settings::ScoringSettings;

/// Scores how closely a candidate rewrite agrees with a reference rewrite.
///
/// The scorer holds no per-call state and can be shared across threads.
pub struct AnchoredScorer {
    diff: Box<dyn DiffAlgorithm>,
    alignment: Box<dyn AlignmentStrategy>,
    line_mode: LineMode,
    max_input_lines: Option<usize>,
}

impl fmt::Debug for AnchoredScorer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnchoredScorer")
            .field("alignment", &self.alignment.name())
            .field("line_mode", &self.line_mode)
            .field("max_input_lines", &self.max_input_lines)
            .finish_non_exhaustive()
    }
}

impl Default for AnchoredScorer {
    fn default() -> Self {
        Self::exact()
    }
}

impl AnchoredScorer {
    /// Creates a scorer crediting only identical lines.
    #[must_use]
    pub fn exact() -> Self {
        Self::with_strategy(Box::new(ExactAlignment))
    }

    /// Creates a scorer crediting near-identical lines by similarity.
    #[must_use]
    pub fn fuzzy() -> Self {
        Self::with_strategy(Box::new(FuzzyAlignment))
    }

    /// Creates a fuzzy scorer when `use_line_levenshtein` is set, else exact.
    #[must_use]
    pub fn new(use_line_levenshtein: bool) -> Self {
        if use_line_levenshtein {
            Self::fuzzy()
        } else {
            Self::exact()
        }
    }

    /// Creates a scorer from loaded settings.
    #[must_use]
    pub fn from_settings(settings: &ScoringSettings) -> Self {
        let mut scorer = Self::new(settings.use_line_levenshtein)
            .with_diff(SequenceMatcher::new().with_autojunk(settings.autojunk))
            .with_line_mode(settings.line_mode);
        scorer.max_input_lines = settings.max_input_lines;
        scorer
    }

    fn with_strategy(alignment: Box<dyn AlignmentStrategy>) -> Self {
        Self {
            diff: Box::new(SequenceMatcher::new()),
            alignment,
            line_mode: LineMode::default(),
            max_input_lines: None,
        }
    }

    /// Replaces the line diff used against the base.
    #[must_use]
    pub fn with_diff(mut self, diff: impl DiffAlgorithm + 'static) -> Self {
        self.diff = Box::new(diff);
        self
    }

    /// Replaces the alignment strategy.
    #[must_use]
    pub fn with_alignment(mut self, alignment: impl AlignmentStrategy + 'static) -> Self {
        self.alignment = Box::new(alignment);
        self
    }

    /// Sets how texts are split into lines.
    #[must_use]
    pub const fn with_line_mode(mut self, line_mode: LineMode) -> Self {
        self.line_mode = line_mode;
        self
    }

    /// Makes the checked entry points refuse texts longer than `limit` lines.
    #[must_use]
    pub const fn with_max_input_lines(mut self, limit: usize) -> Self {
        self.max_input_lines = Some(limit);
        self
    }

    /// Name of the alignment strategy in use.
    #[must_use]
    pub fn strategy_name(&self) -> &'static str {
        self.alignment.name()
    }

    /// Returns the agreement ratio in `[0, 1]`.
    ///
    /// The input limit is not enforced here; see [`Self::try_score`].
    #[must_use]
    pub fn score(&self, original: &str, candidate: &str, reference: &str) -> f64 {
        self.breakdown(original, candidate, reference).ratio
    }

    /// Returns the agreement ratio, enforcing the configured input limit.
    ///
    /// # Errors
    ///
    /// Returns [`MetricsError::InputTooLarge`] if any text exceeds the limit.
    pub fn try_score(
        &self,
        original: &str,
        candidate: &str,
        reference: &str,
    ) -> Result<f64, MetricsError> {
        Ok(self.try_breakdown(original, candidate, reference)?.ratio)
    }

    /// Returns the per-block and per-slot scores behind the ratio.
    #[must_use]
    pub fn breakdown(&self, original: &str, candidate: &str, reference: &str) -> ScoreBreakdown {
        let base = split_lines(original, self.line_mode);
        let cand = split_lines(candidate, self.line_mode);
        let refr = split_lines(reference, self.line_mode);
        self.breakdown_lines(&base, &cand, &refr)
    }

    /// Like [`Self::breakdown`], enforcing the configured input limit.
    ///
    /// # Errors
    ///
    /// Returns [`MetricsError::InputTooLarge`] if any text exceeds the limit.
    pub fn try_breakdown(
        &self,
        original: &str,
        candidate: &str,
        reference: &str,
    ) -> Result<ScoreBreakdown, MetricsError> {
        let base = split_lines(original, self.line_mode);
        let cand = split_lines(candidate, self.line_mode);
        let refr = split_lines(reference, self.line_mode);

        if let Some(limit) = self.max_input_lines {
            for (input, lines) in [("original", &base), ("candidate", &cand), ("reference", &refr)]
            {
                if lines.len() > limit {
                    return Err(MetricsError::InputTooLarge {
                        input,
                        lines: lines.len(),
                        limit,
                    });
                }
            }
        }

        Ok(self.breakdown_lines(&base, &cand, &refr))
    }

    /// Scores already split line sequences.
    #[must_use]
    #[instrument(level = "debug", skip_all, fields(strategy = self.alignment.name()))]
    pub fn breakdown_lines(&self, base: &[&str], cand: &[&str], refr: &[&str]) -> ScoreBreakdown {
        let cand_ops = self.diff.diff(base, cand);
        let ref_ops = self.diff.diff(base, refr);
        debug_assert!(is_well_formed(&cand_ops, base.len(), cand.len()));
        debug_assert!(is_well_formed(&ref_ops, base.len(), refr.len()));
        let candidate = SideEdits::from_ops(Side::Candidate, &cand_ops);
        let reference = SideEdits::from_ops(Side::Reference, &ref_ops);

        let spans: Vec<ChangeSpan> = candidate.spans().chain(reference.spans()).collect();
        let blocks: Vec<BlockScore> = merge_spans(&spans)
            .iter()
            .map(|block| self.score_block(block, (&candidate, cand), (&reference, refr)))
            .collect();

        let boundaries: BTreeSet<usize> = candidate
            .insertions()
            .keys()
            .chain(reference.insertions().keys())
            .copied()
            .collect();
        let slots: Vec<SlotScore> = boundaries
            .into_iter()
            .map(|boundary| self.score_slot(boundary, (&candidate, cand), (&reference, refr)))
            .collect();

        let breakdown = ScoreBreakdown::new(self.alignment.name(), blocks, slots);
        debug!(
            base_lines = base.len(),
            blocks = breakdown.blocks.len(),
            slots = breakdown.slots.len(),
            numerator = breakdown.total.numerator,
            denominator = breakdown.total.denominator,
            ratio = breakdown.ratio,
            "Scored rewrite against reference"
        );
        breakdown
    }

    fn score_block(
        &self,
        block: &MergedBlock,
        (cand_edits, cand): (&SideEdits, &[&str]),
        (ref_edits, refr): (&SideEdits, &[&str]),
    ) -> BlockScore {
        let mut denominator = 0;
        let mut mutual_deletions = 0;
        for micro in block.micro_intervals() {
            let cand_len = cand_edits.map_slice(micro.clone()).len();
            let ref_len = ref_edits.map_slice(micro.clone()).len();
            denominator += micro.len().max(cand_len).max(ref_len);
            // base lines both sides dropped from this same interval
            mutual_deletions += micro.len().saturating_sub(cand_len.max(ref_len));
        }

        let cand_lines = produced_lines(cand_edits, block, cand);
        let ref_lines = produced_lines(ref_edits, block, refr);
        let credit = self.alignment.align(&cand_lines, &ref_lines);

        let score = ScorePair::new(credit + line_count(mutual_deletions), line_count(denominator));
        debug_assert!(score.numerator <= score.denominator + 1e-9);
        trace!(
            start = block.range().start,
            end = block.range().end,
            micro = block.boundaries().len().saturating_sub(1),
            numerator = score.numerator,
            denominator = score.denominator,
            "Scored merged block"
        );

        BlockScore {
            start: block.range().start,
            end: block.range().end,
            micro_intervals: block.micro_intervals().collect(),
            score,
        }
    }

    fn score_slot(
        &self,
        boundary: usize,
        (cand_edits, cand): (&SideEdits, &[&str]),
        (ref_edits, refr): (&SideEdits, &[&str]),
    ) -> SlotScore {
        let cand_lines = &cand[cand_edits.inserted_at(boundary)];
        let ref_lines = &refr[ref_edits.inserted_at(boundary)];
        let credit = self.alignment.align(cand_lines, ref_lines);
        let score = ScorePair::new(credit, line_count(cand_lines.len().max(ref_lines.len())));
        trace!(
            boundary,
            candidate = cand_lines.len(),
            reference = ref_lines.len(),
            numerator = score.numerator,
            "Scored insertion slot"
        );

        SlotScore {
            boundary,
            candidate_lines: cand_lines.len(),
            reference_lines: ref_lines.len(),
            score,
        }
    }
}

/// Lines a side wrote inside `block`, excluding lines it carried from the base.
fn produced_lines<'t>(edits: &SideEdits, block: &MergedBlock, lines: &[&'t str]) -> Vec<&'t str> {
    edits
        .changed_within(block.range())
        .flat_map(|range| lines[range].iter().copied())
        .collect()
}

#[allow(clippy::cast_precision_loss)]
fn line_count(lines: usize) -> f64 {
    lines as f64
}
