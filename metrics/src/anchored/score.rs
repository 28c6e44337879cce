//! Score pairs and the per-region breakdown they aggregate into.

use std::iter::Sum;
use std::ops::{Add, AddAssign, Range};

use serde::Serialize;

/// Credited agreement over the number of lines it was measured against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ScorePair {
    /// Credited agreement.
    pub numerator: f64,
    /// Lines the agreement is measured against.
    pub denominator: f64,
}

impl ScorePair {
    /// Creates a pair.
    #[must_use]
    pub const fn new(numerator: f64, denominator: f64) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Returns `numerator / denominator`, or 1.0 when nothing was measured.
    #[must_use]
    pub fn ratio(&self) -> f64 {
        if self.denominator > 0.0 {
            self.numerator / self.denominator
        } else {
            1.0
        }
    }
}

impl Add for ScorePair {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.numerator + rhs.numerator,
            self.denominator + rhs.denominator,
        )
    }
}

impl AddAssign for ScorePair {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for ScorePair {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

impl<'a> Sum<&'a ScorePair> for ScorePair {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Score of one merged block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlockScore {
    /// First base line of the block.
    pub start: usize,
    /// One past the last base line of the block.
    pub end: usize,
    /// Micro-intervals the denominator was summed over.
    pub micro_intervals: Vec<Range<usize>>,
    /// Block pair.
    pub score: ScorePair,
}

/// Score of one insertion slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotScore {
    /// Base boundary the lines were inserted at.
    pub boundary: usize,
    /// Lines the candidate inserted.
    pub candidate_lines: usize,
    /// Lines the reference inserted.
    pub reference_lines: usize,
    /// Slot pair.
    pub score: ScorePair,
}

/// Full result of one anchored comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    /// Overall agreement in `[0, 1]`.
    pub ratio: f64,
    /// Sum of every block and slot pair.
    pub total: ScorePair,
    /// Name of the alignment strategy used.
    pub strategy: &'static str,
    /// Merged blocks, in base order.
    pub blocks: Vec<BlockScore>,
    /// Insertion slots, in base order.
    pub slots: Vec<SlotScore>,
}

impl ScoreBreakdown {
    /// Aggregates block and slot scores.
    #[must_use]
    pub fn new(strategy: &'static str, blocks: Vec<BlockScore>, slots: Vec<SlotScore>) -> Self {
        let total: ScorePair = blocks
            .iter()
            .map(|block| block.score)
            .chain(slots.iter().map(|slot| slot.score))
            .sum();
        Self {
            ratio: total.ratio(),
            total,
            strategy,
            blocks,
            slots,
        }
    }

    /// Returns true when neither rewrite touched the base.
    #[must_use]
    pub fn is_unchanged(&self) -> bool {
        self.blocks.is_empty() && self.slots.is_empty()
    }
}
