//! Line-level diff primitives.
//!
//! This module provides a trait-based approach to diff algorithms. Every
//! implementation produces the same opcode stream shape, so a base text can
//! be diffed against several rewrites and the resulting base offsets compared
//! directly.

pub mod sequence_matcher;

pub use sequence_matcher::{Match, SequenceMatcher};

use std::ops::Range;

/// A single diff operation between a base sequence and a target sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffOp {
    /// Lines that are unchanged between both texts.
    Equal {
        /// Start line index in the old text (0-based, inclusive).
        old_start: usize,
        /// End line index in the old text (0-based, exclusive).
        old_end: usize,
        /// Start line index in the new text (0-based, inclusive).
        new_start: usize,
        /// End line index in the new text (0-based, exclusive).
        new_end: usize,
    },
    /// Lines that were inserted in the new text.
    Insert {
        /// Boundary in the old text before which the lines are inserted.
        old_index: usize,
        /// Start line index in the new text (0-based, inclusive).
        new_start: usize,
        /// End line index in the new text (0-based, exclusive).
        new_end: usize,
    },
    /// Lines that were deleted from the old text.
    Delete {
        /// Start line index in the old text (0-based, inclusive).
        old_start: usize,
        /// End line index in the old text (0-based, exclusive).
        old_end: usize,
        /// Boundary in the new text where the deleted lines used to be.
        new_index: usize,
    },
    /// Lines that were replaced (deleted and inserted).
    Replace {
        /// Start line index in the old text (0-based, inclusive).
        old_start: usize,
        /// End line index in the old text (0-based, exclusive).
        old_end: usize,
        /// Start line index in the new text (0-based, inclusive).
        new_start: usize,
        /// End line index in the new text (0-based, exclusive).
        new_end: usize,
    },
}

impl DiffOp {
    /// Returns the range covered in the old text. Empty for insertions.
    #[must_use]
    pub const fn old_range(&self) -> Range<usize> {
        match *self {
            Self::Equal {
                old_start, old_end, ..
            }
            | Self::Delete {
                old_start, old_end, ..
            }
            | Self::Replace {
                old_start, old_end, ..
            } => old_start..old_end,
            Self::Insert { old_index, .. } => old_index..old_index,
        }
    }

    /// Returns the range covered in the new text. Empty for deletions.
    #[must_use]
    pub const fn new_range(&self) -> Range<usize> {
        match *self {
            Self::Equal {
                new_start, new_end, ..
            }
            | Self::Insert {
                new_start, new_end, ..
            }
            | Self::Replace {
                new_start, new_end, ..
            } => new_start..new_end,
            Self::Delete { new_index, .. } => new_index..new_index,
        }
    }

    /// Returns true if this operation represents a change (not equal).
    #[must_use]
    pub const fn is_change(&self) -> bool {
        !matches!(self, Self::Equal { .. })
    }

    /// Returns the conventional lowercase tag of the operation.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Equal { .. } => "equal",
            Self::Insert { .. } => "insert",
            Self::Delete { .. } => "delete",
            Self::Replace { .. } => "replace",
        }
    }
}

/// Trait for diff algorithms.
///
/// Implementations must return operations whose old ranges partition
/// `0..base.len()` and whose new ranges partition `0..target.len()`, both in
/// order. [`is_well_formed`] checks exactly that.
pub trait DiffAlgorithm: Send + Sync {
    /// Computes the diff between two line sequences.
    ///
    /// # Arguments
    ///
    /// * `base` - The base/old version of the text as lines.
    /// * `target` - The target/new version of the text as lines.
    ///
    /// # Returns
    ///
    /// A vector of `DiffOp` operations that transform `base` into `target`.
    fn diff(&self, base: &[&str], target: &[&str]) -> Vec<DiffOp>;
}

/// Checks that `ops` tile both sequences contiguously and completely.
#[must_use]
pub fn is_well_formed(ops: &[DiffOp], old_len: usize, new_len: usize) -> bool {
    let mut old_pos = 0;
    let mut new_pos = 0;

    for op in ops {
        let (old, new) = (op.old_range(), op.new_range());
        if old.start != old_pos || new.start != new_pos {
            return false;
        }
        if old.end < old.start || new.end < new.start {
            return false;
        }
        old_pos = old.end;
        new_pos = new.end;
    }

    old_pos == old_len && new_pos == new_len
}
