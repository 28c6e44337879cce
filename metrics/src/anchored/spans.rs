//! Reduction of one side's opcode stream into base-anchored changes.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::Range;

use serde::Serialize;

use crate::diff::DiffOp;

/// Which rewrite of the base a change came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// The rewrite being evaluated (R).
    Candidate,
    /// The rewrite it is evaluated against (R̂).
    Reference,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Candidate => write!(f, "candidate"),
            Self::Reference => write!(f, "reference"),
        }
    }
}

/// A base-coordinate region one side's diff marks as changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeSpan {
    /// Originating side.
    pub side: Side,
    /// First changed base line.
    pub start: usize,
    /// One past the last changed base line.
    pub end: usize,
}

/// A coalesced run of one side's opcodes with a non-empty base range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Base lines carried over verbatim.
    Kept {
        /// Range in the base.
        base: Range<usize>,
        /// Range in the rewrite.
        cand: Range<usize>,
    },
    /// A maximal run of non-equal operations.
    Changed {
        /// Range in the base.
        base: Range<usize>,
        /// Range in the rewrite.
        cand: Range<usize>,
    },
}

impl Segment {
    /// Range of the segment in the base.
    #[must_use]
    pub fn base(&self) -> Range<usize> {
        match self {
            Self::Kept { base, .. } | Self::Changed { base, .. } => base.clone(),
        }
    }

    /// Range of the segment in the rewrite.
    #[must_use]
    pub fn cand(&self) -> Range<usize> {
        match self {
            Self::Kept { cand, .. } | Self::Changed { cand, .. } => cand.clone(),
        }
    }

    /// Returns true for [`Segment::Changed`].
    #[must_use]
    pub const fn is_changed(&self) -> bool {
        matches!(self, Self::Changed { .. })
    }
}

/// One side's edits relative to the base.
///
/// `segments` partition the base in order. `insertions` maps a base boundary
/// to the rewrite lines inserted there when no base line was replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SideEdits {
    side: Side,
    segments: Vec<Segment>,
    insertions: BTreeMap<usize, Range<usize>>,
}

impl SideEdits {
    /// Builds the edits of `side` from its opcode stream against the base.
    #[must_use]
    pub fn from_ops(side: Side, ops: &[DiffOp]) -> Self {
        let mut edits = Self {
            side,
            segments: Vec::new(),
            insertions: BTreeMap::new(),
        };
        let mut pending: Option<(Range<usize>, Range<usize>)> = None;

        for op in ops {
            if op.is_change() {
                let (old, new) = (op.old_range(), op.new_range());
                pending = Some(match pending.take() {
                    Some((base, cand)) => (base.start..old.end, cand.start..new.end),
                    None => (old, new),
                });
            } else {
                if let Some((base, cand)) = pending.take() {
                    edits.push_change(base, cand);
                }
                edits.segments.push(Segment::Kept {
                    base: op.old_range(),
                    cand: op.new_range(),
                });
            }
        }
        if let Some((base, cand)) = pending {
            edits.push_change(base, cand);
        }

        edits
    }

    fn push_change(&mut self, base: Range<usize>, cand: Range<usize>) {
        if base.is_empty() {
            if !cand.is_empty() {
                self.insertions.insert(base.start, cand);
            }
        } else {
            self.segments.push(Segment::Changed { base, cand });
        }
    }

    /// The side these edits belong to.
    #[must_use]
    pub const fn side(&self) -> Side {
        self.side
    }

    /// All segments, partitioning the base in order.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Pure insertions keyed by base boundary.
    #[must_use]
    pub const fn insertions(&self) -> &BTreeMap<usize, Range<usize>> {
        &self.insertions
    }

    /// Rewrite lines inserted at `boundary`, or an empty range.
    #[must_use]
    pub fn inserted_at(&self, boundary: usize) -> Range<usize> {
        self.insertions.get(&boundary).cloned().unwrap_or(0..0)
    }

    /// Base regions this side changed, in order.
    pub fn spans(&self) -> impl Iterator<Item = ChangeSpan> + '_ {
        let side = self.side;
        self.segments
            .iter()
            .filter(|segment| segment.is_changed())
            .map(move |segment| {
                let base = segment.base();
                ChangeSpan {
                    side,
                    start: base.start,
                    end: base.end,
                }
            })
    }
}
