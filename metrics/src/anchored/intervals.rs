//! Union of both sides' change spans into merged blocks.

use std::ops::Range;

use super::spans::ChangeSpan;

/// A connected region of changes from either side, with its micro-partition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedBlock {
    start: usize,
    end: usize,
    boundaries: Vec<usize>,
}

impl MergedBlock {
    /// Base range covered by the block.
    #[must_use]
    pub const fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Number of base lines covered by the block.
    #[must_use]
    pub const fn base_len(&self) -> usize {
        self.end - self.start
    }

    /// Sorted, de-duplicated span edges, block edges included.
    #[must_use]
    pub fn boundaries(&self) -> &[usize] {
        &self.boundaries
    }

    /// The finest sub-division of the block bounded by every span edge.
    pub fn micro_intervals(&self) -> impl Iterator<Item = Range<usize>> + '_ {
        self.boundaries.windows(2).map(|pair| pair[0]..pair[1])
    }
}

/// Merges overlapping or touching spans from both sides into blocks.
///
/// Spans may arrive in any order. Every block boundary list starts with the
/// block start and ends with the block end.
#[must_use]
pub fn merge_spans(spans: &[ChangeSpan]) -> Vec<MergedBlock> {
    let mut sorted: Vec<&ChangeSpan> = spans.iter().filter(|s| s.start < s.end).collect();
    sorted.sort_by_key(|span| (span.start, span.end));

    let mut blocks: Vec<MergedBlock> = Vec::new();
    for span in sorted {
        match blocks.last_mut() {
            Some(block) if span.start <= block.end => {
                block.end = block.end.max(span.end);
                block.boundaries.extend([span.start, span.end]);
            }
            _ => blocks.push(MergedBlock {
                start: span.start,
                end: span.end,
                boundaries: vec![span.start, span.end],
            }),
        }
    }

    for block in &mut blocks {
        block.boundaries.sort_unstable();
        block.boundaries.dedup();
    }
    blocks
}
