//! Mapping base ranges onto a rewrite's line coordinates.

use std::ops::Range;

use super::spans::{Segment, SideEdits};

impl SideEdits {
    /// Maps the base range `[start, end)` onto this side's rewrite.
    ///
    /// Kept segments map line for line. A changed segment maps by offset from
    /// its start; the piece reaching the end of the segment also takes any
    /// surplus rewrite lines, and pieces past a shorter replacement are empty.
    /// Segments partition the base, so the result is always contiguous.
    #[must_use]
    pub fn map_slice(&self, base: Range<usize>) -> Range<usize> {
        let mut mapped: Option<Range<usize>> = None;

        for segment in self.segments() {
            let seg_base = segment.base();
            let lo = base.start.max(seg_base.start);
            let hi = base.end.min(seg_base.end);
            if lo >= hi {
                continue;
            }

            let cand = segment.cand();
            let piece = match segment {
                Segment::Kept { .. } => {
                    (cand.start + (lo - seg_base.start))..(cand.start + (hi - seg_base.start))
                }
                Segment::Changed { .. } => {
                    let start = (cand.start + (lo - seg_base.start)).min(cand.end);
                    let end = if hi == seg_base.end {
                        cand.end
                    } else {
                        (cand.start + (hi - seg_base.start)).min(cand.end)
                    };
                    start..end
                }
            };

            mapped = Some(match mapped {
                Some(prev) => prev.start..piece.end,
                None => piece,
            });
        }

        mapped.unwrap_or(0..0)
    }

    /// Rewrite ranges this side produced inside `base`, excluding lines it
    /// carried over from the base.
    pub fn changed_within(&self, base: Range<usize>) -> impl Iterator<Item = Range<usize>> + '_ {
        self.segments().iter().filter_map(move |segment| match segment {
            Segment::Changed {
                base: seg_base,
                cand,
            } if seg_base.start >= base.start && seg_base.end <= base.end => Some(cand.clone()),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::anchored::spans::{Side, SideEdits};
    use crate::diff::{DiffAlgorithm, SequenceMatcher};

    fn edits(base: &[&str], target: &[&str]) -> SideEdits {
        SideEdits::from_ops(Side::Candidate, &SequenceMatcher::new().diff(base, target))
    }

    const BASE: [&str; 5] = ["line1", "line2", "line3", "line4", "line5"];

    #[test]
    fn test_kept_range_maps_verbatim() {
        let edits = edits(
            &BASE,
            &["line1", "line45", "line211", "line333", "line4", "line5"],
        );
        assert_eq!(edits.map_slice(3..4), 4..5);
        assert_eq!(edits.map_slice(0..1), 0..1);
    }

    #[test]
    fn test_boundary_inside_replace_splits_by_offset() {
        // replace [1,4) -> [1,5); the last piece takes the surplus line
        let edits = edits(
            &BASE,
            &["line1", "line222", "line233", "line333", "line444", "line5"],
        );
        assert_eq!(edits.map_slice(1..3), 1..3);
        assert_eq!(edits.map_slice(3..4), 3..5);
        assert_eq!(edits.map_slice(1..4), 1..5);
    }

    #[test]
    fn test_pieces_past_short_replacement_are_empty() {
        let edits = edits(&["A", "B", "C", "D", "E"], &["A", "X", "E"]);
        assert_eq!(edits.map_slice(1..2), 1..2);
        assert_eq!(edits.map_slice(2..3), 2..2);
        assert_eq!(edits.map_slice(3..4), 2..2);
    }

    #[test]
    fn test_deletion_maps_to_empty() {
        let edits = edits(&["A", "B", "C", "D", "E"], &["A", "E"]);
        assert!(edits.map_slice(1..4).is_empty());
    }

    #[test]
    fn test_range_spanning_kept_and_changed() {
        let edits = edits(&["a1", "a2", "a3", "a4"], &["a1", "a2", "c3", "c4"]);
        assert_eq!(edits.map_slice(1..4), 1..4);
        let changed: Vec<_> = edits.changed_within(1..4).collect();
        assert_eq!(changed, vec![2..4]);
    }
}
