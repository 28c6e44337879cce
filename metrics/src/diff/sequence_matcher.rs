//! Longest-matching-block line diff.
//!
//! The matcher anchors the longest run of equal lines shared by both
//! sequences, then recurses on the unmatched flanks to the left and right of
//! it. The result is the classical "ratcliff/obershelp" style edit script:
//! it does not minimise the number of edits, but it keeps long unchanged runs
//! intact.
//!
//! Tie-breaks are fixed: among equally long matches the one starting earliest
//! in the base wins, then the one starting earliest in the target.

use std::collections::HashMap;

use super::{DiffAlgorithm, DiffOp};

/// Targets shorter than this never trigger the popular-line heuristic.
const AUTOJUNK_MIN_LEN: usize = 200;

/// A matching block: `base[a..a + size] == target[b..b + size]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Match {
    /// Start of the block in the base sequence.
    pub a: usize,
    /// Start of the block in the target sequence.
    pub b: usize,
    /// Number of equal lines in the block.
    pub size: usize,
}

/// Longest-matching-block diff algorithm.
///
/// With `autojunk` enabled (the default), lines that occur in more than
/// 1% (+1) of a target of at least 200 lines are not used to seed matches.
/// They can still extend a match that was seeded elsewhere.
#[derive(Debug, Clone, Copy)]
pub struct SequenceMatcher {
    autojunk: bool,
}

impl Default for SequenceMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl SequenceMatcher {
    /// Creates a matcher with the popular-line heuristic enabled.
    #[must_use]
    pub const fn new() -> Self {
        Self { autojunk: true }
    }

    /// Enables or disables the popular-line heuristic.
    #[must_use]
    pub const fn with_autojunk(mut self, autojunk: bool) -> Self {
        self.autojunk = autojunk;
        self
    }

    /// Returns the matching blocks between `base` and `target`.
    ///
    /// Blocks are sorted, adjacent blocks are collapsed, and the list always
    /// ends with the sentinel `Match { a: base.len(), b: target.len(), size: 0 }`.
    #[must_use]
    pub fn matching_blocks(&self, base: &[&str], target: &[&str]) -> Vec<Match> {
        let index = TargetIndex::build(target, self.autojunk);
        let mut blocks = Vec::new();
        let mut queue = vec![(0, base.len(), 0, target.len())];

        while let Some((alo, ahi, blo, bhi)) = queue.pop() {
            let found = index.find_longest_match(base, target, alo, ahi, blo, bhi);
            if found.size == 0 {
                continue;
            }
            blocks.push(found);
            if alo < found.a && blo < found.b {
                queue.push((alo, found.a, blo, found.b));
            }
            if found.a + found.size < ahi && found.b + found.size < bhi {
                queue.push((found.a + found.size, ahi, found.b + found.size, bhi));
            }
        }
        blocks.sort_unstable();

        let mut collapsed: Vec<Match> = Vec::with_capacity(blocks.len() + 1);
        for block in blocks {
            match collapsed.last_mut() {
                Some(last) if last.a + last.size == block.a && last.b + last.size == block.b => {
                    last.size += block.size;
                }
                _ => collapsed.push(block),
            }
        }
        collapsed.push(Match {
            a: base.len(),
            b: target.len(),
            size: 0,
        });
        collapsed
    }
}

impl DiffAlgorithm for SequenceMatcher {
    fn diff(&self, base: &[&str], target: &[&str]) -> Vec<DiffOp> {
        let mut ops = Vec::new();
        let (mut i, mut j) = (0, 0);

        for block in self.matching_blocks(base, target) {
            match (i < block.a, j < block.b) {
                (true, true) => ops.push(DiffOp::Replace {
                    old_start: i,
                    old_end: block.a,
                    new_start: j,
                    new_end: block.b,
                }),
                (true, false) => ops.push(DiffOp::Delete {
                    old_start: i,
                    old_end: block.a,
                    new_index: j,
                }),
                (false, true) => ops.push(DiffOp::Insert {
                    old_index: i,
                    new_start: j,
                    new_end: block.b,
                }),
                (false, false) => {}
            }
            i = block.a + block.size;
            j = block.b + block.size;
            if block.size > 0 {
                ops.push(DiffOp::Equal {
                    old_start: block.a,
                    old_end: i,
                    new_start: block.b,
                    new_end: j,
                });
            }
        }

        ops
    }
}

/// Positions of every target line, minus the popular ones.
struct TargetIndex<'t> {
    positions: HashMap<&'t str, Vec<usize>>,
}

impl<'t> TargetIndex<'t> {
    fn build(target: &[&'t str], autojunk: bool) -> Self {
        let mut positions: HashMap<&'t str, Vec<usize>> = HashMap::new();
        for (j, line) in target.iter().enumerate() {
            positions.entry(*line).or_default().push(j);
        }

        if autojunk && target.len() >= AUTOJUNK_MIN_LEN {
            let threshold = target.len() / 100 + 1;
            positions.retain(|_, found| found.len() <= threshold);
        }

        Self { positions }
    }

    /// Finds the longest block of equal lines inside `base[alo..ahi]` and
    /// `target[blo..bhi]`, then widens it over equal neighbours (which may
    /// be popular lines the index skipped).
    fn find_longest_match(
        &self,
        base: &[&str],
        target: &[&str],
        alo: usize,
        ahi: usize,
        blo: usize,
        bhi: usize,
    ) -> Match {
        let mut best = Match {
            a: alo,
            b: blo,
            size: 0,
        };
        // run length of the match ending at target[j] for the previous base line
        let mut run_ending_at: HashMap<usize, usize> = HashMap::new();

        for (i, line) in base.iter().enumerate().take(ahi).skip(alo) {
            let mut next_runs = HashMap::new();
            if let Some(found) = self.positions.get(*line) {
                for &j in found {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let k = j
                        .checked_sub(1)
                        .and_then(|prev| run_ending_at.get(&prev))
                        .copied()
                        .unwrap_or(0)
                        + 1;
                    next_runs.insert(j, k);
                    if k > best.size {
                        best = Match {
                            a: i + 1 - k,
                            b: j + 1 - k,
                            size: k,
                        };
                    }
                }
            }
            run_ending_at = next_runs;
        }

        while best.a > alo && best.b > blo && base[best.a - 1] == target[best.b - 1] {
            best.a -= 1;
            best.b -= 1;
            best.size += 1;
        }
        while best.a + best.size < ahi
            && best.b + best.size < bhi
            && base[best.a + best.size] == target[best.b + best.size]
        {
            best.size += 1;
        }

        best
    }
}
