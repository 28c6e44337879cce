//! Scenario tests for `anchored_ratio` on hand-computed rewrites.

use conflict_metrics::anchored_ratio;

fn assert_about(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() <= 1e-6,
        "expected {expected}, got {actual}"
    );
}

fn lines(items: &[&str]) -> String {
    items.join("\n")
}

fn numbered(prefix: &str, count: usize) -> Vec<String> {
    (1..=count).map(|i| format!("{prefix}{i}")).collect()
}

#[test]
fn test_no_changes_scores_one() {
    let original = "a\nb\nc";
    assert_about(anchored_ratio(original, original, original, false), 1.0);
    assert_about(anchored_ratio(original, original, original, true), 1.0);
}

#[test]
fn test_empty_inputs_score_one() {
    assert_about(anchored_ratio("", "", "", false), 1.0);
}

#[test]
fn test_one_side_changes_only() {
    assert_about(anchored_ratio("a\nb\nc", "a\nB\nc", "a\nb\nc", false), 0.0);
}

#[test]
fn test_identical_insertions_in_same_slot() {
    let score = anchored_ratio("L1\nL2", "L1\nX\nY\nL2", "L1\nX\nY\nL2", false);
    assert_about(score, 2.0 / 2.0);
}

#[test]
fn test_identical_insertions_in_different_slots_get_no_credit() {
    let score = anchored_ratio(
        "L1\nL2\nL3",
        "L1\nX\nY\nL2\nL3",
        "L1\nL2\nX\nY\nL3",
        false,
    );
    assert_about(score, 0.0 / 4.0);
}

#[test]
fn test_expansion_vs_compression_of_same_line() {
    let score = anchored_ratio("A\nB\nC", "A\nX\nY\nZ\nC", "A\nX\nW\nC", false);
    assert_about(score, 1.0 / 3.0);
}

#[test]
fn test_contained_change_with_equal_insertion() {
    let original = lines(&["line1", "line2", "line3", "line4", "line5"]);
    let candidate = lines(&[
        "line1", "line222", "line233", "line333", "line444", "line5", "line66",
    ]);
    let reference = lines(&[
        "line1", "line45", "line211", "line333", "line4", "line5", "line66",
    ]);

    assert_about(anchored_ratio(&original, &candidate, &reference, false), 2.0 / 6.0);

    let fuzzy = anchored_ratio(&original, &candidate, &reference, true);
    assert!((2.0 / 6.0..=1.0).contains(&fuzzy), "fuzzy score {fuzzy}");
}

#[test]
fn test_partial_overlap_sharing_one_line() {
    let original = numbered("a", 7).join("\n");
    let candidate = lines(&["a1", "b2", "b3", "KEEP", "b5", "a6", "a7"]);
    let reference = lines(&["a1", "a2", "a3", "c4", "KEEP", "c6", "c7"]);

    assert_about(anchored_ratio(&original, &candidate, &reference, false), 1.0 / 6.0);

    let fuzzy = anchored_ratio(&original, &candidate, &reference, true);
    assert!((1.0 / 6.0..=2.0 / 6.0).contains(&fuzzy), "fuzzy score {fuzzy}");
}

#[test]
fn test_one_span_overlapping_two() {
    let original = numbered("a", 7).join("\n");
    let candidate = lines(&["a1", "b2", "b3", "KEEP", "b5", "a6", "b7"]);
    let reference = lines(&["a1", "a2", "a3", "c4", "KEEP", "c6", "c7"]);

    assert_about(anchored_ratio(&original, &candidate, &reference, false), 1.0 / 6.0);

    let fuzzy = anchored_ratio(&original, &candidate, &reference, true);
    assert!((1.0 / 6.0..=2.0 / 6.0).contains(&fuzzy), "fuzzy score {fuzzy}");
}

#[test]
fn test_chained_overlap() {
    let original = numbered("a", 9).join("\n");
    let candidate = lines(&["a1", "b2", "b3", "KEEP", "b5", "a6", "a7", "b8", "b9"]);
    let reference = lines(&["a1", "a2", "a3", "c4", "KEEP", "c6", "c7", "a8", "a9"]);

    assert_about(anchored_ratio(&original, &candidate, &reference, false), 1.0 / 8.0);
}

#[test]
fn test_identical_reorder_counts_as_full_match() {
    let score = anchored_ratio("l1\nl2\nl3", "l1\nl3\nl2", "l1\nl3\nl2", false);
    assert_about(score, 1.0);
}

#[test]
fn test_reorder_vs_unchanged_gets_no_credit() {
    let score = anchored_ratio("l1\nl2\nl3", "l1\nl3\nl2", "l1\nl2\nl3", false);
    assert_about(score, 0.0);
}

#[test]
fn test_two_disjoint_regions_partial_agreement() {
    let original = "l1\nl2\nl3\nl4";
    let candidate = "l1\nX\nl3\nY";
    let reference = "l1\nX\nl3\nZ";

    assert_about(anchored_ratio(original, candidate, reference, false), 1.0 / 2.0);

    let fuzzy = anchored_ratio(original, candidate, reference, true);
    assert!((0.5..=1.0).contains(&fuzzy), "fuzzy score {fuzzy}");
}

#[test]
fn test_one_common_and_one_unique_insertion() {
    let original = "line1\nline2\nline3\nline4\nline5\n";
    let candidate = "line1\nline2\nline3\nline4\nline5\nline66\n";
    let reference = "line1\nline45\nline2\nline3\nline4\nline5\nline66\n";

    assert_about(anchored_ratio(original, candidate, reference, false), 1.0 / 2.0);

    let fuzzy = anchored_ratio(original, candidate, reference, true);
    assert!((0.5..=1.0).contains(&fuzzy), "fuzzy score {fuzzy}");
}

#[test]
fn test_mutual_deletion_is_credited() {
    let score = anchored_ratio("A\nB\nC\nD\nE", "A\nE", "A\nX\nE", false);
    assert_about(score, 2.0 / 3.0);
}

#[test]
fn test_deleting_different_lines_is_not_agreement() {
    assert_about(anchored_ratio("A\nB\nC\nD", "A\nC\nD", "A\nB\nD", false), 0.0);

    let original = "A\nB\nC\nD\nE\nF";
    assert_about(anchored_ratio(original, "A\nD\nE\nF", "A\nB\nC\nF", false), 0.0);
    assert_about(anchored_ratio(original, "A\nD\nE\nF", "A\nB\nC\nF", true), 0.0);

    // replacing instead of deleting scores the same
    assert_about(anchored_ratio("A\nB\nC\nD", "A\nX\nC\nD", "A\nB\nY\nD", false), 0.0);
}

#[test]
fn test_partially_shared_deletion_credits_only_common_lines() {
    let score = anchored_ratio("A\nB\nC\nD\nE", "A\nD\nE", "A\nC\nD\nE", false);
    assert_about(score, 1.0 / 2.0);
}

#[test]
fn test_single_line_similarity_in_fuzzy_mode() {
    let score = anchored_ratio("a\nb\nc", "a\nkitten\nc", "a\nsitting\nc", true);
    assert!((score - 0.6153).abs() < 1e-3, "fuzzy score {score}");
    assert_about(
        anchored_ratio("a\nb\nc", "a\nkitten\nc", "a\nsitting\nc", false),
        0.0,
    );
}

#[test]
fn test_unrelated_context_does_not_dilute() {
    let mut original = numbered("ctx", 200);
    original.insert(100, "target".to_owned());
    let mut rewrite = original.clone();
    rewrite[100] = "patched".to_owned();

    let original = original.join("\n");
    let rewrite = rewrite.join("\n");
    assert_about(anchored_ratio(&original, &rewrite, &rewrite, false), 1.0);
}

#[test]
fn test_swapping_rewrites_keeps_score() {
    let original = numbered("a", 7).join("\n");
    let candidate = lines(&["a1", "b2", "b3", "KEEP", "b5", "a6", "b7"]);
    let reference = lines(&["a1", "a2", "a3", "c4", "KEEP", "c6", "c7"]);

    for fuzzy in [false, true] {
        let forward = anchored_ratio(&original, &candidate, &reference, fuzzy);
        let backward = anchored_ratio(&original, &reference, &candidate, fuzzy);
        assert_about(forward, backward);
    }
}
