//! Benchmarks for the line diff against the base.
//!
//! Performance-critical paths:
//! - `matching_blocks`: longest-match recursion over the whole file
//! - autojunk: skipping very frequent lines (braces, blank-ish lines) as match seeds

#![allow(missing_docs)]

use conflict_metrics::{DiffAlgorithm, SequenceMatcher};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

/// Source-like lines where every fourth line is a closing brace.
fn source_lines(lines: usize, salt: &str) -> Vec<String> {
    (0..lines)
        .map(|i| {
            if i % 4 == 3 {
                "}".to_string()
            } else if i % 37 == 0 {
                format!("    edited_{salt}_{i}();")
            } else {
                format!("    call_{i}();")
            }
        })
        .collect()
}

fn bench_diff(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequence_matcher/diff");

    for lines in [100usize, 1_000, 10_000] {
        let base = source_lines(lines, "base");
        let target = source_lines(lines, "target");
        let base: Vec<&str> = base.iter().map(String::as_str).collect();
        let target: Vec<&str> = target.iter().map(String::as_str).collect();

        group.throughput(Throughput::Elements(lines as u64));
        group.bench_with_input(BenchmarkId::from_parameter(lines), &lines, |b, _| {
            let matcher = SequenceMatcher::new();
            b.iter(|| matcher.diff(black_box(&base), black_box(&target)));
        });
    }

    group.finish();
}

fn bench_autojunk(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequence_matcher/autojunk");

    let base = source_lines(5_000, "base");
    let target = source_lines(5_000, "target");
    let base: Vec<&str> = base.iter().map(String::as_str).collect();
    let target: Vec<&str> = target.iter().map(String::as_str).collect();

    for autojunk in [true, false] {
        let matcher = SequenceMatcher::new().with_autojunk(autojunk);
        group.bench_function(format!("autojunk_{autojunk}"), |b| {
            b.iter(|| matcher.matching_blocks(black_box(&base), black_box(&target)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_diff, bench_autojunk);
criterion_main!(benches);
