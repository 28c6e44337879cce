//! Benchmarks for the end-to-end anchored ratio.
//!
//! Performance-critical paths:
//! - `exact`: two base diffs plus line-level LCS over changed regions
//! - `fuzzy`: the same with character-level similarity per line pair

#![allow(missing_docs)]

use conflict_metrics::AnchoredScorer;
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

/// Builds a source-like base and two rewrites editing every `stride`-th line.
fn rewrite_triple(lines: usize, stride: usize) -> (String, String, String) {
    let base: Vec<String> = (0..lines)
        .map(|i| format!("    let value_{i} = compute({i});"))
        .collect();

    let mut candidate = base.clone();
    let mut reference = base.clone();
    for i in (0..lines).step_by(stride) {
        candidate[i] = format!("    let value_{i} = compute_checked({i})?;");
        reference[i] = if i % (stride * 2) == 0 {
            candidate[i].clone()
        } else {
            format!("    let value_{i} = compute_fast({i});")
        };
    }

    (base.join("\n"), candidate.join("\n"), reference.join("\n"))
}

fn bench_exact(c: &mut Criterion) {
    let mut group = c.benchmark_group("anchored_ratio/exact");
    let scorer = AnchoredScorer::exact();

    for lines in [100usize, 1_000, 10_000] {
        let (base, candidate, reference) = rewrite_triple(lines, 10);
        group.throughput(Throughput::Elements(lines as u64));
        group.bench_with_input(BenchmarkId::from_parameter(lines), &lines, |b, _| {
            b.iter(|| scorer.score(black_box(&base), black_box(&candidate), black_box(&reference)));
        });
    }

    group.finish();
}

fn bench_fuzzy(c: &mut Criterion) {
    let mut group = c.benchmark_group("anchored_ratio/fuzzy");
    let scorer = AnchoredScorer::fuzzy();

    for lines in [100usize, 1_000, 10_000] {
        let (base, candidate, reference) = rewrite_triple(lines, 10);
        group.throughput(Throughput::Elements(lines as u64));
        group.bench_with_input(BenchmarkId::from_parameter(lines), &lines, |b, _| {
            b.iter(|| scorer.score(black_box(&base), black_box(&candidate), black_box(&reference)));
        });
    }

    group.finish();
}

fn bench_change_density(c: &mut Criterion) {
    let mut group = c.benchmark_group("anchored_ratio/change_density");
    let scorer = AnchoredScorer::exact();

    // Denser edits mean more, smaller merged blocks
    for stride in [2usize, 5, 25, 100] {
        let (base, candidate, reference) = rewrite_triple(2_000, stride);
        group.bench_function(format!("every_{stride}_lines"), |b| {
            b.iter(|| scorer.breakdown(black_box(&base), black_box(&candidate), black_box(&reference)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_exact, bench_fuzzy, bench_change_density);
criterion_main!(benches);
