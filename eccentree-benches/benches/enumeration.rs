//! Tree enumeration benchmarks.
//!
//! Measures leaf-extension enumeration with isomorphism deduplication, and a
//! full exploration (enumeration, invariants, grouping) at the same sizes.
#![expect(
    missing_docs,
    reason = "Criterion macros generate items without doc comments"
)]
#![expect(
    clippy::shadow_reuse,
    reason = "Criterion bench_with_input closures rebind parameter names"
)]
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use eccentree_benches::{error::BenchSetupError, params::TreeBenchParams};
use eccentree_core::{ExecutionStrategy, ExplorerBuilder, enumerate_trees};

/// Vertex counts to benchmark.
const VERTEX_COUNTS: &[usize] = &[8, 10, 12];

fn enumerate_trees_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let mut group = c.benchmark_group("enumerate_trees");
    group.sample_size(10);

    for &vertex_count in VERTEX_COUNTS {
        let params = TreeBenchParams { vertex_count };
        group.bench_with_input(
            BenchmarkId::from_parameter(&params),
            &vertex_count,
            |b, &vertex_count| {
                b.iter(|| enumerate_trees(vertex_count));
            },
        );
    }

    group.finish();
    Ok(())
}

fn explore_trees_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let mut group = c.benchmark_group("explore_trees");
    group.sample_size(10);

    for &vertex_count in VERTEX_COUNTS {
        let explorer = ExplorerBuilder::new()
            .with_vertex_count(vertex_count)
            .with_execution_strategy(ExecutionStrategy::Sequential)
            .build()?;
        let params = TreeBenchParams { vertex_count };
        group.bench_with_input(
            BenchmarkId::from_parameter(&params),
            &explorer,
            |b, explorer| {
                b.iter(|| explorer.run());
            },
        );
    }

    group.finish();
    Ok(())
}

fn enumerate_trees_bench(c: &mut Criterion) {
    if let Err(err) = enumerate_trees_impl(c) {
        panic!("enumerate_trees benchmark setup failed: {err}");
    }
}

fn explore_trees_bench(c: &mut Criterion) {
    if let Err(err) = explore_trees_impl(c) {
        panic!("explore_trees benchmark setup failed: {err}");
    }
}

criterion_group!(benches, enumerate_trees_bench, explore_trees_bench);
criterion_main!(benches);
