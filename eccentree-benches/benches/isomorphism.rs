//! Isomorphism testing benchmarks.
//!
//! Compares random trees against shuffled copies of themselves, the
//! worst case for the search since every fast reject passes.
#![expect(
    missing_docs,
    reason = "Criterion macros generate items without doc comments"
)]
#![expect(
    clippy::shadow_reuse,
    reason = "Criterion bench_with_input closures rebind parameter names"
)]
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use eccentree_benches::{
    error::BenchSetupError,
    params::TreeBenchParams,
    source::{random_tree, shuffled},
};
use eccentree_core::{are_isomorphic, enumerate_trees, remove_isomorphic_duplicates};

const SEED: u64 = 42;

const VERTEX_COUNTS: &[usize] = &[16, 64, 256];

fn shuffled_pairs_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let mut group = c.benchmark_group("are_isomorphic_shuffled");
    group.sample_size(20);

    for &vertex_count in VERTEX_COUNTS {
        let tree = random_tree(vertex_count, SEED)?;
        let copy = shuffled(&tree, SEED.wrapping_add(1))?;
        let params = TreeBenchParams { vertex_count };
        group.bench_with_input(
            BenchmarkId::from_parameter(&params),
            &(tree, copy),
            |b, (tree, copy)| {
                b.iter(|| are_isomorphic(tree, copy));
            },
        );
    }

    group.finish();
    Ok(())
}

fn dedup_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let mut group = c.benchmark_group("remove_isomorphic_duplicates");
    group.sample_size(10);

    let vertex_count = 10;
    let trees = enumerate_trees(vertex_count)?;
    let mut offered = Vec::with_capacity(trees.len().saturating_mul(2));
    for (offset, tree) in (0_u64..).zip(&trees) {
        offered.push(tree.clone());
        offered.push(shuffled(tree, SEED.wrapping_add(offset))?);
    }
    group.bench_with_input(
        BenchmarkId::from_parameter(TreeBenchParams { vertex_count }),
        &offered,
        |b, offered| {
            b.iter(|| remove_isomorphic_duplicates(offered.clone()));
        },
    );

    group.finish();
    Ok(())
}

fn shuffled_pairs(c: &mut Criterion) {
    if let Err(err) = shuffled_pairs_impl(c) {
        panic!("are_isomorphic benchmark setup failed: {err}");
    }
}

fn dedup(c: &mut Criterion) {
    if let Err(err) = dedup_impl(c) {
        panic!("dedup benchmark setup failed: {err}");
    }
}

criterion_group!(benches, shuffled_pairs, dedup);
criterion_main!(benches);
