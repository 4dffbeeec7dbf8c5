//! Seeded random trees for benchmarks.

use eccentree_core::{Graph, Permutation};
use rand::{Rng, SeedableRng, rngs::SmallRng, seq::SliceRandom};

use crate::error::BenchSetupError;

/// Random tree where each vertex `v > 0` hangs off a uniformly chosen
/// earlier vertex.
///
/// # Errors
/// Returns [`BenchSetupError::Graph`] when `vertex_count` is zero.
pub fn random_tree(vertex_count: usize, seed: u64) -> Result<Graph, BenchSetupError> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let edges: Vec<(usize, usize)> = (1..vertex_count)
        .map(|child| (rng.gen_range(0..child), child))
        .collect();
    Ok(Graph::from_edges(vertex_count, edges)?)
}

/// `graph` under a uniformly shuffled relabelling.
///
/// # Errors
/// Returns [`BenchSetupError`] if the relabelled graph cannot be built.
pub fn shuffled(graph: &Graph, seed: u64) -> Result<Graph, BenchSetupError> {
    let order = graph.vertex_count();
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut images: Vec<usize> = (0..order).collect();
    images.shuffle(&mut rng);
    let permutation =
        Permutation::new(images).ok_or(BenchSetupError::InvalidPermutation { order })?;
    Ok(graph.relabel(&permutation)?)
}
