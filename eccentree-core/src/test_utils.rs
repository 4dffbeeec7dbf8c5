//! Shared test utilities for `eccentree-core`.

use eccentree_test_support::ci::property_test_profile::ProptestRunProfile;
use proptest::test_runner::Config as ProptestConfig;
use rand::{Rng, SeedableRng, rngs::SmallRng, seq::SliceRandom};

use crate::{graph::Graph, permutation::Permutation};

/// Builds a standard proptest configuration from the shared CI profile.
///
/// This keeps property suites aligned on the same `PROGTEST_CASES` and
/// `ECCENTREE_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Random tree where each vertex `v > 0` hangs off a uniformly chosen
/// earlier vertex.
pub(crate) fn random_tree(vertex_count: usize, seed: u64) -> Graph {
    let mut rng = SmallRng::seed_from_u64(seed);
    let edges: Vec<(usize, usize)> = (1..vertex_count)
        .map(|child| (rng.gen_range(0..child), child))
        .collect();
    Graph::from_edges(vertex_count, edges).expect("random parent attachment yields a tree")
}

/// Uniformly shuffled permutation of `0..order`.
pub(crate) fn random_permutation(order: usize, seed: u64) -> Permutation {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut images: Vec<usize> = (0..order).collect();
    images.shuffle(&mut rng);
    Permutation::new(images).expect("shuffled indices form a permutation")
}

/// Complete bipartite graph `K3,3`.
pub(crate) fn utility_graph() -> Graph {
    let edges = (0..3).flat_map(|left| (3..6).map(move |right| (left, right)));
    Graph::from_edges(6, edges).expect("K3,3 is valid")
}

/// Triangular prism: two triangles joined by a perfect matching.
pub(crate) fn prism_graph() -> Graph {
    Graph::from_edges(
        6,
        [(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3), (0, 3), (1, 4), (2, 5)],
    )
    .expect("prism is valid")
}
