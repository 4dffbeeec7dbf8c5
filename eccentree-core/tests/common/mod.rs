use eccentree_core::{Exploration, ExplorerBuilder};

/// Signatures of every group, rendered, in sequence order.
#[must_use]
pub fn group_signatures(exploration: &Exploration) -> Vec<String> {
    exploration
        .groups()
        .iter()
        .map(|group| group.signature().to_string())
        .collect()
}

/// A builder that annotates on the calling thread so recorded spans and
/// events stay on the test's subscriber.
#[must_use]
pub fn sequential_trees(vertex_count: usize) -> ExplorerBuilder {
    ExplorerBuilder::new()
        .with_vertex_count(vertex_count)
        .with_execution_strategy(eccentree_core::ExecutionStrategy::Sequential)
}
