//! Exhaustive enumeration of unlabeled trees by leaf extension.

use tracing::debug;

use crate::{
    error::{BoundsError, GraphError},
    graph::Graph,
    isomorphism::Deduplicator,
};

/// Largest vertex count [`enumerate_trees`] accepts.
pub const MAX_TREE_VERTICES: usize = 20;

/// Returns one representative of every unlabeled tree on `vertex_count`
/// vertices.
///
/// Each tree on `n` vertices arises from one on `n - 1` vertices by adding a
/// leaf, so every level extends each representative of the previous level at
/// every vertex in ascending order and keeps the first graph of each
/// isomorphism class.
///
/// # Errors
/// Returns [`BoundsError::ZeroVertexCount`] for `vertex_count == 0` and
/// [`BoundsError::VertexCountTooLarge`] above [`MAX_TREE_VERTICES`].
///
/// # Examples
/// ```
/// use eccentree_core::enumerate_trees;
///
/// let trees = enumerate_trees(6)?;
/// assert_eq!(trees.len(), 6);
/// assert!(trees.iter().all(|tree| tree.is_tree()));
/// # Ok::<(), eccentree_core::ExplorerError>(())
/// ```
pub fn enumerate_trees(vertex_count: usize) -> crate::Result<Vec<Graph>> {
    validate_vertex_count(vertex_count)?;

    let mut level = vec![Graph::from_edges(1, [])?];
    for size in 2..=vertex_count {
        let mut dedup = Deduplicator::new();
        let mut offered = 0usize;
        for tree in &level {
            for anchor in 0..tree.vertex_count() {
                dedup.insert(with_leaf(tree, anchor)?);
                offered += 1;
            }
        }
        debug!(
            vertices = size,
            offered,
            survivors = dedup.len(),
            buckets = dedup.bucket_count(),
            isomorphism_tests = dedup.isomorphism_tests(),
            "tree level enumerated"
        );
        level = dedup.into_representatives();
    }
    Ok(level)
}

pub(crate) fn validate_vertex_count(vertex_count: usize) -> Result<(), BoundsError> {
    if vertex_count == 0 {
        return Err(BoundsError::ZeroVertexCount);
    }
    if vertex_count > MAX_TREE_VERTICES {
        return Err(BoundsError::VertexCountTooLarge {
            got: vertex_count,
            max: MAX_TREE_VERTICES,
        });
    }
    Ok(())
}

/// Appends vertex `vertex_count` as a leaf hanging off `anchor`.
fn with_leaf(tree: &Graph, anchor: usize) -> Result<Graph, GraphError> {
    let leaf = tree.vertex_count();
    Graph::from_edges(
        leaf + 1,
        tree.edges().iter().copied().chain(std::iter::once((anchor, leaf))),
    )
}
