//! Benchmark setup error type.
//!
//! Lets setup functions propagate failures with `?` instead of `.expect()`.

use eccentree_core::{ExplorerError, GraphError};

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// A benchmark graph could not be constructed.
    #[error("graph construction failed: {0}")]
    Graph(#[from] GraphError),
    /// Enumeration or exploration failed.
    #[error("exploration failed: {0}")]
    Explorer(#[from] ExplorerError),
    /// A shuffled index list was not a permutation.
    #[error("invalid permutation of order {order}")]
    InvalidPermutation {
        /// Order of the rejected permutation.
        order: usize,
    },
}
