//! Error types for the eccentree core library.
//!
//! Every public error enum carries a stable machine-readable code so the CLI
//! and log pipelines can match on failures without parsing messages.

use std::{fmt, sync::Arc};

use thiserror::Error;

use crate::builder::ExecutionStrategy;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// A graph could not be constructed from the supplied vertices and edges.
///
/// Both generation strategies only ever produce simple connected graphs, so
/// any of these indicates a generator bug and is never retried.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// The graph has no vertices.
    #[error("graph must contain at least one vertex")]
    EmptyGraph,
    /// An edge names a vertex outside `0..vertex_count`.
    #[error("edge references vertex {vertex}, but vertex_count is {vertex_count}")]
    UnknownVertex {
        /// The offending vertex identifier.
        vertex: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
    /// An edge joins a vertex to itself.
    #[error("self-loop on vertex {vertex}")]
    SelfLoop {
        /// The vertex carrying the loop.
        vertex: usize,
    },
    /// The same unordered pair appears more than once.
    #[error("duplicate edge ({left}, {right})")]
    DuplicateEdge {
        /// Smaller endpoint of the repeated edge.
        left: usize,
        /// Larger endpoint of the repeated edge.
        right: usize,
    },
    /// Not every vertex is reachable from vertex `0`.
    #[error("graph is disconnected: {reachable} of {vertex_count} vertices reachable from 0")]
    Disconnected {
        /// Vertices reached by a search from vertex `0`.
        reachable: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
    /// A relabeling permutation does not cover the graph's vertices.
    #[error("permutation of order {got} cannot relabel a graph with {expected} vertices")]
    OrderMismatch {
        /// Number of vertices in the graph.
        expected: usize,
        /// Length of the supplied permutation.
        got: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// The graph has no vertices.
        EmptyGraph => EmptyGraph => "GRAPH_EMPTY",
        /// An edge names an unknown vertex.
        UnknownVertex => UnknownVertex { .. } => "GRAPH_UNKNOWN_VERTEX",
        /// An edge joins a vertex to itself.
        SelfLoop => SelfLoop { .. } => "GRAPH_SELF_LOOP",
        /// The same unordered pair appears more than once.
        DuplicateEdge => DuplicateEdge { .. } => "GRAPH_DUPLICATE_EDGE",
        /// Not every vertex is reachable from vertex `0`.
        Disconnected => Disconnected { .. } => "GRAPH_DISCONNECTED",
        /// A relabeling permutation has the wrong order.
        OrderMismatch => OrderMismatch { .. } => "GRAPH_ORDER_MISMATCH",
    }
}

/// Exploration parameters rejected before any generation work begins.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum BoundsError {
    /// The eccentricity lower bound exceeds the upper bound.
    #[error("minimum eccentricity {min_radius} exceeds maximum eccentricity {max_diameter}")]
    MinExceedsMax {
        /// Requested lower bound on every vertex eccentricity.
        min_radius: usize,
        /// Requested upper bound on every vertex eccentricity.
        max_diameter: usize,
    },
    /// Tree enumeration was asked for zero vertices.
    #[error("vertex count must be at least 1")]
    ZeroVertexCount,
    /// Tree enumeration was asked for more vertices than the isomorphism
    /// search is intended to handle.
    #[error("vertex count {got} exceeds the supported maximum of {max}")]
    VertexCountTooLarge {
        /// Requested vertex count.
        got: usize,
        /// Largest supported vertex count.
        max: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`BoundsError`] variants.
    enum BoundsErrorCode for BoundsError {
        /// The eccentricity lower bound exceeds the upper bound.
        MinExceedsMax => MinExceedsMax { .. } => "BOUNDS_MIN_EXCEEDS_MAX",
        /// Tree enumeration was asked for zero vertices.
        ZeroVertexCount => ZeroVertexCount => "BOUNDS_ZERO_VERTEX_COUNT",
        /// Tree enumeration was asked for too many vertices.
        VertexCountTooLarge => VertexCountTooLarge { .. } => "BOUNDS_VERTEX_COUNT_TOO_LARGE",
    }
}

/// A family skeleton or attachment description is malformed.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum SkeletonError {
    /// The skeleton path has no vertices.
    #[error("skeleton must contain at least one vertex")]
    EmptySkeleton,
    /// Two skeleton vertices share a label.
    #[error("skeleton label `{label}` appears more than once")]
    DuplicateLabel {
        /// The repeated label.
        label: Arc<str>,
    },
    /// An attachment group adds no vertices.
    #[error("attachment group `{group}` must add at least one vertex")]
    EmptyGroup {
        /// Label of the offending group.
        group: Arc<str>,
    },
    /// An attachment group offers no attachment points.
    #[error("attachment group `{group}` offers no attachment choices")]
    NoChoices {
        /// Label of the offending group.
        group: Arc<str>,
    },
    /// An attachment group names a vertex the skeleton does not have.
    #[error("attachment group `{group}` refers to unknown skeleton vertex `{label}`")]
    UnknownAttachment {
        /// Label of the offending group.
        group: Arc<str>,
        /// The unresolved skeleton label.
        label: Arc<str>,
    },
    /// The Cartesian product of choices is too large to enumerate.
    #[error("family has more than {max} attachment configurations")]
    TooManyConfigurations {
        /// Largest supported configuration count.
        max: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`SkeletonError`] variants.
    enum SkeletonErrorCode for SkeletonError {
        /// The skeleton path has no vertices.
        EmptySkeleton => EmptySkeleton => "SKELETON_EMPTY",
        /// Two skeleton vertices share a label.
        DuplicateLabel => DuplicateLabel { .. } => "SKELETON_DUPLICATE_LABEL",
        /// An attachment group adds no vertices.
        EmptyGroup => EmptyGroup { .. } => "SKELETON_EMPTY_GROUP",
        /// An attachment group offers no attachment points.
        NoChoices => NoChoices { .. } => "SKELETON_NO_CHOICES",
        /// An attachment group names an unknown skeleton vertex.
        UnknownAttachment => UnknownAttachment { .. } => "SKELETON_UNKNOWN_ATTACHMENT",
        /// The configuration space is too large.
        TooManyConfigurations => TooManyConfigurations { .. } => "SKELETON_TOO_MANY_CONFIGURATIONS",
    }
}

/// Error type produced when configuring or running [`crate::Explorer`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ExplorerError {
    /// A generated graph violated the graph model's invariants.
    #[error("invalid graph: {source}")]
    InvalidGraph {
        /// The underlying construction failure.
        #[from]
        source: GraphError,
    },
    /// Vertex count or eccentricity bounds were rejected.
    #[error("invalid bounds: {source}")]
    InvalidBounds {
        /// The underlying validation failure.
        #[from]
        source: BoundsError,
    },
    /// The family description was rejected.
    #[error("invalid skeleton: {source}")]
    InvalidSkeleton {
        /// The underlying validation failure.
        #[from]
        source: SkeletonError,
    },
    /// The requested execution strategy is unavailable in the current build.
    #[error("the requested execution strategy {requested:?} is not available in this build")]
    BackendUnavailable {
        /// Strategy that could not be satisfied by the current build.
        requested: ExecutionStrategy,
    },
}

define_error_codes! {
    /// Stable codes describing [`ExplorerError`] variants.
    enum ExplorerErrorCode for ExplorerError {
        /// A generated graph violated the graph model's invariants.
        InvalidGraph => InvalidGraph { .. } => "EXPLORER_INVALID_GRAPH",
        /// Vertex count or eccentricity bounds were rejected.
        InvalidBounds => InvalidBounds { .. } => "EXPLORER_INVALID_BOUNDS",
        /// The family description was rejected.
        InvalidSkeleton => InvalidSkeleton { .. } => "EXPLORER_INVALID_SKELETON",
        /// The requested execution strategy is unavailable in the current build.
        BackendUnavailable => BackendUnavailable { .. } => "EXPLORER_BACKEND_UNAVAILABLE",
    }
}

impl ExplorerError {
    /// Retrieve the inner [`GraphErrorCode`] when a graph failed construction.
    #[must_use]
    pub const fn graph_code(&self) -> Option<GraphErrorCode> {
        match self {
            Self::InvalidGraph { source } => Some(source.code()),
            _ => None,
        }
    }

    /// Retrieve the inner code of whichever validation error was wrapped.
    #[must_use]
    pub const fn detail_code(&self) -> Option<&'static str> {
        match self {
            Self::InvalidGraph { source } => Some(source.code().as_str()),
            Self::InvalidBounds { source } => Some(source.code().as_str()),
            Self::InvalidSkeleton { source } => Some(source.code().as_str()),
            Self::BackendUnavailable { .. } => None,
        }
    }
}

/// Errors returned when an eigenvalue estimate does not converge.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SpectralError {
    /// Power iteration exhausted its step budget.
    #[error("power iteration did not converge in {iterations} steps (last relative change {last_change:e})")]
    NonConvergence {
        /// Steps taken before giving up.
        iterations: usize,
        /// Relative change of the final step.
        last_change: f64,
    },
    /// The Jacobi eigensolver exhausted its sweep budget.
    #[error("Jacobi eigensolver did not converge in {sweeps} sweeps (off-diagonal norm {off_diagonal:e})")]
    DenseNonConvergence {
        /// Sweeps performed before giving up.
        sweeps: usize,
        /// Off-diagonal norm remaining after the last sweep.
        off_diagonal: f64,
    },
}

define_error_codes! {
    /// Stable codes describing [`SpectralError`] variants.
    enum SpectralErrorCode for SpectralError {
        /// Power iteration exhausted its step budget.
        NonConvergence => NonConvergence { .. } => "SPECTRAL_NON_CONVERGENCE",
        /// The Jacobi eigensolver exhausted its sweep budget.
        DenseNonConvergence => DenseNonConvergence { .. } => "SPECTRAL_DENSE_NON_CONVERGENCE",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, ExplorerError>;

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case(GraphError::EmptyGraph, "GRAPH_EMPTY")]
    #[case(GraphError::SelfLoop { vertex: 2 }, "GRAPH_SELF_LOOP")]
    #[case(
        GraphError::Disconnected { reachable: 1, vertex_count: 3 },
        "GRAPH_DISCONNECTED"
    )]
    fn graph_error_codes_are_stable(#[case] error: GraphError, #[case] expected: &str) {
        assert_eq!(error.code().as_str(), expected);
        assert_eq!(error.code().to_string(), expected);
    }

    #[test]
    fn explorer_error_exposes_wrapped_graph_code() {
        let error = ExplorerError::from(GraphError::DuplicateEdge { left: 0, right: 1 });
        assert_eq!(error.code(), ExplorerErrorCode::InvalidGraph);
        assert_eq!(error.graph_code(), Some(GraphErrorCode::DuplicateEdge));
        assert_eq!(error.detail_code(), Some("GRAPH_DUPLICATE_EDGE"));
    }

    #[test]
    fn bounds_errors_are_not_graph_errors() {
        let error = ExplorerError::from(BoundsError::MinExceedsMax {
            min_radius: 4,
            max_diameter: 2,
        });
        assert_eq!(error.code().as_str(), "EXPLORER_INVALID_BOUNDS");
        assert_eq!(error.graph_code(), None);
        assert_eq!(
            error.to_string(),
            "invalid bounds: minimum eccentricity 4 exceeds maximum eccentricity 2"
        );
    }
}
