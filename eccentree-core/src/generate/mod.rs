//! Candidate generation: exhaustive trees or a parameterized family.
//!
//! Both generators deduplicate up to isomorphism before returning, so every
//! candidate they yield is the first-seen member of its class.

mod family;
mod trees;

use tracing::{debug, instrument};

pub use self::{
    family::{
        Attachment, AttachmentGroup, Configuration, Configurations, FamilySpec,
        MAX_CONFIGURATIONS, ResolvedGroup, Skeleton,
    },
    trees::{MAX_TREE_VERTICES, enumerate_trees},
};
pub(crate) use self::trees::validate_vertex_count;

use crate::{graph::Graph, isomorphism::Deduplicator};

/// What the explorer enumerates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GenerationStrategy {
    /// Every unlabeled tree on `vertex_count` vertices.
    Trees {
        /// Number of vertices per tree.
        vertex_count: usize,
    },
    /// Every configuration of a skeleton family.
    Family(FamilySpec),
}

impl GenerationStrategy {
    /// Short name used in logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Trees { .. } => "trees",
            Self::Family(_) => "family",
        }
    }

    /// Vertices in every generated graph.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        match self {
            Self::Trees { vertex_count } => *vertex_count,
            Self::Family(family) => family.vertex_count(),
        }
    }
}

impl Default for GenerationStrategy {
    fn default() -> Self {
        Self::Trees { vertex_count: 8 }
    }
}

/// A deduplicated graph and, for family members, the configuration that
/// first produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
    graph: Graph,
    configuration: Option<Configuration>,
}

impl Candidate {
    /// Wraps a graph without family provenance.
    #[must_use]
    pub fn new(graph: Graph) -> Self {
        Self {
            graph,
            configuration: None,
        }
    }

    /// The candidate graph.
    #[must_use]
    #[rustfmt::skip]
    pub fn graph(&self) -> &Graph { &self.graph }

    /// The family configuration, when generated from a family.
    #[must_use]
    pub fn configuration(&self) -> Option<&Configuration> {
        self.configuration.as_ref()
    }

    /// Splits the candidate into its parts.
    #[must_use]
    pub fn into_parts(self) -> (Graph, Option<Configuration>) {
        (self.graph, self.configuration)
    }
}

impl AsRef<Graph> for Candidate {
    fn as_ref(&self) -> &Graph {
        &self.graph
    }
}

/// Returns the deduplicated members of `family` in first-seen order.
///
/// # Errors
/// Returns [`crate::ExplorerError::InvalidGraph`] if a configuration fails
/// to build, which a validated family never does.
pub fn enumerate_family(family: &FamilySpec) -> crate::Result<Vec<Candidate>> {
    let mut dedup = Deduplicator::new();
    for configuration in family.configurations() {
        let graph = family.build(&configuration)?;
        dedup.insert(Candidate {
            graph,
            configuration: Some(configuration),
        });
    }
    debug!(
        configurations = family.configuration_count(),
        survivors = dedup.len(),
        buckets = dedup.bucket_count(),
        isomorphism_tests = dedup.isomorphism_tests(),
        "family enumerated"
    );
    Ok(dedup.into_representatives())
}

/// Runs the requested generator.
///
/// # Errors
/// Propagates [`enumerate_trees`] and [`enumerate_family`] failures.
#[instrument(
    name = "core.generate",
    err,
    skip(strategy),
    fields(strategy = strategy.kind(), vertex_count = strategy.vertex_count()),
)]
pub fn generate(strategy: &GenerationStrategy) -> crate::Result<Vec<Candidate>> {
    let candidates = match strategy {
        GenerationStrategy::Trees { vertex_count } => enumerate_trees(*vertex_count)?
            .into_iter()
            .map(Candidate::new)
            .collect(),
        GenerationStrategy::Family(family) => enumerate_family(family)?,
    };
    debug!(candidates = candidates.len(), "generation completed");
    Ok(candidates)
}
