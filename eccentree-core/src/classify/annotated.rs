//! Graphs paired with their computed invariants.

use crate::{
    error::SpectralError,
    generate::{Candidate, Configuration},
    graph::Graph,
    invariants::{
        EccentricitySignature, EccentricityVector, SpectralMethod, eccentricities, spectral_radius,
    },
};

/// A deduplicated graph with its eccentricities, signature and spectral
/// radius.
///
/// This is the record handed to renderers: the graph, everything needed to
/// group and rank it, and the configuration of family members.
#[derive(Clone, Debug, PartialEq)]
pub struct AnnotatedGraph {
    index: usize,
    graph: Graph,
    configuration: Option<Configuration>,
    eccentricities: EccentricityVector,
    signature: EccentricitySignature,
    spectral_radius: f64,
}

impl AnnotatedGraph {
    /// Computes the invariants of the candidate discovered at `index`.
    ///
    /// # Errors
    /// Returns the [`SpectralError`] raised when the spectral radius cannot
    /// be computed.
    pub fn annotate(
        index: usize,
        candidate: Candidate,
        method: SpectralMethod,
    ) -> Result<Self, SpectralError> {
        let radius = spectral_radius(candidate.graph(), method)?;
        Ok(Self::with_radius(index, candidate, radius))
    }

    /// Builds the record once the spectral radius is known.
    pub(crate) fn with_radius(index: usize, candidate: Candidate, spectral_radius: f64) -> Self {
        let (graph, configuration) = candidate.into_parts();
        let eccentricities = eccentricities(&graph);
        Self {
            index,
            signature: eccentricities.signature(),
            eccentricities,
            graph,
            configuration,
            spectral_radius,
        }
    }

    /// Position of the graph in discovery order.
    #[must_use]
    #[rustfmt::skip]
    pub fn index(&self) -> usize { self.index }

    /// The graph itself.
    #[must_use]
    #[rustfmt::skip]
    pub fn graph(&self) -> &Graph { &self.graph }

    /// The family configuration that produced the graph, if any.
    #[must_use]
    pub fn configuration(&self) -> Option<&Configuration> {
        self.configuration.as_ref()
    }

    /// Per-vertex eccentricities.
    #[must_use]
    #[rustfmt::skip]
    pub fn eccentricities(&self) -> &EccentricityVector { &self.eccentricities }

    /// Sorted eccentricities, the grouping key.
    #[must_use]
    #[rustfmt::skip]
    pub fn signature(&self) -> &EccentricitySignature { &self.signature }

    /// Largest-magnitude adjacency eigenvalue, the ranking key.
    #[must_use]
    #[rustfmt::skip]
    pub fn spectral_radius(&self) -> f64 { self.spectral_radius }

    #[cfg(test)]
    pub(crate) fn with_spectral_radius(mut self, spectral_radius: f64) -> Self {
        self.spectral_radius = spectral_radius;
        self
    }
}
