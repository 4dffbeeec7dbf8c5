//! Exploration orchestration: generate, annotate, classify.
//!
//! Provides the [`Explorer`] entry point, the [`Exploration`] it returns and
//! the [`SpectralOmission`] records for candidates dropped on numeric
//! failure.

use tracing::{info, instrument, warn};

use crate::{
    Result,
    builder::ExecutionStrategy,
    classify::{
        AnnotatedGraph, ClassifiedGroups, EccentricityBounds, classify, rank_by_spectral_radius,
    },
    error::SpectralError,
    generate::{Candidate, Configuration, GenerationStrategy, generate},
    graph::Graph,
    invariants::{SpectralMethod, spectral_radius},
};

/// A candidate left out because its spectral radius could not be computed,
/// even after the dense fallback.
#[derive(Clone, Debug, PartialEq)]
pub struct SpectralOmission {
    index: usize,
    graph: Graph,
    configuration: Option<Configuration>,
    error: SpectralError,
}

impl SpectralOmission {
    /// Discovery index of the omitted candidate.
    #[must_use]
    #[rustfmt::skip]
    pub fn index(&self) -> usize { self.index }

    /// Graph whose spectral radius could not be computed.
    #[must_use]
    #[rustfmt::skip]
    pub fn graph(&self) -> &Graph { &self.graph }

    /// Attachment configuration for family candidates.
    #[must_use]
    pub fn configuration(&self) -> Option<&Configuration> {
        self.configuration.as_ref()
    }

    /// The final numeric failure.
    #[must_use]
    #[rustfmt::skip]
    pub fn error(&self) -> &SpectralError { &self.error }
}

/// The outcome of [`Explorer::run`].
#[derive(Clone, Debug, PartialEq)]
pub struct Exploration {
    groups: ClassifiedGroups,
    omissions: Vec<SpectralOmission>,
    candidate_count: usize,
}

impl Exploration {
    /// Signature groups of every graph that passed the bounds.
    #[must_use]
    #[rustfmt::skip]
    pub fn groups(&self) -> &ClassifiedGroups { &self.groups }

    /// Candidates dropped for numeric failure, in discovery order.
    #[must_use]
    #[rustfmt::skip]
    pub fn omissions(&self) -> &[SpectralOmission] { &self.omissions }

    /// Number of candidates after isomorphism deduplication.
    #[must_use]
    #[rustfmt::skip]
    pub fn candidate_count(&self) -> usize { self.candidate_count }

    /// Number of graphs that passed the bounds.
    #[must_use]
    pub fn filtered_count(&self) -> usize {
        self.groups.member_count()
    }

    /// Members of the group with 1-based `sequence`, largest spectral radius
    /// first; `None` when no such group exists.
    #[must_use]
    pub fn ranked_group(&self, sequence: usize) -> Option<Vec<&AnnotatedGraph>> {
        self.groups.select(sequence).map(|group| group.ranked())
    }

    /// Every filtered graph ranked together by spectral radius.
    #[must_use]
    pub fn ranked_all(&self) -> Vec<&AnnotatedGraph> {
        let mut discovered: Vec<&AnnotatedGraph> = self.groups.members().collect();
        discovered.sort_by_key(|graph| graph.index());
        rank_by_spectral_radius(discovered)
    }
}

/// Entry point for running an exploration.
///
/// # Examples
/// ```
/// use eccentree_core::ExplorerBuilder;
///
/// let explorer = ExplorerBuilder::new()
///     .with_vertex_count(5)
///     .with_eccentricity_bounds(1, 4)
///     .build()?;
/// let exploration = explorer.run()?;
/// assert_eq!(exploration.candidate_count(), 3);
/// assert_eq!(exploration.groups().len(), 3);
/// # Ok::<(), eccentree_core::ExplorerError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Explorer {
    generation: GenerationStrategy,
    bounds: Option<EccentricityBounds>,
    spectral_method: SpectralMethod,
    execution_strategy: ExecutionStrategy,
}

impl Explorer {
    pub(crate) fn new(
        generation: GenerationStrategy,
        bounds: Option<EccentricityBounds>,
        spectral_method: SpectralMethod,
        execution_strategy: ExecutionStrategy,
    ) -> Self {
        Self {
            generation,
            bounds,
            spectral_method,
            execution_strategy,
        }
    }

    /// Returns what the explorer enumerates.
    #[must_use]
    #[rustfmt::skip]
    pub fn generation(&self) -> &GenerationStrategy { &self.generation }

    /// Returns the validated eccentricity bounds, if any.
    #[must_use]
    #[rustfmt::skip]
    pub fn bounds(&self) -> Option<&EccentricityBounds> { self.bounds.as_ref() }

    /// Returns the spectral radius algorithm.
    #[must_use]
    #[rustfmt::skip]
    pub fn spectral_method(&self) -> SpectralMethod { self.spectral_method }

    /// Returns the execution strategy that will be used when running.
    #[must_use]
    #[rustfmt::skip]
    pub fn execution_strategy(&self) -> ExecutionStrategy { self.execution_strategy }

    /// Generates, annotates and classifies the configured candidates.
    ///
    /// # Errors
    /// Returns [`crate::ExplorerError`] when generation fails.
    #[instrument(
        name = "core.run",
        err,
        skip(self),
        fields(
            generation = self.generation.kind(),
            vertex_count = self.generation.vertex_count(),
            spectral = ?self.spectral_method,
            strategy = ?self.execution_strategy,
        ),
    )]
    pub fn run(&self) -> Result<Exploration> {
        let candidates = generate(&self.generation)?;
        let candidate_count = candidates.len();
        let (annotated, omissions) = self.annotate(candidates);
        let groups = classify(annotated, self.bounds.as_ref());

        info!(
            candidates = candidate_count,
            filtered = groups.member_count(),
            groups = groups.len(),
            omissions = omissions.len(),
            "exploration completed"
        );
        Ok(Exploration {
            groups,
            omissions,
            candidate_count,
        })
    }

    #[instrument(
        name = "core.annotate",
        skip(self, candidates),
        fields(candidates = candidates.len(), parallel = self.uses_parallel()),
    )]
    fn annotate(&self, candidates: Vec<Candidate>) -> (Vec<AnnotatedGraph>, Vec<SpectralOmission>) {
        #[cfg(feature = "parallel")]
        let outcomes = if self.uses_parallel() {
            self.annotate_parallel(candidates)
        } else {
            self.annotate_sequential(candidates)
        };
        #[cfg(not(feature = "parallel"))]
        let outcomes = self.annotate_sequential(candidates);
        split_outcomes(outcomes)
    }

    fn annotate_sequential(&self, candidates: Vec<Candidate>) -> Vec<Outcome> {
        candidates
            .into_iter()
            .enumerate()
            .map(|(index, candidate)| annotate_one(index, candidate, self.spectral_method))
            .collect()
    }

    fn uses_parallel(&self) -> bool {
        match self.execution_strategy {
            ExecutionStrategy::Sequential => false,
            ExecutionStrategy::Auto | ExecutionStrategy::Parallel => cfg!(feature = "parallel"),
        }
    }

    #[cfg(feature = "parallel")]
    fn annotate_parallel(&self, candidates: Vec<Candidate>) -> Vec<Outcome> {
        use rayon::prelude::*;

        let method = self.spectral_method;
        candidates
            .into_par_iter()
            .enumerate()
            .map(|(index, candidate)| annotate_one(index, candidate, method))
            .collect()
    }
}

type Outcome = core::result::Result<AnnotatedGraph, SpectralOmission>;

/// Separates annotated graphs from omissions, logging each omission.
fn split_outcomes(outcomes: Vec<Outcome>) -> (Vec<AnnotatedGraph>, Vec<SpectralOmission>) {
    let mut annotated = Vec::with_capacity(outcomes.len());
    let mut omissions = Vec::new();
    for outcome in outcomes {
        match outcome {
            Ok(graph) => annotated.push(graph),
            Err(omission) => {
                warn!(
                    index = omission.index,
                    code = omission.error.code().as_str(),
                    error = %omission.error,
                    "spectral radius unavailable, omitting candidate"
                );
                omissions.push(omission);
            }
        }
    }
    (annotated, omissions)
}

fn annotate_one(
    index: usize,
    candidate: Candidate,
    method: SpectralMethod,
) -> Outcome {
    match spectral_radius(candidate.graph(), method) {
        Ok(radius) => Ok(AnnotatedGraph::with_radius(index, candidate, radius)),
        Err(error) => {
            let (graph, configuration) = candidate.into_parts();
            Err(SpectralOmission {
                index,
                graph,
                configuration,
                error,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use eccentree_test_support::tracing::RecordingLayer;
    use tracing::Level;
    use tracing_subscriber::layer::SubscriberExt;

    #[test]
    fn failed_candidates_become_logged_omissions() {
        let path = Graph::path(3).expect("valid");
        let kept = AnnotatedGraph::with_radius(0, Candidate::new(path.clone()), 2.0_f64.sqrt());
        let failure = SpectralError::DenseNonConvergence {
            sweeps: 100,
            off_diagonal: 0.5,
        };
        let outcomes = vec![
            Ok(kept.clone()),
            Err(SpectralOmission {
                index: 1,
                graph: path,
                configuration: None,
                error: failure.clone(),
            }),
        ];

        let layer = RecordingLayer::default();
        let subscriber = tracing_subscriber::registry().with(layer.clone());
        let (annotated, omissions) =
            tracing::subscriber::with_default(subscriber, || split_outcomes(outcomes));

        assert_eq!(annotated, vec![kept]);
        assert_eq!(omissions.len(), 1);
        assert_eq!(omissions[0].index(), 1);
        assert_eq!(omissions[0].error(), &failure);
        let warnings = layer.events_at(Level::WARN);
        assert!(warnings.iter().any(|event| {
            event.message() == Some("spectral radius unavailable, omitting candidate")
                && event.fields.get("code").map(String::as_str)
                    == Some("SPECTRAL_DENSE_NON_CONVERGENCE")
        }));
    }

    #[test]
    fn sequential_strategy_never_uses_the_pool() {
        let explorer = Explorer::new(
            GenerationStrategy::default(),
            None,
            SpectralMethod::Dense,
            ExecutionStrategy::Sequential,
        );
        assert!(!explorer.uses_parallel());
    }
}
