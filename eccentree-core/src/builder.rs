//! Builder utilities for configuring an exploration.
//!
//! Exposes the execution strategy selection surface and the validation run
//! before an [`Explorer`] is constructed.

use crate::{
    Result,
    classify::EccentricityBounds,
    error::ExplorerError,
    explorer::Explorer,
    generate::{FamilySpec, GenerationStrategy, validate_vertex_count},
    invariants::SpectralMethod,
};

/// Indicates how [`Explorer::run`] computes per-candidate invariants.
///
/// `Auto` resolves deterministically: it uses the Rayon pool when the
/// `parallel` feature is compiled in and runs sequentially otherwise. Every
/// strategy yields the same discovery-ordered output.
///
/// # Examples
/// ```
/// use eccentree_core::ExecutionStrategy;
///
/// let strategy = ExecutionStrategy::Auto;
/// assert!(matches!(strategy, ExecutionStrategy::Auto));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionStrategy {
    /// Allow the library to select a backend automatically.
    Auto,
    /// Annotate candidates one at a time on the calling thread.
    Sequential,
    /// Annotate candidates on the Rayon thread pool.
    Parallel,
}

/// Configures and constructs [`Explorer`] instances.
///
/// # Examples
/// ```
/// use eccentree_core::{ExecutionStrategy, ExplorerBuilder};
///
/// let explorer = ExplorerBuilder::new()
///     .with_vertex_count(6)
///     .with_eccentricity_bounds(2, 4)
///     .with_execution_strategy(ExecutionStrategy::Sequential)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(explorer.generation().vertex_count(), 6);
/// assert_eq!(explorer.execution_strategy(), ExecutionStrategy::Sequential);
/// ```
#[derive(Debug, Clone)]
pub struct ExplorerBuilder {
    generation: GenerationStrategy,
    bounds: Option<(usize, usize)>,
    spectral_method: SpectralMethod,
    execution_strategy: ExecutionStrategy,
}

impl Default for ExplorerBuilder {
    fn default() -> Self {
        Self {
            generation: GenerationStrategy::default(),
            bounds: None,
            spectral_method: SpectralMethod::default(),
            execution_strategy: ExecutionStrategy::Auto,
        }
    }
}

impl ExplorerBuilder {
    /// Creates a builder populated with default parameters: trees on eight
    /// vertices, no bounds, power iteration and automatic execution.
    ///
    /// # Examples
    /// ```
    /// use eccentree_core::{ExecutionStrategy, ExplorerBuilder, SpectralMethod};
    ///
    /// let builder = ExplorerBuilder::new();
    /// assert_eq!(builder.eccentricity_bounds(), None);
    /// assert_eq!(builder.spectral_method(), SpectralMethod::PowerIteration);
    /// assert_eq!(builder.execution_strategy(), ExecutionStrategy::Auto);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enumerates every tree on `vertex_count` vertices.
    #[must_use]
    pub fn with_vertex_count(mut self, vertex_count: usize) -> Self {
        self.generation = GenerationStrategy::Trees { vertex_count };
        self
    }

    /// Enumerates the members of `family`.
    #[must_use]
    pub fn with_family(mut self, family: FamilySpec) -> Self {
        self.generation = GenerationStrategy::Family(family);
        self
    }

    /// Replaces the generation strategy wholesale.
    #[must_use]
    pub fn with_generation_strategy(mut self, generation: GenerationStrategy) -> Self {
        self.generation = generation;
        self
    }

    /// Returns the configured generation strategy.
    #[must_use]
    pub fn generation(&self) -> &GenerationStrategy {
        &self.generation
    }

    /// Keeps only graphs whose radius is at least `min_radius` and whose
    /// diameter is at most `max_diameter`. Validated by [`Self::build`].
    ///
    /// # Examples
    /// ```
    /// use eccentree_core::ExplorerBuilder;
    ///
    /// let builder = ExplorerBuilder::new().with_eccentricity_bounds(1, 4);
    /// assert_eq!(builder.eccentricity_bounds(), Some((1, 4)));
    /// ```
    #[must_use]
    pub fn with_eccentricity_bounds(mut self, min_radius: usize, max_diameter: usize) -> Self {
        self.bounds = Some((min_radius, max_diameter));
        self
    }

    /// Removes any configured bounds.
    #[must_use]
    pub fn without_eccentricity_bounds(mut self) -> Self {
        self.bounds = None;
        self
    }

    /// Returns the configured `(min_radius, max_diameter)` pair, if any.
    #[must_use]
    pub fn eccentricity_bounds(&self) -> Option<(usize, usize)> {
        self.bounds
    }

    /// Sets how spectral radii are computed.
    #[must_use]
    pub fn with_spectral_method(mut self, method: SpectralMethod) -> Self {
        self.spectral_method = method;
        self
    }

    /// Returns the configured spectral method.
    #[must_use]
    pub fn spectral_method(&self) -> SpectralMethod {
        self.spectral_method
    }

    /// Sets the execution strategy to use when annotating candidates.
    ///
    /// # Examples
    /// ```
    /// use eccentree_core::{ExecutionStrategy, ExplorerBuilder};
    ///
    /// let builder = ExplorerBuilder::new().with_execution_strategy(ExecutionStrategy::Sequential);
    /// assert_eq!(builder.execution_strategy(), ExecutionStrategy::Sequential);
    /// ```
    #[must_use]
    pub fn with_execution_strategy(mut self, strategy: ExecutionStrategy) -> Self {
        self.execution_strategy = strategy;
        self
    }

    /// Returns the currently configured execution strategy.
    #[must_use]
    pub fn execution_strategy(&self) -> ExecutionStrategy {
        self.execution_strategy
    }

    /// Validates the configuration and constructs an [`Explorer`].
    ///
    /// # Errors
    /// Returns [`ExplorerError::InvalidBounds`] for an unsupported tree
    /// vertex count or inverted eccentricity bounds, and
    /// [`ExplorerError::BackendUnavailable`] when `Parallel` is requested
    /// without the `parallel` feature.
    ///
    /// # Examples
    /// ```
    /// use eccentree_core::{ExplorerBuilder, ExplorerError};
    ///
    /// let err = ExplorerBuilder::new()
    ///     .with_eccentricity_bounds(4, 1)
    ///     .build()
    ///     .expect_err("inverted bounds are rejected");
    /// assert!(matches!(err, ExplorerError::InvalidBounds { .. }));
    /// ```
    pub fn build(self) -> Result<Explorer> {
        if let GenerationStrategy::Trees { vertex_count } = self.generation {
            validate_vertex_count(vertex_count)?;
        }
        let bounds = self
            .bounds
            .map(|(min_radius, max_diameter)| EccentricityBounds::new(min_radius, max_diameter))
            .transpose()?;

        if cfg!(not(feature = "parallel")) && self.execution_strategy == ExecutionStrategy::Parallel
        {
            return Err(ExplorerError::BackendUnavailable {
                requested: ExecutionStrategy::Parallel,
            });
        }

        Ok(Explorer::new(
            self.generation,
            bounds,
            self.spectral_method,
            self.execution_strategy,
        ))
    }
}
