//! Eccentricity range filtering.

use super::AnnotatedGraph;
use crate::error::BoundsError;

/// Inclusive limits on every vertex eccentricity of a graph.
///
/// A graph passes when its radius (smallest eccentricity) is at least
/// `min_radius` and its diameter (largest eccentricity) is at most
/// `max_diameter`.
///
/// # Examples
/// ```
/// use eccentree_core::{BoundsError, EccentricityBounds};
///
/// let bounds = EccentricityBounds::new(1, 4)?;
/// assert!(bounds.admits(2, 4));
/// assert!(!bounds.admits(0, 3));
/// assert!(EccentricityBounds::new(5, 4).is_err());
/// # Ok::<(), BoundsError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EccentricityBounds {
    min_radius: usize,
    max_diameter: usize,
}

impl EccentricityBounds {
    /// Validates and stores the bounds.
    ///
    /// # Errors
    /// Returns [`BoundsError::MinExceedsMax`] when `min_radius > max_diameter`.
    pub fn new(min_radius: usize, max_diameter: usize) -> Result<Self, BoundsError> {
        if min_radius > max_diameter {
            return Err(BoundsError::MinExceedsMax {
                min_radius,
                max_diameter,
            });
        }
        Ok(Self {
            min_radius,
            max_diameter,
        })
    }

    /// Smallest admissible radius.
    #[must_use]
    #[rustfmt::skip]
    pub fn min_radius(&self) -> usize { self.min_radius }

    /// Largest admissible diameter.
    #[must_use]
    #[rustfmt::skip]
    pub fn max_diameter(&self) -> usize { self.max_diameter }

    /// Returns whether a graph with this radius and diameter passes.
    #[must_use]
    pub fn admits(&self, radius: usize, diameter: usize) -> bool {
        radius >= self.min_radius && diameter <= self.max_diameter
    }
}

/// Keeps the graphs whose eccentricities all lie within `bounds`, preserving
/// order.
#[must_use]
pub fn filter_by_eccentricity_bounds(
    candidates: impl IntoIterator<Item = AnnotatedGraph>,
    bounds: &EccentricityBounds,
) -> Vec<AnnotatedGraph> {
    candidates
        .into_iter()
        .filter(|graph| {
            let signature = graph.signature();
            bounds.admits(signature.radius(), signature.diameter())
        })
        .collect()
}
