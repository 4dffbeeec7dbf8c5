//! Filtering, grouping and ranking of annotated graphs.

mod annotated;
mod bounds;
mod groups;
mod rank;

use tracing::{debug, instrument};

pub use self::{
    annotated::AnnotatedGraph,
    bounds::{EccentricityBounds, filter_by_eccentricity_bounds},
    groups::{ClassifiedGroup, ClassifiedGroups, group_by_signature},
    rank::rank_by_spectral_radius,
};

/// Applies the optional bounds, then groups the survivors by signature.
#[instrument(
    name = "core.classify",
    skip(annotated, bounds),
    fields(candidates = annotated.len(), bounded = bounds.is_some()),
)]
pub fn classify(
    annotated: Vec<AnnotatedGraph>,
    bounds: Option<&EccentricityBounds>,
) -> ClassifiedGroups {
    let filtered = match bounds {
        Some(bounds) => filter_by_eccentricity_bounds(annotated, bounds),
        None => annotated,
    };
    let groups = group_by_signature(filtered);
    debug!(
        filtered = groups.member_count(),
        groups = groups.len(),
        "classification completed"
    );
    groups
}

#[cfg(test)]
mod tests;
