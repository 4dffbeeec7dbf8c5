//! Spectral-radius ranking with tolerance-aware stable ties.

use std::borrow::Borrow;

use super::AnnotatedGraph;
use crate::invariants::SPECTRAL_TIE_TOLERANCE;

/// Orders graphs by spectral radius, largest first.
///
/// Radii within [`SPECTRAL_TIE_TOLERANCE`] of each other count as equal and
/// keep their input order. Each item is inserted after every ranked item
/// whose radius is not clearly below its own.
#[must_use]
pub fn rank_by_spectral_radius<T: Borrow<AnnotatedGraph>>(
    members: impl IntoIterator<Item = T>,
) -> Vec<T> {
    let mut ranked: Vec<T> = Vec::new();
    for member in members {
        let threshold = member.borrow().spectral_radius() - SPECTRAL_TIE_TOLERANCE;
        let position =
            ranked.partition_point(|placed| placed.borrow().spectral_radius() >= threshold);
        ranked.insert(position, member);
    }
    ranked
}
