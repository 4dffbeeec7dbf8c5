//! Grouping by eccentricity signature.

use std::collections::HashMap;

use super::{AnnotatedGraph, rank_by_spectral_radius};
use crate::invariants::EccentricitySignature;

/// Graphs sharing one eccentricity signature, in discovery order.
#[derive(Clone, Debug, PartialEq)]
pub struct ClassifiedGroup {
    sequence: usize,
    signature: EccentricitySignature,
    members: Vec<AnnotatedGraph>,
}

impl ClassifiedGroup {
    /// 1-based position of the group in discovery order.
    #[must_use]
    #[rustfmt::skip]
    pub fn sequence(&self) -> usize { self.sequence }

    /// Signature shared by every member.
    #[must_use]
    #[rustfmt::skip]
    pub fn signature(&self) -> &EccentricitySignature { &self.signature }

    /// Members in discovery order.
    #[must_use]
    #[rustfmt::skip]
    pub fn members(&self) -> &[AnnotatedGraph] { &self.members }

    /// Number of members.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.members.len() }

    /// Groups are never empty.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.members.is_empty() }

    /// Members ranked by spectral radius, largest first.
    #[must_use]
    pub fn ranked(&self) -> Vec<&AnnotatedGraph> {
        rank_by_spectral_radius(&self.members)
    }
}

/// Signature groups in first-seen order.
///
/// Selection by sequence number is 1-based; an out-of-range number or an
/// unseen signature yields `None`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClassifiedGroups {
    groups: Vec<ClassifiedGroup>,
    positions: HashMap<EccentricitySignature, usize>,
}

impl ClassifiedGroups {
    /// Number of distinct signatures.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.groups.len() }

    /// Whether no graph survived classification.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.groups.is_empty() }

    /// Total number of graphs across every group.
    #[must_use]
    pub fn member_count(&self) -> usize {
        self.groups.iter().map(ClassifiedGroup::len).sum()
    }

    /// Groups in first-seen order.
    pub fn iter(&self) -> std::slice::Iter<'_, ClassifiedGroup> {
        self.groups.iter()
    }

    /// Returns the group with 1-based `sequence` number.
    #[must_use]
    pub fn select(&self, sequence: usize) -> Option<&ClassifiedGroup> {
        self.groups.get(sequence.checked_sub(1)?)
    }

    /// Returns the group holding `signature`.
    #[must_use]
    pub fn get(&self, signature: &EccentricitySignature) -> Option<&ClassifiedGroup> {
        self.positions
            .get(signature)
            .and_then(|&position| self.groups.get(position))
    }

    /// Every member of every group, in group order.
    pub fn members(&self) -> impl Iterator<Item = &AnnotatedGraph> {
        self.groups.iter().flat_map(|group| group.members.iter())
    }
}

impl<'a> IntoIterator for &'a ClassifiedGroups {
    type Item = &'a ClassifiedGroup;
    type IntoIter = std::slice::Iter<'a, ClassifiedGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

/// Partitions graphs by signature in a single pass.
///
/// Groups appear in the order their first member does and members keep
/// input order.
#[must_use]
pub fn group_by_signature(graphs: impl IntoIterator<Item = AnnotatedGraph>) -> ClassifiedGroups {
    let mut classified = ClassifiedGroups::default();
    for graph in graphs {
        match classified.positions.get(graph.signature()) {
            Some(&position) => classified.groups[position].members.push(graph),
            None => {
                let position = classified.groups.len();
                classified
                    .positions
                    .insert(graph.signature().clone(), position);
                classified.groups.push(ClassifiedGroup {
                    sequence: position + 1,
                    signature: graph.signature().clone(),
                    members: vec![graph],
                });
            }
        }
    }
    classified
}
