//! First-seen deduplication up to isomorphism.

use std::collections::HashMap;

use super::search::are_isomorphic;
use crate::graph::Graph;

/// Outcome of offering an item to a [`Deduplicator`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Insertion {
    /// The item started a new isomorphism class at this representative index.
    Accepted(usize),
    /// The item is isomorphic to the representative at index `of`.
    Duplicate {
        /// Index of the earlier representative.
        of: usize,
    },
}

/// Invariants every pair of isomorphic graphs shares.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct BucketKey {
    vertex_count: usize,
    edge_count: usize,
    degree_sequence: Vec<usize>,
}

impl BucketKey {
    fn of(graph: &Graph) -> Self {
        Self {
            vertex_count: graph.vertex_count(),
            edge_count: graph.edge_count(),
            degree_sequence: graph.degree_sequence(),
        }
    }
}

/// Keeps the first-seen representative of each isomorphism class.
///
/// Representatives are bucketed by vertex count, edge count and degree
/// sequence; a new item is tested only against its own bucket.
///
/// # Examples
/// ```
/// use eccentree_core::{Deduplicator, Graph, Insertion};
///
/// let mut dedup = Deduplicator::new();
/// assert_eq!(dedup.insert(Graph::path(3)?), Insertion::Accepted(0));
/// let centred = Graph::from_edges(3, [(0, 1), (0, 2)])?;
/// assert_eq!(dedup.insert(centred), Insertion::Duplicate { of: 0 });
/// assert_eq!(dedup.len(), 1);
/// # Ok::<(), eccentree_core::GraphError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Deduplicator<T = Graph> {
    representatives: Vec<T>,
    buckets: HashMap<BucketKey, Vec<usize>>,
    isomorphism_tests: usize,
}

impl<T> Default for Deduplicator<T> {
    fn default() -> Self {
        Self {
            representatives: Vec::new(),
            buckets: HashMap::new(),
            isomorphism_tests: 0,
        }
    }
}

impl<T: AsRef<Graph>> Deduplicator<T> {
    /// Creates an empty deduplicator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Offers `item`, keeping it only when no earlier representative is
    /// isomorphic to it.
    pub fn insert(&mut self, item: T) -> Insertion {
        let graph = item.as_ref();
        let bucket = self.buckets.entry(BucketKey::of(graph)).or_default();
        for &index in bucket.iter() {
            self.isomorphism_tests += 1;
            if are_isomorphic(self.representatives[index].as_ref(), graph) {
                return Insertion::Duplicate { of: index };
            }
        }
        let index = self.representatives.len();
        bucket.push(index);
        self.representatives.push(item);
        Insertion::Accepted(index)
    }

    /// Representatives in first-occurrence order.
    #[must_use]
    #[rustfmt::skip]
    pub fn representatives(&self) -> &[T] { &self.representatives }

    /// Consumes the deduplicator, returning its representatives.
    #[must_use]
    pub fn into_representatives(self) -> Vec<T> {
        self.representatives
    }

    /// Number of isomorphism classes seen so far.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.representatives.len() }

    /// Returns `true` when nothing has been accepted yet.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.representatives.is_empty() }

    /// Number of pairwise isomorphism tests run.
    #[must_use]
    #[rustfmt::skip]
    pub fn isomorphism_tests(&self) -> usize { self.isomorphism_tests }

    /// Number of distinct invariant buckets.
    #[must_use]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }
}

/// Removes isomorphic duplicates, keeping the first occurrence of each class
/// in input order.
#[must_use]
pub fn remove_isomorphic_duplicates<T: AsRef<Graph>>(items: impl IntoIterator<Item = T>) -> Vec<T> {
    let mut dedup = Deduplicator::new();
    for item in items {
        dedup.insert(item);
    }
    dedup.into_representatives()
}
