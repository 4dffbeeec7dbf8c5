//! Backtracking search for an isomorphism witness.

use std::collections::VecDeque;

use super::refine::{JointColouring, refine_jointly};
use crate::{graph::Graph, permutation::Permutation};

const UNMAPPED: usize = usize::MAX;

/// Returns a bijection `left vertex -> right vertex` preserving adjacency,
/// or `None` when the graphs are not isomorphic.
///
/// # Examples
/// ```
/// use eccentree_core::{Graph, find_isomorphism};
///
/// let path = Graph::path(3).expect("path is valid");
/// let bent = Graph::from_edges(3, [(1, 0), (0, 2)]).expect("path is valid");
/// let witness = find_isomorphism(&path, &bent).expect("both are P3");
/// assert_eq!(witness.apply(1), Some(0));
/// ```
#[must_use]
pub fn find_isomorphism(left: &Graph, right: &Graph) -> Option<Permutation> {
    if left.vertex_count() != right.vertex_count()
        || left.edge_count() != right.edge_count()
        || left.degree_sequence() != right.degree_sequence()
    {
        return None;
    }

    let colouring = refine_jointly(left, right);
    if !colouring.histograms_match() {
        return None;
    }

    let order = visit_order(left, &colouring);
    let mut search = Search {
        left,
        right,
        colouring: &colouring,
        order: &order,
        mapping: vec![UNMAPPED; left.vertex_count()],
        used: vec![false; right.vertex_count()],
    };
    if search.extend(0) {
        Permutation::new(search.mapping)
    } else {
        None
    }
}

/// Returns whether the two graphs are isomorphic.
#[must_use]
pub fn are_isomorphic(left: &Graph, right: &Graph) -> bool {
    find_isomorphism(left, right).is_some()
}

/// A vertex to map and the already-mapped vertex it hangs off, if any.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Step {
    pub(crate) vertex: usize,
    pub(crate) parent: Option<usize>,
}

/// Breadth-first order over the non-leaf vertices, starting in the rarest
/// colour class, followed by every leaf.
///
/// Mapping leaves last keeps sibling leaves from multiplying the search:
/// by then their parent's image is fixed and any same-coloured free leaf of
/// it fits.
pub(crate) fn visit_order(graph: &Graph, colouring: &JointColouring) -> Vec<Step> {
    let count = graph.vertex_count();
    let internal: Vec<usize> = (0..count).filter(|&v| graph.degree(v) >= 2).collect();

    let mut frequency = vec![0usize; colouring.classes];
    for &colour in &colouring.left {
        if let Some(slot) = frequency.get_mut(colour) {
            *slot += 1;
        }
    }
    let colour_of = |vertex: usize| colouring.left.get(vertex).copied().unwrap_or_default();
    let pool = if internal.is_empty() {
        (0..count.min(1)).collect()
    } else {
        internal
    };
    let Some(&root) = pool.iter().min_by_key(|&&vertex| {
        let colour = colour_of(vertex);
        (frequency.get(colour).copied().unwrap_or_default(), colour, vertex)
    }) else {
        return Vec::new();
    };

    let mut order = Vec::with_capacity(count);
    let mut placed = vec![false; count];
    placed[root] = true;
    let mut queue = VecDeque::from([Step {
        vertex: root,
        parent: None,
    }]);
    while let Some(step) = queue.pop_front() {
        order.push(step);
        for &neighbour in graph.neighbours(step.vertex) {
            if !placed[neighbour] && graph.degree(neighbour) >= 2 {
                placed[neighbour] = true;
                queue.push_back(Step {
                    vertex: neighbour,
                    parent: Some(step.vertex),
                });
            }
        }
    }

    for vertex in 0..count {
        if !placed[vertex] {
            order.push(Step {
                vertex,
                parent: graph.neighbours(vertex).first().copied(),
            });
        }
    }
    order
}

struct Search<'a> {
    left: &'a Graph,
    right: &'a Graph,
    colouring: &'a JointColouring,
    order: &'a [Step],
    mapping: Vec<usize>,
    used: Vec<bool>,
}

impl Search<'_> {
    fn extend(&mut self, depth: usize) -> bool {
        let Some(&step) = self.order.get(depth) else {
            return true;
        };
        let colour = self.colouring.left[step.vertex];

        for image in self.candidates(step, colour) {
            if !self.feasible(step.vertex, image) {
                continue;
            }
            self.mapping[step.vertex] = image;
            self.used[image] = true;
            if self.extend(depth + 1) {
                return true;
            }
            self.mapping[step.vertex] = UNMAPPED;
            self.used[image] = false;
        }
        false
    }

    fn candidates(&self, step: Step, colour: usize) -> Vec<usize> {
        let matches = |&image: &usize| !self.used[image] && self.colouring.right[image] == colour;
        match step.parent.map(|parent| self.mapping[parent]) {
            Some(anchor) if anchor != UNMAPPED => self
                .right
                .neighbours(anchor)
                .iter()
                .copied()
                .filter(matches)
                .collect(),
            _ => (0..self.right.vertex_count()).filter(matches).collect(),
        }
    }

    /// Every mapped neighbour of `vertex` must land next to `image`, and
    /// `image` may have no other already-used neighbours.
    fn feasible(&self, vertex: usize, image: usize) -> bool {
        let mut mapped_neighbours = 0;
        for &neighbour in self.left.neighbours(vertex) {
            let target = self.mapping[neighbour];
            if target == UNMAPPED {
                continue;
            }
            if !self.right.is_adjacent(image, target) {
                return false;
            }
            mapped_neighbours += 1;
        }
        let used_neighbours = self
            .right
            .neighbours(image)
            .iter()
            .filter(|&&neighbour| self.used[neighbour])
            .count();
        used_neighbours == mapped_neighbours
    }
}
