//! Simple connected undirected graphs.
//!
//! [`Graph`] is the only graph shape the pipeline handles: vertices are the
//! identifiers `0..vertex_count`, edges are unordered pairs without loops or
//! repeats, and every vertex is reachable from every other. Construction
//! validates all of this, so downstream stages can rely on it.

use std::collections::{BTreeSet, VecDeque};

use crate::{error::GraphError, permutation::Permutation};

/// Distance reported for vertices a search has not reached.
pub(crate) const UNREACHED: usize = usize::MAX;

/// Dense symmetric 0/1 adjacency matrix with a zero diagonal.
///
/// Rows and columns follow vertex identifier order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    order: usize,
    cells: Vec<bool>,
}

impl AdjacencyMatrix {
    fn from_edges(order: usize, edges: &[(usize, usize)]) -> Self {
        let mut cells = vec![false; order * order];
        for &(left, right) in edges {
            cells[left * order + right] = true;
            cells[right * order + left] = true;
        }
        Self { order, cells }
    }

    /// Number of rows (and columns).
    #[must_use]
    #[rustfmt::skip]
    pub fn order(&self) -> usize { self.order }

    /// Returns whether `row` and `col` are adjacent; out-of-range indices are
    /// never adjacent.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> bool {
        if row >= self.order || col >= self.order {
            return false;
        }
        self.cells[row * self.order + col]
    }

    /// Returns one row of the matrix, or `None` when `row` is out of range.
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[bool]> {
        let start = row.checked_mul(self.order)?;
        self.cells.get(start..start + self.order)
    }

    /// Returns the matrix as row-major `f64` entries for numeric work.
    #[must_use]
    pub fn to_f64(&self) -> Vec<f64> {
        self.cells
            .iter()
            .map(|&cell| if cell { 1.0 } else { 0.0 })
            .collect()
    }
}

/// An immutable simple connected undirected graph.
///
/// # Examples
/// ```
/// use eccentree_core::Graph;
///
/// let path = Graph::from_edges(3, [(0, 1), (2, 1)]).expect("a path is valid");
/// assert_eq!(path.edges(), &[(0, 1), (1, 2)]);
/// assert_eq!(path.degree_sequence(), vec![1, 1, 2]);
/// assert!(path.is_tree());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Graph {
    edges: Vec<(usize, usize)>,
    neighbours: Vec<Vec<usize>>,
    adjacency: AdjacencyMatrix,
}

impl Graph {
    /// Builds a graph on `vertex_count` vertices from an edge list.
    ///
    /// Edges may be given in either orientation; they are stored as
    /// `(min, max)` pairs in ascending order.
    ///
    /// # Errors
    /// Returns [`GraphError::EmptyGraph`] when `vertex_count == 0`,
    /// [`GraphError::UnknownVertex`] for an endpoint `>= vertex_count`,
    /// [`GraphError::SelfLoop`] and [`GraphError::DuplicateEdge`] for
    /// non-simple edge lists, and [`GraphError::Disconnected`] when some
    /// vertex cannot be reached from vertex `0`.
    pub fn from_edges(
        vertex_count: usize,
        edges: impl IntoIterator<Item = (usize, usize)>,
    ) -> Result<Self, GraphError> {
        if vertex_count == 0 {
            return Err(GraphError::EmptyGraph);
        }

        let mut canonical = BTreeSet::new();
        for (left, right) in edges {
            let (left, right) = canonicalize(left, right, vertex_count)?;
            if !canonical.insert((left, right)) {
                return Err(GraphError::DuplicateEdge { left, right });
            }
        }
        let edges: Vec<(usize, usize)> = canonical.into_iter().collect();

        let mut neighbours = vec![Vec::new(); vertex_count];
        for &(left, right) in &edges {
            neighbours[left].push(right);
            neighbours[right].push(left);
        }
        for list in &mut neighbours {
            list.sort_unstable();
        }

        let graph = Self {
            adjacency: AdjacencyMatrix::from_edges(vertex_count, &edges),
            edges,
            neighbours,
        };

        let reachable = graph
            .distances_from(0)
            .iter()
            .filter(|&&distance| distance != UNREACHED)
            .count();
        if reachable != vertex_count {
            return Err(GraphError::Disconnected {
                reachable,
                vertex_count,
            });
        }
        Ok(graph)
    }

    /// The path `0 - 1 - … - (vertex_count - 1)`.
    ///
    /// # Errors
    /// Returns [`GraphError::EmptyGraph`] when `vertex_count == 0`.
    pub fn path(vertex_count: usize) -> Result<Self, GraphError> {
        Self::from_edges(vertex_count, (1..vertex_count).map(|v| (v - 1, v)))
    }

    /// The star with centre `0` and `vertex_count - 1` leaves.
    ///
    /// # Errors
    /// Returns [`GraphError::EmptyGraph`] when `vertex_count == 0`.
    pub fn star(vertex_count: usize) -> Result<Self, GraphError> {
        Self::from_edges(vertex_count, (1..vertex_count).map(|v| (0, v)))
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.neighbours.len()
    }

    /// Number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Edges as ascending `(min, max)` pairs.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[(usize, usize)] { &self.edges }

    /// Sorted neighbours of `vertex`; empty for unknown vertices.
    #[must_use]
    pub fn neighbours(&self, vertex: usize) -> &[usize] {
        self.neighbours
            .get(vertex)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Degree of `vertex`; zero for unknown vertices.
    #[must_use]
    pub fn degree(&self, vertex: usize) -> usize {
        self.neighbours(vertex).len()
    }

    /// Degrees of all vertices, in vertex order.
    #[must_use]
    pub fn degrees(&self) -> Vec<usize> {
        self.neighbours.iter().map(Vec::len).collect()
    }

    /// Vertex degrees sorted ascending.
    #[must_use]
    pub fn degree_sequence(&self) -> Vec<usize> {
        let mut degrees = self.degrees();
        degrees.sort_unstable();
        degrees
    }

    /// Returns whether `left` and `right` share an edge.
    #[must_use]
    pub fn is_adjacent(&self, left: usize, right: usize) -> bool {
        self.adjacency.get(left, right)
    }

    /// Dense adjacency matrix view.
    #[must_use]
    #[rustfmt::skip]
    pub fn adjacency_matrix(&self) -> &AdjacencyMatrix { &self.adjacency }

    /// Returns `true` when the graph is acyclic, which for a connected graph
    /// means it has exactly `vertex_count - 1` edges.
    #[must_use]
    pub fn is_tree(&self) -> bool {
        self.edge_count() + 1 == self.vertex_count()
    }

    /// Returns a copy with every vertex `v` renamed to `permutation[v]`.
    ///
    /// # Errors
    /// Returns [`GraphError::OrderMismatch`] when the permutation order
    /// differs from the vertex count.
    pub fn relabel(&self, permutation: &Permutation) -> Result<Self, GraphError> {
        if permutation.len() != self.vertex_count() {
            return Err(GraphError::OrderMismatch {
                expected: self.vertex_count(),
                got: permutation.len(),
            });
        }
        Self::from_edges(
            self.vertex_count(),
            self.edges
                .iter()
                .map(|&(left, right)| (permutation[left], permutation[right])),
        )
    }

    /// Breadth-first hop counts from `source`; unreachable vertices (and an
    /// unknown source) report [`UNREACHED`].
    pub(crate) fn distances_from(&self, source: usize) -> Vec<usize> {
        let mut distances = vec![UNREACHED; self.vertex_count()];
        let Some(slot) = distances.get_mut(source) else {
            return distances;
        };
        *slot = 0;

        let mut queue = VecDeque::from([source]);
        while let Some(vertex) = queue.pop_front() {
            let next = distances[vertex] + 1;
            for &neighbour in &self.neighbours[vertex] {
                if distances[neighbour] == UNREACHED {
                    distances[neighbour] = next;
                    queue.push_back(neighbour);
                }
            }
        }
        distances
    }
}

impl AsRef<Self> for Graph {
    fn as_ref(&self) -> &Self {
        self
    }
}

fn canonicalize(
    left: usize,
    right: usize,
    vertex_count: usize,
) -> Result<(usize, usize), GraphError> {
    for vertex in [left, right] {
        if vertex >= vertex_count {
            return Err(GraphError::UnknownVertex {
                vertex,
                vertex_count,
            });
        }
    }
    if left == right {
        return Err(GraphError::SelfLoop { vertex: left });
    }
    Ok((left.min(right), left.max(right)))
}
