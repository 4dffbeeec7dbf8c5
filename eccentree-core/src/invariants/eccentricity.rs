//! Eccentricity vectors and the signatures derived from them.

use std::fmt;

use crate::graph::Graph;

/// Per-vertex eccentricities in vertex order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EccentricityVector(Vec<usize>);

impl EccentricityVector {
    /// Eccentricity of each vertex, indexed by vertex identifier.
    #[must_use]
    #[rustfmt::skip]
    pub fn as_slice(&self) -> &[usize] { &self.0 }

    /// Smallest eccentricity (the graph radius).
    #[must_use]
    pub fn radius(&self) -> usize {
        self.0.iter().copied().min().unwrap_or(0)
    }

    /// Largest eccentricity (the graph diameter).
    #[must_use]
    pub fn diameter(&self) -> usize {
        self.0.iter().copied().max().unwrap_or(0)
    }

    /// Sorts the vector into its canonical grouping key.
    #[must_use]
    pub fn signature(&self) -> EccentricitySignature {
        EccentricitySignature::from_vector(self)
    }
}

/// Eccentricities sorted ascending: a relabeling-invariant grouping key.
///
/// The signature has one entry per vertex, so graphs of different orders
/// never share one.
///
/// # Examples
/// ```
/// use eccentree_core::{Graph, eccentricities};
///
/// let star = Graph::star(5).expect("star is valid");
/// let signature = eccentricities(&star).signature();
/// assert_eq!(signature.as_slice(), &[1, 2, 2, 2, 2]);
/// assert_eq!(signature.to_string(), "(1, 2, 2, 2, 2)");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EccentricitySignature(Box<[usize]>);

impl EccentricitySignature {
    /// Builds the signature of an eccentricity vector.
    #[must_use]
    pub fn from_vector(vector: &EccentricityVector) -> Self {
        let mut sorted = vector.0.clone();
        sorted.sort_unstable();
        Self(sorted.into_boxed_slice())
    }

    /// The sorted eccentricities.
    #[must_use]
    #[rustfmt::skip]
    pub fn as_slice(&self) -> &[usize] { &self.0 }

    /// Smallest eccentricity in the signature.
    #[must_use]
    pub fn radius(&self) -> usize {
        self.0.first().copied().unwrap_or(0)
    }

    /// Largest eccentricity in the signature.
    #[must_use]
    pub fn diameter(&self) -> usize {
        self.0.last().copied().unwrap_or(0)
    }
}

impl fmt::Display for EccentricitySignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (index, value) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str(")")
    }
}

/// Computes the eccentricity of every vertex.
///
/// Trees take the three-search shortcut through a diameter's endpoints;
/// other graphs run one breadth-first search per vertex, O(V·(V+E)).
#[must_use]
pub fn eccentricities(graph: &Graph) -> EccentricityVector {
    if graph.is_tree() {
        tree_eccentricities(graph)
    } else {
        searched_eccentricities(graph)
    }
}

/// One breadth-first search per vertex, valid for any connected graph.
pub(crate) fn searched_eccentricities(graph: &Graph) -> EccentricityVector {
    EccentricityVector(
        (0..graph.vertex_count())
            .map(|vertex| farthest(&graph.distances_from(vertex)).1)
            .collect(),
    )
}

/// In a tree the farthest vertex from anywhere is an endpoint of some
/// diameter, so every eccentricity is the larger distance to the two ends.
pub(crate) fn tree_eccentricities(graph: &Graph) -> EccentricityVector {
    let (first_end, _) = farthest(&graph.distances_from(0));
    let from_first = graph.distances_from(first_end);
    let (second_end, _) = farthest(&from_first);
    let from_second = graph.distances_from(second_end);
    EccentricityVector(
        from_first
            .iter()
            .zip(&from_second)
            .map(|(&left, &right)| left.max(right))
            .collect(),
    )
}

/// Returns the lowest-numbered vertex at maximum distance and that distance.
fn farthest(distances: &[usize]) -> (usize, usize) {
    distances
        .iter()
        .copied()
        .enumerate()
        .fold((0, 0), |best, (vertex, distance)| {
            if distance > best.1 {
                (vertex, distance)
            } else {
                best
            }
        })
}
