//! Joint colour refinement (one-dimensional Weisfeiler–Leman).
//!
//! Both graphs are refined against one shared colour table. Each round maps
//! every vertex to the signature `(colour, sorted neighbour colours)` and
//! renumbers the distinct signatures by their sorted rank, so the resulting
//! colours do not depend on which graph is passed first or on vertex order.

use std::collections::{BTreeMap, BTreeSet};

use crate::graph::Graph;

type Signature = (usize, Vec<usize>);

/// Stable colours for the vertices of two graphs refined together.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct JointColouring {
    pub(crate) left: Vec<usize>,
    pub(crate) right: Vec<usize>,
    pub(crate) classes: usize,
}

impl JointColouring {
    /// Returns whether both graphs use every colour equally often.
    pub(crate) fn histograms_match(&self) -> bool {
        histogram(&self.left, self.classes) == histogram(&self.right, self.classes)
    }
}

/// Refines degree colours until the number of classes stops growing.
pub(crate) fn refine_jointly(left: &Graph, right: &Graph) -> JointColouring {
    let mut colours = (left.degrees(), right.degrees());
    let mut classes = count_classes(&colours.0, &colours.1);

    loop {
        let left_signatures = signatures(left, &colours.0);
        let right_signatures = signatures(right, &colours.1);
        let table: BTreeMap<&Signature, usize> = left_signatures
            .iter()
            .chain(&right_signatures)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .enumerate()
            .map(|(rank, signature)| (signature, rank))
            .collect();

        let refined_classes = table.len();
        let recolour = |list: &[Signature]| -> Vec<usize> {
            list.iter()
                .map(|signature| table.get(signature).copied().unwrap_or_default())
                .collect()
        };
        colours = (recolour(&left_signatures), recolour(&right_signatures));

        // Each signature embeds the previous colour, so classes only split.
        if refined_classes == classes {
            return JointColouring {
                left: colours.0,
                right: colours.1,
                classes,
            };
        }
        classes = refined_classes;
    }
}

fn signatures(graph: &Graph, colours: &[usize]) -> Vec<Signature> {
    colours
        .iter()
        .enumerate()
        .map(|(vertex, &colour)| {
            let mut around: Vec<usize> = graph
                .neighbours(vertex)
                .iter()
                .map(|&neighbour| colours[neighbour])
                .collect();
            around.sort_unstable();
            (colour, around)
        })
        .collect()
}

fn count_classes(left: &[usize], right: &[usize]) -> usize {
    left.iter().chain(right).collect::<BTreeSet<_>>().len()
}

fn histogram(colours: &[usize], classes: usize) -> Vec<usize> {
    let mut counts = vec![0; classes];
    for &colour in colours {
        if let Some(slot) = counts.get_mut(colour) {
            *slot += 1;
        }
    }
    counts
}
