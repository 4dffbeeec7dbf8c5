//! Tests for bounds, grouping and ranking.

use proptest::prelude::*;
use rstest::{fixture, rstest};

use super::*;
use crate::{
    error::BoundsError,
    generate::{Candidate, enumerate_trees},
    graph::Graph,
    invariants::{EccentricitySignature, SPECTRAL_TIE_TOLERANCE, SpectralMethod},
    test_utils::suite_proptest_config,
};

fn annotate_all(graphs: Vec<Graph>) -> Vec<AnnotatedGraph> {
    graphs
        .into_iter()
        .enumerate()
        .map(|(index, graph)| {
            AnnotatedGraph::annotate(index, Candidate::new(graph), SpectralMethod::Dense)
                .expect("dense solver converges on small trees")
        })
        .collect()
}

#[fixture]
fn seven_vertex_trees() -> Vec<AnnotatedGraph> {
    annotate_all(enumerate_trees(7).expect("enumeration succeeds"))
}

fn signature_of(graph: &AnnotatedGraph) -> String {
    graph.signature().to_string()
}

#[test]
fn bounds_reject_inverted_ranges() {
    assert_eq!(
        EccentricityBounds::new(3, 2),
        Err(BoundsError::MinExceedsMax {
            min_radius: 3,
            max_diameter: 2
        })
    );
    let equal = EccentricityBounds::new(2, 2).expect("equal bounds are valid");
    assert_eq!((equal.min_radius(), equal.max_diameter()), (2, 2));
}

#[rstest]
fn filter_keeps_graphs_inside_the_range(seven_vertex_trees: Vec<AnnotatedGraph>) {
    let bounds = EccentricityBounds::new(2, 4).expect("valid");
    let total = seven_vertex_trees.len();
    let kept = filter_by_eccentricity_bounds(seven_vertex_trees.clone(), &bounds);

    assert!(kept.len() < total, "the star and the path fall outside");
    for graph in &kept {
        assert!(graph.signature().radius() >= 2);
        assert!(graph.signature().diameter() <= 4);
    }
    let dropped = seven_vertex_trees
        .iter()
        .filter(|graph| !kept.contains(graph))
        .count();
    assert_eq!(kept.len() + dropped, total);
}

#[rstest]
fn grouping_partitions_its_input(seven_vertex_trees: Vec<AnnotatedGraph>) {
    let total = seven_vertex_trees.len();
    let groups = group_by_signature(seven_vertex_trees.clone());

    assert_eq!(groups.member_count(), total);
    let mut seen: Vec<usize> = groups.members().map(AnnotatedGraph::index).collect();
    seen.sort_unstable();
    assert_eq!(seen, (0..total).collect::<Vec<_>>());

    for group in &groups {
        assert!(!group.is_empty());
        for member in group.members() {
            assert_eq!(member.signature(), group.signature());
        }
        let indices: Vec<usize> = group.members().iter().map(AnnotatedGraph::index).collect();
        assert!(indices.windows(2).all(|pair| pair[0] < pair[1]));
    }
}

#[rstest]
fn groups_follow_first_seen_order(seven_vertex_trees: Vec<AnnotatedGraph>) {
    let mut expected: Vec<String> = Vec::new();
    for graph in &seven_vertex_trees {
        let signature = signature_of(graph);
        if !expected.contains(&signature) {
            expected.push(signature);
        }
    }
    let groups = group_by_signature(seven_vertex_trees);
    let actual: Vec<String> = groups
        .iter()
        .map(|group| group.signature().to_string())
        .collect();
    assert_eq!(actual, expected);
    for (position, group) in groups.iter().enumerate() {
        assert_eq!(group.sequence(), position + 1);
    }
}

#[rstest]
fn selection_is_one_based_and_total(seven_vertex_trees: Vec<AnnotatedGraph>) {
    let groups = group_by_signature(seven_vertex_trees);
    let first = groups.select(1).expect("at least one group");
    assert_eq!(first.sequence(), 1);
    assert!(groups.select(0).is_none());
    assert!(groups.select(groups.len() + 1).is_none());

    let by_signature = groups.get(first.signature()).expect("signature was seen");
    assert_eq!(by_signature, first);
    let vector = crate::invariants::eccentricities(&Graph::path(3).expect("valid"));
    let unseen: EccentricitySignature = vector.signature();
    assert!(groups.get(&unseen).is_none());
}

#[test]
fn empty_input_yields_empty_groups() {
    let groups = classify(Vec::new(), None);
    assert!(groups.is_empty());
    assert_eq!(groups.member_count(), 0);
    assert!(groups.select(1).is_none());
}

#[rstest]
fn ranking_sorts_descending(seven_vertex_trees: Vec<AnnotatedGraph>) {
    let ranked = rank_by_spectral_radius(&seven_vertex_trees);
    assert_eq!(ranked.len(), seven_vertex_trees.len());
    assert!(
        ranked
            .windows(2)
            .all(|pair| pair[0].spectral_radius() >= pair[1].spectral_radius() - SPECTRAL_TIE_TOLERANCE)
    );
    // The star maximises the spectral radius among trees: √6.
    assert!((ranked[0].spectral_radius() - 6.0_f64.sqrt()).abs() < 1e-9);
}

#[test]
fn ranking_keeps_ties_in_input_order() {
    let base = annotate_all(vec![Graph::path(4).expect("valid")]).remove(0);
    let radii = [1.0, 2.0, 1.0 + SPECTRAL_TIE_TOLERANCE / 2.0, 2.0, 0.5, 1.0];
    let members = radii.iter().enumerate().map(|(position, &radius)| Tagged {
        position,
        graph: base.clone().with_spectral_radius(radius),
    });

    let ranked = rank_by_spectral_radius(members);
    let order: Vec<usize> = ranked.iter().map(|tagged| tagged.position).collect();
    assert_eq!(order, vec![1, 3, 0, 2, 5, 4]);
}

/// First pair of distinct trees sharing a signature and a spectral radius.
fn equal_radius_pair(vertex_count: usize) -> (AnnotatedGraph, AnnotatedGraph) {
    let groups = group_by_signature(annotate_all(
        enumerate_trees(vertex_count).expect("enumeration succeeds"),
    ));
    groups
        .iter()
        .find_map(|group| {
            let members = group.members();
            members.iter().enumerate().find_map(|(position, left)| {
                members[position + 1..]
                    .iter()
                    .find(|right| (left.spectral_radius() - right.spectral_radius()).abs() < 1e-12)
                    .map(|right| (left.clone(), right.clone()))
            })
        })
        .expect("thirteen-vertex trees include a same-signature cospectral pair")
}

#[test]
fn ranking_keeps_power_iteration_ties_in_input_order() {
    let (first, second) = equal_radius_pair(13);
    assert!(first.index() < second.index());
    assert_ne!(first.graph(), second.graph());

    let reannotate = |graph: &AnnotatedGraph| {
        AnnotatedGraph::annotate(
            graph.index(),
            Candidate::new(graph.graph().clone()),
            SpectralMethod::PowerIteration,
        )
        .expect("power iteration converges on small trees")
    };
    let (first, second) = (reannotate(&first), reannotate(&second));
    assert!((first.spectral_radius() - second.spectral_radius()).abs() < SPECTRAL_TIE_TOLERANCE);

    let forward: Vec<usize> = rank_by_spectral_radius([&first, &second])
        .iter()
        .map(|graph| graph.index())
        .collect();
    assert_eq!(forward, vec![first.index(), second.index()]);

    let backward: Vec<usize> = rank_by_spectral_radius([&second, &first])
        .iter()
        .map(|graph| graph.index())
        .collect();
    assert_eq!(backward, vec![second.index(), first.index()]);
}

struct Tagged {
    position: usize,
    graph: AnnotatedGraph,
}

impl std::borrow::Borrow<AnnotatedGraph> for Tagged {
    fn borrow(&self) -> &AnnotatedGraph {
        &self.graph
    }
}

#[rstest]
fn classify_applies_bounds_before_grouping(seven_vertex_trees: Vec<AnnotatedGraph>) {
    let bounds = EccentricityBounds::new(3, 6).expect("valid");
    let groups = classify(seven_vertex_trees, Some(&bounds));
    assert!(!groups.is_empty());
    assert!(groups.members().all(|graph| graph.signature().radius() >= 3));
}

proptest! {
    #![proptest_config(suite_proptest_config(64))]

    #[test]
    fn ranking_is_a_stable_descending_permutation(radii in prop::collection::vec(0u8..6, 0..24)) {
        let base = annotate_all(vec![Graph::path(2).expect("valid")]).remove(0);
        let tagged: Vec<Tagged> = radii
            .iter()
            .enumerate()
            .map(|(position, &radius)| Tagged {
                position,
                graph: base.clone().with_spectral_radius(f64::from(radius)),
            })
            .collect();

        let ranked = rank_by_spectral_radius(tagged);
        prop_assert_eq!(ranked.len(), radii.len());
        for pair in ranked.windows(2) {
            let (left, right) = (&pair[0], &pair[1]);
            let (left_radius, right_radius) =
                (radii[left.position], radii[right.position]);
            prop_assert!(left_radius >= right_radius);
            if left_radius == right_radius {
                prop_assert!(left.position < right.position);
            }
        }
    }
}
