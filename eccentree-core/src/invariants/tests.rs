//! Tests for eccentricity and spectral invariants.

use std::f64::consts::PI;

use eccentree_test_support::tracing::RecordingLayer;
use proptest::prelude::*;
use rstest::rstest;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;

use super::{
    eccentricity::{searched_eccentricities, tree_eccentricities},
    spectral::{
        dense_spectral_radius, jacobi_eigenvalues, power_iteration, spectral_radius_with_limit,
    },
    *,
};
use crate::{
    error::{SpectralError, SpectralErrorCode},
    generate::enumerate_trees,
    graph::Graph,
    test_utils::{random_permutation, random_tree, suite_proptest_config},
};

#[rstest]
#[case::single(1, vec![0])]
#[case::edge(2, vec![1, 1])]
#[case::path(5, vec![4, 3, 2, 3, 4])]
fn path_eccentricities(#[case] vertex_count: usize, #[case] expected: Vec<usize>) {
    let path = Graph::path(vertex_count).expect("path is valid");
    let vector = eccentricities(&path);
    assert_eq!(vector.as_slice(), expected.as_slice());
    assert_eq!(vector.radius(), (vertex_count - 1).div_ceil(2));
    assert_eq!(vector.diameter(), vertex_count - 1);
}

#[test]
fn star_signature_sorts_ascending() {
    let star = Graph::star(5).expect("star is valid");
    let vector = eccentricities(&star);
    assert_eq!(vector.as_slice(), &[1, 2, 2, 2, 2]);

    let signature = vector.signature();
    assert_eq!(signature.radius(), 1);
    assert_eq!(signature.diameter(), 2);
    assert_eq!(signature.to_string(), "(1, 2, 2, 2, 2)");
}

#[test]
fn cycle_eccentricities_use_full_search() {
    let cycle = Graph::from_edges(5, [(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)])
        .expect("cycle is valid");
    assert_eq!(eccentricities(&cycle).as_slice(), &[2, 2, 2, 2, 2]);
}

#[test]
fn signatures_order_lexicographically() {
    let star = eccentricities(&Graph::star(5).expect("star is valid")).signature();
    let path = eccentricities(&Graph::path(5).expect("path is valid")).signature();
    assert!(star < path);
}

#[rstest]
fn path_spectral_radius_matches_closed_form(
    #[values(2, 3, 4, 5, 6, 7, 8, 9, 10)] vertex_count: usize,
    #[values(SpectralMethod::PowerIteration, SpectralMethod::Dense)] method: SpectralMethod,
) {
    let path = Graph::path(vertex_count).expect("path is valid");
    let expected = 2.0 * (PI / (vertex_count as f64 + 1.0)).cos();
    let radius = spectral_radius(&path, method).expect("path radius must converge");
    assert!(
        (radius - expected).abs() < 1e-6,
        "{method:?} on P{vertex_count}: got {radius}, expected {expected}"
    );
}

#[rstest]
#[case::single_vertex(1, 0.0)]
#[case::star_five(5, 2.0)]
#[case::star_ten(10, 3.0)]
fn star_spectral_radius_is_square_root_of_leaves(
    #[case] vertex_count: usize,
    #[case] expected: f64,
) {
    let star = Graph::star(vertex_count).expect("star is valid");
    for method in [SpectralMethod::PowerIteration, SpectralMethod::Dense] {
        let radius = spectral_radius(&star, method).expect("star radius must converge");
        assert!((radius - expected).abs() < 1e-6, "{method:?}: {radius}");
    }
}

#[test]
fn dense_solver_recovers_full_spectrum() {
    // P3 has eigenvalues -√2, 0, √2.
    let matrix = Graph::path(3)
        .expect("path is valid")
        .adjacency_matrix()
        .to_f64();
    let mut eigenvalues = jacobi_eigenvalues(matrix, 3, JACOBI_SWEEP_LIMIT).expect("converges");
    eigenvalues.sort_by(f64::total_cmp);
    let root_two = 2.0_f64.sqrt();
    for (got, want) in eigenvalues.iter().zip([-root_two, 0.0, root_two]) {
        assert!((got - want).abs() < 1e-9, "{got} vs {want}");
    }
}

#[test]
fn dense_solver_reports_exhausted_sweeps() {
    let matrix = Graph::path(6)
        .expect("path is valid")
        .adjacency_matrix()
        .to_f64();
    let err = jacobi_eigenvalues(matrix, 6, 0).expect_err("zero sweeps cannot converge");
    assert!(matches!(err, SpectralError::DenseNonConvergence { sweeps: 0, .. }));
    assert_eq!(err.code().as_str(), "SPECTRAL_DENSE_NON_CONVERGENCE");
}

#[test]
fn power_iteration_reports_exhausted_budget() {
    let path = Graph::path(8).expect("path is valid");
    let err = power_iteration(&path, 2).expect_err("two steps cannot converge");
    assert!(matches!(err, SpectralError::NonConvergence { iterations: 2, .. }));
    assert_eq!(err.code(), SpectralErrorCode::NonConvergence);
}

#[test]
fn stalled_power_iteration_falls_back_to_dense() {
    let path = Graph::path(8).expect("path is valid");
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());

    let radius = tracing::subscriber::with_default(subscriber, || {
        spectral_radius_with_limit(&path, SpectralMethod::PowerIteration, 2)
    })
    .expect("dense fallback must converge");

    let expected = 2.0 * (PI / 9.0).cos();
    assert!((radius - expected).abs() < 1e-9);
    let warnings = layer.events_at(Level::WARN);
    assert!(warnings.iter().any(|event| {
        event.message() == Some("power iteration stalled, falling back to dense eigensolver")
            && event.fields.get("code").map(String::as_str) == Some("SPECTRAL_NON_CONVERGENCE")
    }));
}

#[test]
fn converged_power_iteration_stays_inside_the_tie_tolerance() {
    let trees = enumerate_trees(13).expect("enumeration succeeds");
    let mut converged = 0;
    for (index, tree) in trees.iter().enumerate() {
        let Ok(estimate) = power_iteration(tree, POWER_ITERATION_LIMIT) else {
            continue;
        };
        converged += 1;
        let exact = dense_spectral_radius(tree).expect("dense solver converges");
        assert!(
            (estimate - exact).abs() < SPECTRAL_TIE_TOLERANCE / 4.0,
            "tree #{index}: {estimate} vs {exact}"
        );
    }
    assert!(converged * 2 > trees.len(), "most trees converge without the fallback");
}

#[test]
fn shifted_iteration_handles_non_bipartite_graphs() {
    let triangle = Graph::from_edges(3, [(0, 1), (1, 2), (2, 0)]).expect("triangle is valid");
    let radius =
        spectral_radius(&triangle, SpectralMethod::PowerIteration).expect("triangle converges");
    assert!((radius - 2.0).abs() < 1e-6);
}

proptest! {
    #![proptest_config(suite_proptest_config(64))]

    #[test]
    fn tree_shortcut_matches_full_search(vertex_count in 1usize..=24, seed in any::<u64>()) {
        let tree = random_tree(vertex_count, seed);
        prop_assert_eq!(tree_eccentricities(&tree), searched_eccentricities(&tree));
    }

    #[test]
    fn invariants_survive_relabeling(vertex_count in 1usize..=16, seed in any::<u64>()) {
        let tree = random_tree(vertex_count, seed);
        let relabeled = tree
            .relabel(&random_permutation(vertex_count, seed.wrapping_add(1)))
            .expect("orders match");

        prop_assert_eq!(
            eccentricities(&tree).signature(),
            eccentricities(&relabeled).signature()
        );
        let original = spectral_radius(&tree, SpectralMethod::PowerIteration)
            .expect("tree radius converges");
        let renamed = spectral_radius(&relabeled, SpectralMethod::PowerIteration)
            .expect("tree radius converges");
        prop_assert!((original - renamed).abs() < 1e-6);
    }

    #[test]
    fn power_iteration_agrees_with_dense(vertex_count in 2usize..=14, seed in any::<u64>()) {
        let tree = random_tree(vertex_count, seed);
        let power = spectral_radius(&tree, SpectralMethod::PowerIteration)
            .expect("power iteration converges or falls back");
        let dense = spectral_radius(&tree, SpectralMethod::Dense).expect("dense converges");
        prop_assert!((power - dense).abs() < 1e-5, "power {} dense {}", power, dense);
    }
}
