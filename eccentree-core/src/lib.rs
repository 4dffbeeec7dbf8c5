//! Eccentree core library: enumerate small trees and tree families, drop
//! isomorphic duplicates, then group by eccentricity signature and rank by
//! spectral radius.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod classify;
mod error;
mod explorer;
mod generate;
mod graph;
mod invariants;
mod isomorphism;
mod permutation;

#[cfg(test)]
mod test_utils;

pub use crate::{
    builder::{ExecutionStrategy, ExplorerBuilder},
    classify::{
        AnnotatedGraph, ClassifiedGroup, ClassifiedGroups, EccentricityBounds, classify,
        filter_by_eccentricity_bounds, group_by_signature, rank_by_spectral_radius,
    },
    error::{
        BoundsError, BoundsErrorCode, ExplorerError, ExplorerErrorCode, GraphError,
        GraphErrorCode, Result, SkeletonError, SkeletonErrorCode, SpectralError,
        SpectralErrorCode,
    },
    explorer::{Exploration, Explorer, SpectralOmission},
    generate::{
        Attachment, AttachmentGroup, Candidate, Configuration, Configurations, FamilySpec,
        GenerationStrategy, MAX_CONFIGURATIONS, MAX_TREE_VERTICES, ResolvedGroup, Skeleton,
        enumerate_family, enumerate_trees, generate,
    },
    graph::{AdjacencyMatrix, Graph},
    invariants::{
        EccentricitySignature, EccentricityVector, JACOBI_SWEEP_LIMIT, JACOBI_TOLERANCE,
        POWER_ITERATION_LIMIT, POWER_ITERATION_TOLERANCE, POWER_RESIDUAL_TOLERANCE,
        SPECTRAL_TIE_TOLERANCE, SpectralMethod, eccentricities, spectral_radius,
    },
    isomorphism::{
        Deduplicator, Insertion, are_isomorphic, find_isomorphism, remove_isomorphic_duplicates,
    },
    permutation::Permutation,
};
