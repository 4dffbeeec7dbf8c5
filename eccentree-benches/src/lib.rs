//! Benchmark support crate for eccentree.
//!
//! Provides seeded random trees and parameter types used by the Criterion
//! benchmarks for tree enumeration, isomorphism testing and spectral radius.

pub mod error;
pub mod params;
pub mod source;
