//! Structural invariants computed for every surviving candidate.
//!
//! Both invariants are pure functions of a [`crate::Graph`]'s structure:
//!
//! - the eccentricity vector and its sorted signature, used for filtering and
//!   grouping;
//! - the spectral radius of the adjacency matrix, used only for ranking since
//!   it is a tolerance-sensitive float.

mod eccentricity;
mod spectral;

pub use self::{
    eccentricity::{EccentricitySignature, EccentricityVector, eccentricities},
    spectral::{
        JACOBI_SWEEP_LIMIT, JACOBI_TOLERANCE, POWER_ITERATION_LIMIT, POWER_ITERATION_TOLERANCE,
        POWER_RESIDUAL_TOLERANCE, SPECTRAL_TIE_TOLERANCE, SpectralMethod, spectral_radius,
    },
};

#[cfg(test)]
mod tests;
