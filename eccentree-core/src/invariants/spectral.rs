//! Spectral radius of the adjacency matrix.
//!
//! The default estimator runs power iteration on `A + I`. Trees are
//! bipartite, so `A` alone has `-ρ` competing with `ρ` and the iterate never
//! settles; shifting by the identity makes `ρ + 1` strictly dominant for any
//! connected graph. When the estimate fails to settle within the iteration
//! cap the computation falls back to a dense Jacobi eigendecomposition.

use tracing::warn;

use crate::{error::SpectralError, graph::Graph};

/// Relative change between successive estimates that counts as converged.
pub const POWER_ITERATION_TOLERANCE: f64 = 1e-10;
/// Residual `‖(A + I)x − λx‖` relative to `λ` that counts as converged.
///
/// A small step-to-step change alone can leave the estimate several
/// multiples of [`SPECTRAL_TIE_TOLERANCE`] away from the true radius when
/// the spectral gap is narrow.
pub const POWER_RESIDUAL_TOLERANCE: f64 = 1e-10;
/// Maximum number of power-iteration steps.
pub const POWER_ITERATION_LIMIT: usize = 1_000;
/// Maximum number of cyclic Jacobi sweeps.
pub const JACOBI_SWEEP_LIMIT: usize = 100;
/// Off-diagonal Frobenius norm below which a Jacobi sweep has converged.
pub const JACOBI_TOLERANCE: f64 = 1e-12;
/// Spectral radii closer than this are ranked as ties.
pub const SPECTRAL_TIE_TOLERANCE: f64 = 1e-9;

/// How [`spectral_radius`] computes the dominant eigenvalue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SpectralMethod {
    /// Shifted power iteration, falling back to [`SpectralMethod::Dense`] on
    /// non-convergence.
    #[default]
    PowerIteration,
    /// Full cyclic Jacobi eigendecomposition of the dense matrix.
    Dense,
}

/// Returns the largest-magnitude eigenvalue of the graph's adjacency matrix.
///
/// # Errors
/// Returns [`SpectralError::DenseNonConvergence`] when the dense solver (used
/// directly, or as the fallback after power iteration stalls) does not
/// converge.
///
/// # Examples
/// ```
/// use eccentree_core::{Graph, SpectralMethod, spectral_radius};
///
/// let star = Graph::star(5).expect("star is valid");
/// let radius = spectral_radius(&star, SpectralMethod::PowerIteration)?;
/// assert!((radius - 2.0).abs() < 1e-9);
/// # Ok::<(), eccentree_core::SpectralError>(())
/// ```
pub fn spectral_radius(graph: &Graph, method: SpectralMethod) -> Result<f64, SpectralError> {
    spectral_radius_with_limit(graph, method, POWER_ITERATION_LIMIT)
}

pub(crate) fn spectral_radius_with_limit(
    graph: &Graph,
    method: SpectralMethod,
    power_limit: usize,
) -> Result<f64, SpectralError> {
    match method {
        SpectralMethod::Dense => dense_spectral_radius(graph),
        SpectralMethod::PowerIteration => {
            power_iteration(graph, power_limit).or_else(|error| {
                warn!(
                    code = error.code().as_str(),
                    vertices = graph.vertex_count(),
                    error = %error,
                    "power iteration stalled, falling back to dense eigensolver"
                );
                dense_spectral_radius(graph)
            })
        }
    }
}

/// Power iteration on `A + I` from the all-ones vector.
///
/// The all-ones start has a positive component along the Perron vector of a
/// connected graph, so the iterate converges to it. The estimate is accepted
/// only once both the relative change and the eigenpair residual are below
/// their tolerances.
pub(crate) fn power_iteration(graph: &Graph, limit: usize) -> Result<f64, SpectralError> {
    let order = graph.vertex_count();
    if order <= 1 {
        return Ok(0.0);
    }

    let mut vector = vec![1.0 / (order as f64).sqrt(); order];
    let mut estimate: Option<f64> = None;
    let mut last_change = f64::INFINITY;

    for _ in 0..limit {
        let shifted = shifted_product(graph, &vector);
        // `vector` is unit length, so the Rayleigh quotient is a dot product.
        let quotient: f64 = vector.iter().zip(&shifted).map(|(v, w)| v * w).sum();
        let norm = shifted.iter().map(|w| w * w).sum::<f64>().sqrt();
        if norm == 0.0 {
            return Ok(0.0);
        }
        let residual = shifted
            .iter()
            .zip(&vector)
            .map(|(w, v)| {
                let gap = quotient.mul_add(-v, *w);
                gap * gap
            })
            .sum::<f64>()
            .sqrt();
        vector = shifted.into_iter().map(|w| w / norm).collect();

        if let Some(previous) = estimate {
            last_change = (quotient - previous).abs() / quotient.abs();
            if last_change < POWER_ITERATION_TOLERANCE
                && residual <= POWER_RESIDUAL_TOLERANCE * quotient.abs()
            {
                return Ok(quotient - 1.0);
            }
        }
        estimate = Some(quotient);
    }

    Err(SpectralError::NonConvergence {
        iterations: limit,
        last_change,
    })
}

/// Computes `(A + I)·vector` from the adjacency lists.
fn shifted_product(graph: &Graph, vector: &[f64]) -> Vec<f64> {
    vector
        .iter()
        .enumerate()
        .map(|(vertex, &own)| {
            own + graph
                .neighbours(vertex)
                .iter()
                .map(|&neighbour| vector[neighbour])
                .sum::<f64>()
        })
        .collect()
}

/// Spectral radius from the full eigenvalue set of the dense matrix.
pub(crate) fn dense_spectral_radius(graph: &Graph) -> Result<f64, SpectralError> {
    let eigenvalues = jacobi_eigenvalues(
        graph.adjacency_matrix().to_f64(),
        graph.vertex_count(),
        JACOBI_SWEEP_LIMIT,
    )?;
    Ok(eigenvalues.into_iter().map(f64::abs).fold(0.0, f64::max))
}

/// Eigenvalues of a symmetric row-major matrix by cyclic Jacobi rotations.
pub(crate) fn jacobi_eigenvalues(
    mut matrix: Vec<f64>,
    order: usize,
    sweep_limit: usize,
) -> Result<Vec<f64>, SpectralError> {
    for _ in 0..sweep_limit {
        if off_diagonal_norm(&matrix, order) < JACOBI_TOLERANCE {
            return Ok(diagonal(&matrix, order));
        }
        for p in 0..order {
            for q in (p + 1)..order {
                rotate(&mut matrix, order, p, q);
            }
        }
    }

    let off_diagonal = off_diagonal_norm(&matrix, order);
    if off_diagonal < JACOBI_TOLERANCE {
        return Ok(diagonal(&matrix, order));
    }
    Err(SpectralError::DenseNonConvergence {
        sweeps: sweep_limit,
        off_diagonal,
    })
}

/// Applies the Jacobi rotation that zeroes entry `(p, q)`.
fn rotate(matrix: &mut [f64], order: usize, p: usize, q: usize) {
    let apq = matrix[p * order + q];
    if apq == 0.0 {
        return;
    }
    let app = matrix[p * order + p];
    let aqq = matrix[q * order + q];
    let theta = (aqq - app) / (2.0 * apq);
    // Smaller root of t² + 2θt − 1 = 0 keeps the rotation angle ≤ π/4.
    let t = theta.signum() / (theta.abs() + theta.mul_add(theta, 1.0).sqrt());
    let c = 1.0 / t.mul_add(t, 1.0).sqrt();
    let s = t * c;

    for k in 0..order {
        let akp = matrix[k * order + p];
        let akq = matrix[k * order + q];
        matrix[k * order + p] = c * akp - s * akq;
        matrix[k * order + q] = s * akp + c * akq;
    }
    for k in 0..order {
        let apk = matrix[p * order + k];
        let aqk = matrix[q * order + k];
        matrix[p * order + k] = c * apk - s * aqk;
        matrix[q * order + k] = s * apk + c * aqk;
    }
}

fn off_diagonal_norm(matrix: &[f64], order: usize) -> f64 {
    let mut sum = 0.0;
    for row in 0..order {
        for col in 0..order {
            if row != col {
                let value = matrix[row * order + col];
                sum += value * value;
            }
        }
    }
    sum.sqrt()
}

fn diagonal(matrix: &[f64], order: usize) -> Vec<f64> {
    (0..order).map(|index| matrix[index * order + index]).collect()
}
