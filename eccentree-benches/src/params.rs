//! Benchmark parameter types.

use std::fmt;

use eccentree_core::SpectralMethod;

/// Parameters for a benchmark sized by vertex count.
#[derive(Clone, Debug)]
pub struct TreeBenchParams {
    /// Vertices per tree.
    pub vertex_count: usize,
}

impl fmt::Display for TreeBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={}", self.vertex_count)
    }
}

/// Parameters for a spectral radius benchmark run.
#[derive(Clone, Debug)]
pub struct SpectralBenchParams {
    /// Vertices per tree.
    pub vertex_count: usize,
    /// Algorithm under measurement.
    pub method: SpectralMethod,
}

impl fmt::Display for SpectralBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let method = match self.method {
            SpectralMethod::PowerIteration => "power",
            SpectralMethod::Dense => "dense",
        };
        write!(f, "n={},{method}", self.vertex_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case(SpectralMethod::PowerIteration, "n=12,power")]
    #[case(SpectralMethod::Dense, "n=12,dense")]
    fn spectral_params_render_as_benchmark_ids(
        #[case] method: SpectralMethod,
        #[case] expected: &str,
    ) {
        let params = SpectralBenchParams {
            vertex_count: 12,
            method,
        };
        assert_eq!(params.to_string(), expected);
    }

    #[test]
    fn tree_params_render_vertex_count() {
        assert_eq!(TreeBenchParams { vertex_count: 9 }.to_string(), "n=9");
    }
}
