//! Optimizer configuration.

use crate::ordering::{EXHAUSTIVE_LIMIT, RANDOM_SAMPLES};

/// Largest edge count the optimizer accepts.
pub const MAX_EDGES: usize = 12;

/// Smallest edge count the optimizer accepts.
pub const MIN_EDGES: usize = 1;

/// Configuration for [`Optimizer`](super::Optimizer).
///
/// # Examples
///
/// ```
/// use u_postman::optimizer::OptimizerConfig;
///
/// let config = OptimizerConfig::default()
///     .with_seed(42)
///     .with_random_samples(20);
/// assert_eq!(config.seed, Some(42));
/// assert_eq!(config.random_samples, 20);
/// assert_eq!(config.exhaustive_limit, 8);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizerConfig {
    /// Seed for the random orderings drawn above the exhaustive limit.
    /// `None` draws a seed from the operating system.
    pub seed: Option<u64>,
    /// Number of random orderings sampled above the exhaustive limit.
    pub random_samples: usize,
    /// Largest edge count searched over every permutation (at most 8).
    pub exhaustive_limit: usize,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            seed: None,
            random_samples: RANDOM_SAMPLES,
            exhaustive_limit: EXHAUSTIVE_LIMIT,
        }
    }
}

impl OptimizerConfig {
    /// Fixes the random seed so heuristic runs are reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the number of random orderings for large edge sets.
    pub fn with_random_samples(mut self, samples: usize) -> Self {
        self.random_samples = samples;
        self
    }

    /// Sets the exhaustive-search limit, clamped to 8 edges.
    pub fn with_exhaustive_limit(mut self, limit: usize) -> Self {
        self.exhaustive_limit = limit.min(EXHAUSTIVE_LIMIT);
        self
    }
}
