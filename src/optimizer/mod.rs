//! Route-inspection search driver.
//!
//! - [`Optimizer`] — configured search returning a [`Solution`] with counters
//! - [`optimize`] — default-configured search returning just the [`Walk`](crate::models::Walk)
//! - [`OptimizerConfig`] — seed, sample count and exhaustive limit

mod config;
mod solver;

pub use config::{OptimizerConfig, MAX_EDGES, MIN_EDGES};
pub use solver::{optimize, Optimizer, Solution};
