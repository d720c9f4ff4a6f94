//! Search driver: every start node × every candidate edge ordering.
//!
//! # Algorithm
//!
//! 1. Reject edge counts outside `[1, 12]`.
//! 2. Compute all-pairs shortest paths once; stop early if the edges do not
//!    all lie in one component.
//! 3. Produce the edge orderings (all permutations up to 8 edges, sorted and
//!    sampled orderings above).
//! 4. For each node as start and each ordering, build the greedy closed walk
//!    and keep the shortest. Orderings that cannot be completed are skipped.
//!
//! # Complexity
//!
//! O(V · k · (E + L)) where k is the number of orderings (at most 8! = 40320)
//! and L the walk length, plus O(V · (V + E) log V) for the path table.

use log::{debug, trace, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::construction::WalkBuilder;
use crate::distance::PathTable;
use crate::error::{EngineError, InvalidInput, Result};
use crate::models::{Graph, NodeId, Walk};
use crate::ordering::{edge_orders, EdgeOrders, SearchStrategy, EXHAUSTIVE_LIMIT};

use super::config::{OptimizerConfig, MAX_EDGES, MIN_EDGES};

/// Outcome of a successful optimization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    /// Shortest closed walk found.
    pub walk: Walk,
    /// Node the walk starts and ends at.
    pub start: NodeId,
    /// How the edge orderings were produced.
    pub strategy: SearchStrategy,
    /// Number of (start node, ordering) pairs tried.
    pub attempts: usize,
    /// Attempts abandoned because an edge or the start was unreachable.
    pub abandoned: usize,
}

/// Best walk and counters for the attempts from one start node.
#[derive(Debug, Default)]
struct StartOutcome {
    best: Option<Walk>,
    attempts: usize,
    abandoned: usize,
}

/// Route-inspection optimizer.
///
/// Holds only configuration; every call to [`run`](Self::run) is
/// independent.
///
/// # Examples
///
/// ```
/// use u_postman::models::{Edge, Graph, Node};
/// use u_postman::optimizer::{Optimizer, OptimizerConfig};
/// use u_postman::ordering::SearchStrategy;
///
/// let graph = Graph::new(
///     vec![Node::new(0, 0.0, 0.0), Node::new(1, 1.0, 0.0), Node::new(2, 2.0, 0.0)],
///     vec![Edge::new(0, 0, 1, 1.0), Edge::new(1, 1, 2, 1.0)],
/// )
/// .unwrap();
///
/// let solution = Optimizer::new(OptimizerConfig::default()).run(&graph).unwrap();
/// assert!((solution.walk.distance() - 4.0).abs() < 1e-10);
/// assert_eq!(solution.strategy, SearchStrategy::Exhaustive);
/// assert_eq!(solution.attempts, 6); // 3 starts × 2 orderings
/// ```
#[derive(Debug, Clone, Default)]
pub struct Optimizer {
    config: OptimizerConfig,
}

impl Optimizer {
    /// Creates an optimizer with the given configuration.
    pub fn new(config: OptimizerConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// Finds the shortest closed walk covering every edge of `graph`.
    ///
    /// Random orderings (above the exhaustive limit) are drawn from a
    /// generator seeded by the configured seed, or from the operating system
    /// if none is set.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidInput`] if the edge count is outside `[1, 12]`.
    /// - [`EngineError::NoSolution`] if no start node and ordering complete a
    ///   closed walk (e.g. the edges lie in different components).
    pub fn run(&self, graph: &Graph) -> Result<Solution> {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        self.run_with_rng(graph, &mut rng)
    }

    /// Like [`run`](Self::run), drawing random orderings from `rng` instead
    /// of the configured seed.
    pub fn run_with_rng<R: Rng>(&self, graph: &Graph, rng: &mut R) -> Result<Solution> {
        let count = graph.edge_count();
        if !(MIN_EDGES..=MAX_EDGES).contains(&count) {
            return Err(InvalidInput::EdgeCount {
                count,
                min: MIN_EDGES,
                max: MAX_EDGES,
            }
            .into());
        }

        let table = PathTable::new(graph);
        let endpoints: Vec<usize> = graph
            .edges()
            .iter()
            .flat_map(|e| [e.a(), e.b()])
            .filter_map(|id| graph.node_index(id))
            .collect();
        if !table.connects_all(&endpoints) {
            warn!("optimize: edges span more than one component");
            return Err(EngineError::NoSolution);
        }

        let orders = edge_orders(
            graph.edges(),
            self.config.exhaustive_limit.min(EXHAUSTIVE_LIMIT),
            self.config.random_samples,
            rng,
        );
        let strategy = orders.strategy();
        debug!(
            "optimize: start nodes={} edges={count} strategy={strategy:?}",
            graph.node_count()
        );

        let builder = WalkBuilder::new(graph, &table);
        let outcomes = search_all_starts(&builder, graph.node_count(), &orders);

        let mut best: Option<Walk> = None;
        let mut attempts = 0;
        let mut abandoned = 0;
        for outcome in outcomes {
            attempts += outcome.attempts;
            abandoned += outcome.abandoned;
            if let Some(walk) = outcome.best {
                if best.as_ref().is_none_or(|b| walk.distance() < b.distance()) {
                    trace!(
                        "optimize: new best distance={:.3} from start={:?}",
                        walk.distance(),
                        walk.start()
                    );
                    best = Some(walk);
                }
            }
        }

        let Some(walk) = best else {
            warn!("optimize: no closed walk after {attempts} attempts ({abandoned} abandoned)");
            return Err(EngineError::NoSolution);
        };
        let start = walk.start().ok_or(EngineError::NoSolution)?;

        debug!(
            "optimize: done distance={:.3} start={start} attempts={attempts} abandoned={abandoned}",
            walk.distance()
        );
        Ok(Solution {
            walk,
            start,
            strategy,
            attempts,
            abandoned,
        })
    }
}

/// Evaluates every ordering from one start node.
fn search_from(builder: &WalkBuilder<'_>, start: usize, orders: EdgeOrders) -> StartOutcome {
    let mut outcome = StartOutcome::default();
    for order in orders {
        outcome.attempts += 1;
        match builder.build(start, &order) {
            Some(walk) => {
                if outcome
                    .best
                    .as_ref()
                    .is_none_or(|b| walk.distance() < b.distance())
                {
                    outcome.best = Some(walk);
                }
            }
            None => outcome.abandoned += 1,
        }
    }
    outcome
}

/// Per-start outcomes, in node-index order.
#[cfg(not(feature = "parallel"))]
fn search_all_starts(
    builder: &WalkBuilder<'_>,
    node_count: usize,
    orders: &EdgeOrders,
) -> Vec<StartOutcome> {
    (0..node_count)
        .map(|start| search_from(builder, start, orders.clone()))
        .collect()
}

/// Per-start outcomes, in node-index order, computed in parallel.
#[cfg(feature = "parallel")]
fn search_all_starts(
    builder: &WalkBuilder<'_>,
    node_count: usize,
    orders: &EdgeOrders,
) -> Vec<StartOutcome> {
    use rayon::prelude::*;

    (0..node_count)
        .into_par_iter()
        .map(|start| search_from(builder, start, orders.clone()))
        .collect()
}

/// Finds the shortest closed walk covering every edge of `graph` with the
/// default configuration.
///
/// # Examples
///
/// ```
/// use u_postman::models::{Edge, Graph, Node};
/// use u_postman::optimize;
///
/// let graph = Graph::new(
///     vec![Node::new(0, 0.0, 0.0), Node::new(1, 5.0, 0.0)],
///     vec![Edge::new(0, 0, 1, 5.0)],
/// )
/// .unwrap();
/// let walk = optimize(&graph).unwrap();
/// assert_eq!(walk.path(), &[0, 1, 0]);
/// assert_eq!(walk.distance(), 10.0);
/// ```
pub fn optimize(graph: &Graph) -> Result<Walk> {
    Optimizer::default().run(graph).map(|s| s.walk)
}
