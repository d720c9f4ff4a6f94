//! Candidate edge orderings for the walk builder.
//!
//! - [`Permutations`] — every ordering, produced lazily (small edge sets)
//! - [`heuristic_orders`] — weight-sorted and random samples (large edge sets)
//! - [`edge_orders`] — picks the strategy for an edge set

mod heuristic;
mod permutations;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::Edge;

pub use heuristic::heuristic_orders;
pub use permutations::{factorial, Permutations};

/// Largest edge count searched over every permutation (8! = 40320 orderings
/// per start node).
pub const EXHAUSTIVE_LIMIT: usize = 8;

/// Number of random shuffles sampled above the exhaustive limit.
pub const RANDOM_SAMPLES: usize = 10;

/// How candidate orderings are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchStrategy {
    /// Every permutation of the edges; the result is optimal over orderings.
    Exhaustive,
    /// Two weight-sorted orderings plus random samples; best effort.
    Heuristic,
}

/// Sequence of edge orderings, each a list of edge indices containing every
/// edge exactly once.
///
/// Cloning an unconsumed value restarts the same sequence, which is how the
/// optimizer replays it for every start node.
#[derive(Debug, Clone)]
pub enum EdgeOrders {
    /// Lazily enumerated permutations.
    Exhaustive(Permutations<usize>),
    /// Pre-drawn heuristic samples.
    Heuristic(std::vec::IntoIter<Vec<usize>>),
}

impl EdgeOrders {
    /// Strategy behind this sequence.
    pub fn strategy(&self) -> SearchStrategy {
        match self {
            EdgeOrders::Exhaustive(_) => SearchStrategy::Exhaustive,
            EdgeOrders::Heuristic(_) => SearchStrategy::Heuristic,
        }
    }
}

impl Iterator for EdgeOrders {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        match self {
            EdgeOrders::Exhaustive(p) => p.next(),
            EdgeOrders::Heuristic(h) => h.next(),
        }
    }
}

/// Chooses the orderings to try for `edges`.
///
/// Up to `exhaustive_limit` edges (and always for zero or one edge) every
/// permutation is enumerated and `rng` is untouched. Beyond it, the
/// weight-sorted orderings and `samples` shuffles drawn from `rng` are used.
///
/// # Examples
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use u_postman::models::Edge;
/// use u_postman::ordering::{edge_orders, SearchStrategy};
///
/// let edges: Vec<Edge> = (0..3).map(|i| Edge::new(i, i, i + 1, 1.0)).collect();
/// let mut rng = StdRng::seed_from_u64(0);
/// let orders = edge_orders(&edges, 8, 10, &mut rng);
/// assert_eq!(orders.strategy(), SearchStrategy::Exhaustive);
/// assert_eq!(orders.count(), 6);
/// ```
pub fn edge_orders<R: Rng>(
    edges: &[Edge],
    exhaustive_limit: usize,
    samples: usize,
    rng: &mut R,
) -> EdgeOrders {
    let n = edges.len();
    if n <= 1 || n <= exhaustive_limit {
        EdgeOrders::Exhaustive(Permutations::new((0..n).collect()))
    } else {
        EdgeOrders::Heuristic(heuristic_orders(edges, samples, rng).into_iter())
    }
}
