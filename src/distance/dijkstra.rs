//! Single-source Dijkstra over the undirected edge set.
//!
//! # Complexity
//!
//! O((V + E) log V) per source with a binary heap.
//!
//! # Reference
//!
//! Dijkstra, E.W. (1959). "A note on two problems in connexion with graphs",
//! *Numerische Mathematik* 1, 269-271.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::models::{Graph, NodeId};

/// A shortest path between two nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPath {
    /// Node ids from source to target, both included.
    pub nodes: Vec<NodeId>,
    /// Sum of the edge weights along `nodes`.
    pub distance: f64,
}

/// Heap entry ordered so that `BinaryHeap` pops the smallest cost first,
/// then the smallest node index.
#[derive(Debug, Clone, Copy)]
struct State {
    cost: f64,
    node: usize,
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for State {}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Distances and predecessors from one source, indexed by node index.
///
/// Unreachable nodes have distance `f64::INFINITY` and no predecessor.
pub(crate) fn single_source(graph: &Graph, source: usize) -> (Vec<f64>, Vec<Option<usize>>) {
    let n = graph.node_count();
    let mut dist = vec![f64::INFINITY; n];
    let mut prev = vec![None; n];
    let mut heap = BinaryHeap::new();

    dist[source] = 0.0;
    heap.push(State {
        cost: 0.0,
        node: source,
    });

    while let Some(State { cost, node }) = heap.pop() {
        if cost > dist[node] {
            continue;
        }
        for &(next, edge) in graph.neighbors(node) {
            let candidate = cost + graph.edge_at(edge).weight();
            if candidate < dist[next] {
                dist[next] = candidate;
                prev[next] = Some(node);
                heap.push(State {
                    cost: candidate,
                    node: next,
                });
            }
        }
    }

    (dist, prev)
}

/// Walks the predecessor chain back from `target`, returning node indices
/// from the source to `target`.
pub(crate) fn trace_back(prev: &[Option<usize>], target: usize) -> Vec<usize> {
    let mut path = vec![target];
    let mut current = target;
    while let Some(p) = prev[current] {
        path.push(p);
        current = p;
    }
    path.reverse();
    path
}

/// Computes the shortest path between two nodes by id.
///
/// Returns the trivial one-node path when `source == target`, and `None` if
/// either id is unknown or `target` is unreachable. Among parallel edges the
/// lightest is used.
///
/// # Examples
///
/// ```
/// use u_postman::models::{Edge, Graph, Node};
/// use u_postman::distance::shortest_path;
///
/// let graph = Graph::new(
///     vec![Node::new(0, 0.0, 0.0), Node::new(1, 1.0, 0.0), Node::new(2, 2.0, 0.0)],
///     vec![Edge::new(0, 0, 1, 1.0), Edge::new(1, 1, 2, 1.0), Edge::new(2, 0, 2, 5.0)],
/// )
/// .unwrap();
///
/// let sp = shortest_path(&graph, 0, 2).unwrap();
/// assert_eq!(sp.nodes, vec![0, 1, 2]);
/// assert!((sp.distance - 2.0).abs() < 1e-10);
/// ```
pub fn shortest_path(graph: &Graph, source: NodeId, target: NodeId) -> Option<ShortestPath> {
    let s = graph.node_index(source)?;
    let t = graph.node_index(target)?;
    if s == t {
        return Some(ShortestPath {
            nodes: vec![source],
            distance: 0.0,
        });
    }

    let (dist, prev) = single_source(graph, s);
    if !dist[t].is_finite() {
        return None;
    }
    let nodes = trace_back(&prev, t)
        .into_iter()
        .map(|i| graph.node_id(i))
        .collect();
    Some(ShortestPath {
        nodes,
        distance: dist[t],
    })
}
