//! Greedy closed-walk construction for one start node and one edge ordering.
//!
//! # Algorithm
//!
//! Starting from the start node, take the edges in the given order. When the
//! current position is not on the next edge, travel along a shortest path to
//! its nearer reachable endpoint first. Traverse the edge, then continue from
//! its far endpoint. After the last edge, return to the start node along a
//! shortest path.
//!
//! # Complexity
//!
//! O(E + L) per ordering with a precomputed [`PathTable`], where L is the
//! length of the resulting walk.

use crate::distance::PathTable;
use crate::models::{Graph, NodeId, Walk};

/// Builds closed walks over a fixed graph.
///
/// # Examples
///
/// ```
/// use u_postman::models::{Edge, Graph, Node};
/// use u_postman::distance::PathTable;
/// use u_postman::construction::WalkBuilder;
///
/// let graph = Graph::new(
///     vec![Node::new(0, 0.0, 0.0), Node::new(1, 1.0, 0.0), Node::new(2, 2.0, 0.0)],
///     vec![Edge::new(0, 0, 1, 1.0), Edge::new(1, 1, 2, 1.0)],
/// )
/// .unwrap();
/// let table = PathTable::new(&graph);
/// let builder = WalkBuilder::new(&graph, &table);
///
/// let walk = builder.build_from(0, &[0, 1]).unwrap();
/// assert_eq!(walk.path(), &[0, 1, 2, 1, 0]);
/// assert!((walk.distance() - 4.0).abs() < 1e-10);
/// ```
pub struct WalkBuilder<'a> {
    graph: &'a Graph,
    table: &'a PathTable,
}

impl<'a> WalkBuilder<'a> {
    /// Creates a builder. `table` must have been computed from `graph`.
    pub fn new(graph: &'a Graph, table: &'a PathTable) -> Self {
        Self { graph, table }
    }

    /// Builds the closed walk from the node with id `start`.
    ///
    /// Returns `None` if `start` is unknown or the ordering cannot be
    /// completed (see [`build`](Self::build)).
    pub fn build_from(&self, start: NodeId, order: &[usize]) -> Option<Walk> {
        let index = self.graph.node_index(start)?;
        self.build(index, order)
    }

    /// Builds the closed walk that starts at node index `start` and covers the
    /// edges (by index) in `order`.
    ///
    /// Edges already covered are skipped. Returns `None` when neither
    /// endpoint of some edge, or the start node at the end, is reachable from
    /// the current position.
    ///
    /// # Panics
    ///
    /// Panics if `start` or an edge index is out of bounds.
    pub fn build(&self, start: usize, order: &[usize]) -> Option<Walk> {
        let mut covered = vec![false; self.graph.edge_count()];
        let mut path = vec![start];
        let mut distance = 0.0;
        let mut current = start;

        for &e in order {
            if covered[e] {
                continue;
            }
            let edge = self.graph.edge_at(e);
            let a = self.graph.node_index(edge.a())?;
            let b = self.graph.node_index(edge.b())?;

            if current != a && current != b {
                let to_a = self.table.distance(current, a);
                let to_b = self.table.distance(current, b);
                let entry = match (to_a, to_b) {
                    (Some(da), Some(db)) => {
                        if db < da {
                            b
                        } else {
                            a
                        }
                    }
                    (Some(_), None) => a,
                    (None, Some(_)) => b,
                    (None, None) => return None,
                };
                distance += self.travel(current, entry, &mut path)?;
                current = entry;
            }

            let far = if current == a { b } else { a };
            distance += edge.weight();
            covered[e] = true;
            path.push(far);
            current = far;
        }

        distance += self.travel(current, start, &mut path)?;

        let ids = path.into_iter().map(|i| self.graph.node_id(i)).collect();
        Some(Walk::new(ids, distance))
    }

    /// Appends the shortest path from `from` to `to` (excluding `from`) and
    /// returns its length.
    fn travel(&self, from: usize, to: usize, path: &mut Vec<usize>) -> Option<f64> {
        let d = self.table.distance(from, to)?;
        if from != to {
            let hops = self.table.path(from, to)?;
            path.extend_from_slice(&hops[1..]);
        }
        Some(d)
    }
}
