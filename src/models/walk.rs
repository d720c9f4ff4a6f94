//! Closed walk output type.

use serde::{Deserialize, Serialize};

use super::{Graph, NodeId};

/// An ordered sequence of node ids and its total distance.
///
/// Produced by the optimizer; repeated traversals through connecting
/// shortest paths are included in the sequence.
///
/// # Examples
///
/// ```
/// use u_postman::models::Walk;
///
/// let walk = Walk::new(vec![1, 2, 1], 20.0);
/// assert!(walk.is_closed());
/// assert_eq!(walk.start(), Some(1));
/// assert_eq!(walk.traversed_pairs().count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Walk {
    path: Vec<NodeId>,
    distance: f64,
}

impl Walk {
    /// Creates a walk from a node sequence and its total distance.
    pub fn new(path: Vec<NodeId>, distance: f64) -> Self {
        Self { path, distance }
    }

    /// Node ids in traversal order.
    pub fn path(&self) -> &[NodeId] {
        &self.path
    }

    /// Consumes the walk, returning the node sequence.
    pub fn into_path(self) -> Vec<NodeId> {
        self.path
    }

    /// Total distance travelled.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Number of nodes in the sequence (including the repeated end node).
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Returns `true` if the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// First node of the walk.
    pub fn start(&self) -> Option<NodeId> {
        self.path.first().copied()
    }

    /// Returns `true` if the walk is non-empty and ends where it started.
    pub fn is_closed(&self) -> bool {
        !self.path.is_empty() && self.path.first() == self.path.last()
    }

    /// Consecutive `(from, to)` node pairs, one per hop.
    pub fn traversed_pairs(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.path.windows(2).map(|w| (w[0], w[1]))
    }

    /// Returns `true` if every edge of `graph` matches at least one hop.
    ///
    /// Hops are matched against edges as unordered endpoint pairs, so one hop
    /// between two nodes satisfies every parallel edge joining them.
    pub fn covers(&self, graph: &Graph) -> bool {
        graph
            .edges()
            .iter()
            .all(|edge| self.traversed_pairs().any(|(u, v)| edge.connects(u, v)))
    }

    /// Display labels of the walk's nodes, or `None` if a node id is not in
    /// `graph`.
    pub fn labels(&self, graph: &Graph) -> Option<Vec<String>> {
        self.path
            .iter()
            .map(|&id| graph.node(id).map(|n| n.label().to_string()))
            .collect()
    }

    /// Distance spent beyond traversing every edge of `graph` exactly once.
    pub fn repeated_distance(&self, graph: &Graph) -> f64 {
        (self.distance - graph.total_weight()).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Edge, Node};

    fn path_graph() -> Graph {
        Graph::new(
            vec![
                Node::new(1, 0.0, 0.0),
                Node::new(2, 1.0, 0.0),
                Node::new(3, 2.0, 0.0),
            ],
            vec![Edge::new(0, 1, 2, 1.0), Edge::new(1, 2, 3, 1.0)],
        )
        .expect("valid graph")
        .with_default_labels()
    }

    #[test]
    fn test_closed_and_covering() {
        let g = path_graph();
        let walk = Walk::new(vec![1, 2, 3, 2, 1], 4.0);
        assert!(walk.is_closed());
        assert!(walk.covers(&g));
        assert_eq!(walk.len(), 5);
        assert!((walk.repeated_distance(&g) - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_not_covering() {
        let g = path_graph();
        let walk = Walk::new(vec![1, 2, 1], 2.0);
        assert!(walk.is_closed());
        assert!(!walk.covers(&g));
    }

    #[test]
    fn test_open_walk() {
        let walk = Walk::new(vec![1, 2, 3], 2.0);
        assert!(!walk.is_closed());
        assert!(!Walk::new(vec![], 0.0).is_closed());
    }

    #[test]
    fn test_labels() {
        let g = path_graph();
        let walk = Walk::new(vec![1, 2, 3, 2, 1], 4.0);
        assert_eq!(
            walk.labels(&g),
            Some(vec!["A", "B", "C", "B", "A"].into_iter().map(String::from).collect())
        );
        assert_eq!(Walk::new(vec![1, 9], 1.0).labels(&g), None);
    }

    #[test]
    fn test_into_path() {
        let walk = Walk::new(vec![4, 5, 4], 2.0);
        assert_eq!(walk.into_path(), vec![4, 5, 4]);
    }
}
