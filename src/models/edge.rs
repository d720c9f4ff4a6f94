//! Undirected weighted edge type.

use serde::{Deserialize, Serialize};

use super::NodeId;

/// Identifier of an edge, assigned by the caller.
pub type EdgeId = u32;

/// An undirected route between two nodes that must be inspected.
///
/// Self-loops (`a == b`) are legal. The weight must be finite and
/// non-negative; [`Graph::new`](super::Graph::new) rejects anything else.
///
/// # Examples
///
/// ```
/// use u_postman::models::Edge;
///
/// let e = Edge::new(0, 1, 2, 10.0);
/// assert_eq!(e.endpoints(), (1, 2));
/// assert_eq!(e.other(1), Some(2));
/// assert_eq!(e.other(5), None);
/// assert!(e.connects(2, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    id: EdgeId,
    a: NodeId,
    b: NodeId,
    weight: f64,
}

impl Edge {
    /// Creates an edge between `a` and `b`.
    pub fn new(id: EdgeId, a: NodeId, b: NodeId, weight: f64) -> Self {
        Self { id, a, b, weight }
    }

    /// Edge identifier.
    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// First endpoint.
    pub fn a(&self) -> NodeId {
        self.a
    }

    /// Second endpoint.
    pub fn b(&self) -> NodeId {
        self.b
    }

    /// Both endpoints as `(a, b)`.
    pub fn endpoints(&self) -> (NodeId, NodeId) {
        (self.a, self.b)
    }

    /// Traversal distance.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Returns `true` if this edge starts and ends at the same node.
    pub fn is_loop(&self) -> bool {
        self.a == self.b
    }

    /// Returns `true` if `node` is one of the endpoints.
    pub fn touches(&self, node: NodeId) -> bool {
        self.a == node || self.b == node
    }

    /// Returns `true` if this edge joins `u` and `v` in either direction.
    pub fn connects(&self, u: NodeId, v: NodeId) -> bool {
        (self.a == u && self.b == v) || (self.a == v && self.b == u)
    }

    /// The endpoint opposite to `node`, or `None` if `node` is not an endpoint.
    pub fn other(&self, node: NodeId) -> Option<NodeId> {
        if node == self.a {
            Some(self.b)
        } else if node == self.b {
            Some(self.a)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_accessors() {
        let e = Edge::new(3, 4, 5, 2.5);
        assert_eq!(e.id(), 3);
        assert_eq!(e.a(), 4);
        assert_eq!(e.b(), 5);
        assert_eq!(e.weight(), 2.5);
        assert!(!e.is_loop());
    }

    #[test]
    fn test_edge_is_undirected() {
        let e = Edge::new(0, 1, 2, 1.0);
        assert!(e.connects(1, 2));
        assert!(e.connects(2, 1));
        assert!(!e.connects(1, 3));
        assert_eq!(e.other(2), Some(1));
    }

    #[test]
    fn test_self_loop() {
        let e = Edge::new(0, 7, 7, 4.0);
        assert!(e.is_loop());
        assert!(e.touches(7));
        assert_eq!(e.other(7), Some(7));
        assert!(e.connects(7, 7));
    }
}
