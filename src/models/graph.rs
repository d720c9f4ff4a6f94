//! Validated, indexed inspection graph.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{label_for_index, Edge, EdgeId, Node, NodeId};
use crate::error::InvalidInput;

/// An undirected weighted graph whose edges must all be inspected.
///
/// Construction validates the structure (unique ids, known endpoints,
/// finite non-negative weights) and builds id → index maps and adjacency
/// lists once, so the search never scans the node or edge lists.
///
/// Internally nodes and edges are addressed by their position in the input
/// vectors ("index"); callers work with ids.
///
/// # Examples
///
/// ```
/// use u_postman::models::{Edge, Graph, Node};
///
/// let graph = Graph::new(
///     vec![Node::new(10, 0.0, 0.0), Node::new(20, 3.0, 4.0)],
///     vec![Edge::new(1, 10, 20, 5.0)],
/// )
/// .unwrap();
/// assert_eq!(graph.node_count(), 2);
/// assert_eq!(graph.node_index(20), Some(1));
/// assert_eq!(graph.degree(10), Some(1));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "GraphData", into = "GraphData")]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    node_index: HashMap<NodeId, usize>,
    edge_index: HashMap<EdgeId, usize>,
    /// Per node index: `(neighbor node index, edge index)`.
    adjacency: Vec<Vec<(usize, usize)>>,
}

/// Serialized shape of a [`Graph`]: just the node and edge lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct GraphData {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl TryFrom<GraphData> for Graph {
    type Error = InvalidInput;

    fn try_from(data: GraphData) -> Result<Self, Self::Error> {
        Graph::new(data.nodes, data.edges)
    }
}

impl From<Graph> for GraphData {
    fn from(graph: Graph) -> Self {
        Self {
            nodes: graph.nodes,
            edges: graph.edges,
        }
    }
}

impl Graph {
    /// Builds a graph, rejecting duplicate ids, dangling endpoints,
    /// negative or non-finite weights, and weights large enough for a walk
    /// over them to overflow.
    ///
    /// The edge-count bounds of the optimizer are not checked here.
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Result<Self, InvalidInput> {
        let mut node_index = HashMap::with_capacity(nodes.len());
        for (i, node) in nodes.iter().enumerate() {
            if node_index.insert(node.id(), i).is_some() {
                return Err(InvalidInput::DuplicateNode(node.id()));
            }
        }

        let mut edge_index = HashMap::with_capacity(edges.len());
        let mut adjacency = vec![Vec::new(); nodes.len()];
        for (i, edge) in edges.iter().enumerate() {
            if edge_index.insert(edge.id(), i).is_some() {
                return Err(InvalidInput::DuplicateEdge(edge.id()));
            }
            if !edge.weight().is_finite() || edge.weight() < 0.0 {
                return Err(InvalidInput::InvalidWeight {
                    edge: edge.id(),
                    weight: edge.weight(),
                });
            }
            let lookup = |node: NodeId| {
                node_index
                    .get(&node)
                    .copied()
                    .ok_or(InvalidInput::UnknownNode {
                        edge: edge.id(),
                        node,
                    })
            };
            let a = lookup(edge.a())?;
            let b = lookup(edge.b())?;
            adjacency[a].push((b, i));
            if a != b {
                adjacency[b].push((a, i));
            }
        }

        // A walk stitches at most one shortest path (itself no longer than all
        // weights together) before each edge and one after the last, so its
        // length is bounded by (edges + 2) * total.
        let total: f64 = edges.iter().map(Edge::weight).sum();
        if !(total * (edges.len() + 2) as f64).is_finite() {
            return Err(InvalidInput::WeightOverflow { total });
        }

        Ok(Self {
            nodes,
            edges,
            node_index,
            edge_index,
            adjacency,
        })
    }

    /// Gives every unlabeled node a spreadsheet-style label derived from its
    /// position in the node list (`A`, `B`, ..., `AA`, ...).
    pub fn with_default_labels(mut self) -> Self {
        for (i, node) in self.nodes.iter_mut().enumerate() {
            if node.label().is_empty() {
                *node = node.clone().with_label(label_for_index(i));
            }
        }
        self
    }

    /// All nodes, in input order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All edges, in input order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Looks up a node by id.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.node_index.get(&id).map(|&i| &self.nodes[i])
    }

    /// Looks up an edge by id.
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edge_index.get(&id).map(|&i| &self.edges[i])
    }

    /// Index of the node with the given id.
    pub fn node_index(&self, id: NodeId) -> Option<usize> {
        self.node_index.get(&id).copied()
    }

    /// Id of the node at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn node_id(&self, index: usize) -> NodeId {
        self.nodes[index].id()
    }

    /// Edge at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn edge_at(&self, index: usize) -> &Edge {
        &self.edges[index]
    }

    /// Incident `(neighbor index, edge index)` pairs of the node at `index`.
    ///
    /// A self-loop appears once, with the node as its own neighbor.
    pub fn neighbors(&self, index: usize) -> &[(usize, usize)] {
        &self.adjacency[index]
    }

    /// Number of edge ends at the node, counting a self-loop twice.
    pub fn degree(&self, id: NodeId) -> Option<usize> {
        let index = self.node_index(id)?;
        Some(
            self.adjacency[index]
                .iter()
                .map(|&(n, _)| if n == index { 2 } else { 1 })
                .sum(),
        )
    }

    /// Sum of all edge weights: the length of any walk that traverses each
    /// edge exactly once.
    pub fn total_weight(&self) -> f64 {
        self.edges.iter().map(Edge::weight).sum()
    }

    /// Builds an edge between two existing nodes weighted by the Euclidean
    /// distance of their positions.
    ///
    /// Returns `None` if either node id is unknown. The graph itself is not
    /// modified.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_postman::models::{Graph, Node};
    ///
    /// let graph = Graph::new(
    ///     vec![Node::new(0, 0.0, 0.0), Node::new(1, 10.0, 10.0)],
    ///     vec![],
    /// )
    /// .unwrap();
    /// let edge = graph.euclidean_edge(0, 0, 1).unwrap();
    /// assert!((edge.weight() - 200f64.sqrt()).abs() < 1e-10);
    /// ```
    pub fn euclidean_edge(&self, id: EdgeId, a: NodeId, b: NodeId) -> Option<Edge> {
        let from = self.node(a)?;
        let to = self.node(b)?;
        Some(Edge::new(id, a, b, from.distance_to(to)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Graph {
        Graph::new(
            vec![
                Node::new(1, 0.0, 0.0),
                Node::new(2, 10.0, 0.0),
                Node::new(3, 10.0, 10.0),
            ],
            vec![
                Edge::new(0, 1, 2, 10.0),
                Edge::new(1, 2, 3, 10.0),
                Edge::new(2, 1, 3, 200f64.sqrt()),
            ],
        )
        .expect("valid graph")
    }

    #[test]
    fn test_indexing() {
        let g = triangle();
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.node_index(3), Some(2));
        assert_eq!(g.node_id(0), 1);
        assert_eq!(g.edge(1).map(Edge::endpoints), Some((2, 3)));
        assert!(g.node(99).is_none());
        assert!(g.edge(99).is_none());
    }

    #[test]
    fn test_adjacency() {
        let g = triangle();
        let mut n: Vec<usize> = g.neighbors(0).iter().map(|&(v, _)| v).collect();
        n.sort_unstable();
        assert_eq!(n, vec![1, 2]);
        assert_eq!(g.degree(1), Some(2));
        assert_eq!(g.degree(42), None);
    }

    #[test]
    fn test_self_loop_degree() {
        let g = Graph::new(vec![Node::new(0, 0.0, 0.0)], vec![Edge::new(0, 0, 0, 1.0)])
            .expect("valid graph");
        assert_eq!(g.neighbors(0), &[(0, 0)]);
        assert_eq!(g.degree(0), Some(2));
    }

    #[test]
    fn test_unknown_node_rejected() {
        let err = Graph::new(vec![Node::new(0, 0.0, 0.0)], vec![Edge::new(5, 0, 1, 1.0)])
            .unwrap_err();
        assert_eq!(err, InvalidInput::UnknownNode { edge: 5, node: 1 });
    }

    #[test]
    fn test_negative_weight_rejected() {
        let nodes = vec![Node::new(0, 0.0, 0.0), Node::new(1, 1.0, 0.0)];
        let err = Graph::new(nodes.clone(), vec![Edge::new(0, 0, 1, -1.0)]).unwrap_err();
        assert!(matches!(err, InvalidInput::InvalidWeight { edge: 0, .. }));
        let err = Graph::new(nodes, vec![Edge::new(0, 0, 1, f64::NAN)]).unwrap_err();
        assert!(matches!(err, InvalidInput::InvalidWeight { edge: 0, .. }));
    }

    #[test]
    fn test_huge_weights_rejected() {
        let nodes = vec![
            Node::new(0, 0.0, 0.0),
            Node::new(1, 1.0, 0.0),
            Node::new(2, 2.0, 0.0),
        ];
        let err = Graph::new(
            nodes.clone(),
            vec![Edge::new(0, 0, 1, 1e308), Edge::new(1, 1, 2, 1e308)],
        )
        .unwrap_err();
        assert!(matches!(err, InvalidInput::WeightOverflow { .. }));

        // Out and back over a single edge already doubles its weight.
        let err = Graph::new(nodes.clone(), vec![Edge::new(0, 0, 1, 1e308)]).unwrap_err();
        assert!(matches!(err, InvalidInput::WeightOverflow { .. }));

        assert!(Graph::new(nodes, vec![Edge::new(0, 0, 1, 1e300)]).is_ok());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let err = Graph::new(vec![Node::new(0, 0.0, 0.0), Node::new(0, 1.0, 0.0)], vec![])
            .unwrap_err();
        assert_eq!(err, InvalidInput::DuplicateNode(0));

        let err = Graph::new(
            vec![Node::new(0, 0.0, 0.0), Node::new(1, 1.0, 0.0)],
            vec![Edge::new(4, 0, 1, 1.0), Edge::new(4, 1, 0, 1.0)],
        )
        .unwrap_err();
        assert_eq!(err, InvalidInput::DuplicateEdge(4));
    }

    #[test]
    fn test_total_weight() {
        let g = triangle();
        assert!((g.total_weight() - (20.0 + 200f64.sqrt())).abs() < 1e-10);
    }

    #[test]
    fn test_default_labels_keep_existing() {
        let g = Graph::new(
            vec![
                Node::new(5, 0.0, 0.0),
                Node::new(6, 1.0, 0.0).with_label("depot"),
                Node::new(7, 2.0, 0.0),
            ],
            vec![],
        )
        .expect("valid graph")
        .with_default_labels();
        let labels: Vec<&str> = g.nodes().iter().map(Node::label).collect();
        assert_eq!(labels, vec!["A", "depot", "C"]);
    }

    #[test]
    fn test_euclidean_edge_unknown_node() {
        let g = triangle();
        assert!(g.euclidean_edge(9, 1, 42).is_none());
        let e = g.euclidean_edge(9, 1, 2).expect("known nodes");
        assert!((e.weight() - 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_serde_validates() {
        let g = triangle();
        let json = serde_json::to_string(&g).expect("serialize");
        let back: Graph = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.edges(), g.edges());
        assert_eq!(back.node_index(3), Some(2));

        let dangling = r#"{"nodes":[{"id":0,"position":{"x":0.0,"y":0.0}}],
            "edges":[{"id":0,"a":0,"b":1,"weight":1.0}]}"#;
        assert!(serde_json::from_str::<Graph>(dangling).is_err());
    }
}
