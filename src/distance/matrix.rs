//! All-pairs shortest-path table.

use crate::models::Graph;

use super::dijkstra::{single_source, trace_back};

/// Dense n×n shortest-path distances and predecessors, stored row-major
/// by node index.
///
/// Built once per optimization call by running Dijkstra from every node,
/// so the walk builder answers "how do I get from here to that edge" by
/// lookup instead of re-running the search for every ordering.
///
/// # Examples
///
/// ```
/// use u_postman::models::{Edge, Graph, Node};
/// use u_postman::distance::PathTable;
///
/// let graph = Graph::new(
///     vec![Node::new(0, 0.0, 0.0), Node::new(1, 3.0, 4.0), Node::new(2, 6.0, 8.0)],
///     vec![Edge::new(0, 0, 1, 5.0), Edge::new(1, 1, 2, 5.0)],
/// )
/// .unwrap();
/// let table = PathTable::new(&graph);
/// assert_eq!(table.distance(0, 2), Some(10.0));
/// assert_eq!(table.path(2, 0), Some(vec![2, 1, 0]));
/// assert_eq!(table.size(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct PathTable {
    dist: Vec<f64>,
    prev: Vec<Option<usize>>,
    size: usize,
}

impl PathTable {
    /// Computes shortest paths between every pair of nodes of `graph`.
    pub fn new(graph: &Graph) -> Self {
        let size = graph.node_count();
        let mut dist = Vec::with_capacity(size * size);
        let mut prev = Vec::with_capacity(size * size);
        for source in 0..size {
            let (row_dist, row_prev) = single_source(graph, source);
            dist.extend(row_dist);
            prev.extend(row_prev);
        }
        Self { dist, prev, size }
    }

    /// Number of nodes covered by this table.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Shortest distance between two node indices, or `None` if unreachable.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn distance(&self, from: usize, to: usize) -> Option<f64> {
        let d = self.dist[from * self.size + to];
        d.is_finite().then_some(d)
    }

    /// Node indices of a shortest path from `from` to `to`, both included.
    ///
    /// Returns `None` if `to` is unreachable from `from`.
    pub fn path(&self, from: usize, to: usize) -> Option<Vec<usize>> {
        self.distance(from, to)?;
        let row = &self.prev[from * self.size..(from + 1) * self.size];
        Some(trace_back(row, to))
    }

    /// Returns `true` if the given node indices are mutually reachable.
    ///
    /// # Panics
    ///
    /// Panics if an index is out of bounds.
    pub fn connects_all(&self, nodes: &[usize]) -> bool {
        match nodes.split_first() {
            Some((&first, rest)) => rest.iter().all(|&n| self.distance(first, n).is_some()),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Edge, Node};

    fn two_components() -> Graph {
        Graph::new(
            vec![
                Node::new(10, 0.0, 0.0),
                Node::new(11, 1.0, 0.0),
                Node::new(12, 2.0, 0.0),
                Node::new(20, 9.0, 9.0),
            ],
            vec![
                Edge::new(0, 10, 11, 1.0),
                Edge::new(1, 11, 12, 2.0),
                Edge::new(2, 20, 20, 1.0),
            ],
        )
        .expect("valid graph")
    }

    #[test]
    fn test_distances() {
        let table = PathTable::new(&two_components());
        assert_eq!(table.distance(0, 0), Some(0.0));
        assert_eq!(table.distance(0, 2), Some(3.0));
        assert_eq!(table.distance(2, 0), Some(3.0));
        assert_eq!(table.distance(0, 3), None);
    }

    #[test]
    fn test_paths() {
        let table = PathTable::new(&two_components());
        assert_eq!(table.path(0, 2), Some(vec![0, 1, 2]));
        assert_eq!(table.path(1, 1), Some(vec![1]));
        assert_eq!(table.path(3, 0), None);
    }

    #[test]
    fn test_connectivity() {
        let table = PathTable::new(&two_components());
        assert!(table.connects_all(&[0, 1, 2]));
        assert!(table.connects_all(&[3]));
        assert!(!table.connects_all(&[0, 3]));
        assert!(!table.connects_all(&[2, 1, 3]));
    }

    #[test]
    fn test_empty_graph() {
        let g = Graph::new(vec![], vec![]).expect("valid graph");
        let table = PathTable::new(&g);
        assert_eq!(table.size(), 0);
        assert!(table.connects_all(&[]));
    }
}
