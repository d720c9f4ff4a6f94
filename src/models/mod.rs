//! Domain model types for route inspection.
//!
//! Provides the graph the caller draws (nodes with positions and labels,
//! weighted undirected edges), its validated indexed form, and the closed
//! walk the optimizer returns.

mod edge;
mod graph;
mod node;
mod walk;

pub use edge::{Edge, EdgeId};
pub use graph::Graph;
pub use node::{label_for_index, Node, NodeId, Point};
pub use walk::Walk;
