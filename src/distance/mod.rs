//! Shortest paths over the inspection graph.
//!
//! Provides a single-source Dijkstra query by node id and an all-pairs
//! table used to stitch non-adjacent edges together.

mod dijkstra;
mod matrix;

pub use dijkstra::{shortest_path, ShortestPath};
pub use matrix::PathTable;
