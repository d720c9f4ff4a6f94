//! # u-postman
//!
//! Route inspection for small drawn graphs: finds a short closed walk that
//! traverses every edge at least once, by trying every start node against
//! every edge ordering (all permutations up to 8 edges, sampled orderings up
//! to 12) and stitching edges together along shortest paths.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Node, Edge, Graph, Walk)
//! - [`distance`] — Dijkstra shortest paths and the all-pairs path table
//! - [`ordering`] — Candidate edge orderings (permutations, heuristic samples)
//! - [`construction`] — Greedy closed-walk builder
//! - [`optimizer`] — Search driver and configuration
//! - [`error`] — Validation and search errors
//!
//! ## Example
//!
//! ```
//! use u_postman::models::{Graph, Node};
//! use u_postman::optimize;
//!
//! let nodes = vec![
//!     Node::new(0, 0.0, 0.0),
//!     Node::new(1, 10.0, 0.0),
//!     Node::new(2, 10.0, 10.0),
//! ];
//! let draft = Graph::new(nodes.clone(), vec![]).unwrap();
//! let edges = vec![
//!     draft.euclidean_edge(0, 0, 1).unwrap(),
//!     draft.euclidean_edge(1, 1, 2).unwrap(),
//!     draft.euclidean_edge(2, 0, 2).unwrap(),
//! ];
//! let graph = Graph::new(nodes, edges).unwrap().with_default_labels();
//!
//! let walk = optimize(&graph).unwrap();
//! assert!(walk.is_closed());
//! assert!(walk.covers(&graph));
//! assert!((walk.distance() - 34.142).abs() < 1e-3);
//! let labels = walk.labels(&graph).unwrap();
//! assert_eq!(labels.len(), 4);
//! assert_eq!(labels.first(), labels.last());
//! ```

pub mod construction;
pub mod distance;
pub mod error;
pub mod models;
pub mod optimizer;
pub mod ordering;

pub use error::{EngineError, InvalidInput, Result};
pub use optimizer::optimize;
