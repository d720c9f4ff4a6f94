//! Walk construction from a start node and an edge ordering.

mod walk_builder;

pub use walk_builder::WalkBuilder;
