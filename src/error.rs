//! Error types for graph validation and optimization.

use thiserror::Error;

use crate::models::{EdgeId, NodeId};

/// A structural problem with the input graph, detected before any search.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInput {
    /// The graph has fewer than one or more than the maximum number of edges.
    #[error("edge count {count} is outside the supported range [{min}, {max}]")]
    EdgeCount {
        /// Number of edges supplied.
        count: usize,
        /// Smallest accepted edge count.
        min: usize,
        /// Largest accepted edge count.
        max: usize,
    },
    /// An edge references a node id that is not in the node set.
    #[error("edge {edge} references unknown node {node}")]
    UnknownNode {
        /// Offending edge.
        edge: EdgeId,
        /// Missing node.
        node: NodeId,
    },
    /// An edge weight is negative, NaN or infinite.
    #[error("edge {edge} has invalid weight {weight}")]
    InvalidWeight {
        /// Offending edge.
        edge: EdgeId,
        /// The rejected weight.
        weight: f64,
    },
    /// Edge weights are so large that walk lengths could overflow `f64`.
    #[error("edge weights sum to {total}, too large for walk distances to stay finite")]
    WeightOverflow {
        /// Sum of all edge weights.
        total: f64,
    },
    /// Two nodes share the same id.
    #[error("duplicate node id {0}")]
    DuplicateNode(NodeId),
    /// Two edges share the same id.
    #[error("duplicate edge id {0}")]
    DuplicateEdge(EdgeId),
}

/// Failure of an optimization call.
///
/// `NoSolution` is a distinct outcome from `InvalidInput`: the graph was
/// well-formed, but no start node and edge ordering produced a closed walk.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// The graph was rejected before the search started.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),
    /// Every candidate (start node, edge ordering) pair was abandoned.
    #[error("no closed walk covers every edge")]
    NoSolution,
}

/// Result alias for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_converts() {
        let err: EngineError = InvalidInput::DuplicateNode(3).into();
        assert_eq!(err, EngineError::InvalidInput(InvalidInput::DuplicateNode(3)));
    }

    #[test]
    fn test_display_messages() {
        let err = EngineError::from(InvalidInput::EdgeCount {
            count: 13,
            min: 1,
            max: 12,
        });
        assert_eq!(
            err.to_string(),
            "invalid input: edge count 13 is outside the supported range [1, 12]"
        );
        let err = InvalidInput::UnknownNode { edge: 4, node: 9 };
        assert_eq!(err.to_string(), "edge 4 references unknown node 9");
        assert_eq!(
            EngineError::NoSolution.to_string(),
            "no closed walk covers every edge"
        );
    }
}
