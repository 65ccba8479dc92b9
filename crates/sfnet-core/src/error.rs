//! Error types for graph operations.
//!
//! Mutation primitives are deliberately permissive and never fail: an
//! ensemble issues speculative edits without guarding every call, so a
//! missing endpoint makes the mutation a silent no-op. Errors are reserved
//! for the few query paths that promise them.

use std::error::Error;
use std::fmt;

use crate::types::NodeId;

/// Result type for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors that can occur on graph query paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Operation addressed a node id that is not in the graph.
    NodeNotFound(NodeId),
    /// Centrality was queried on a graph constructed without a metric kind.
    MetricNotSelected,
    /// Power iteration hit its sweep cap before meeting tolerance.
    DidNotConverge {
        /// Number of sweeps performed before giving up.
        sweeps: usize,
    },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::NodeNotFound(id) => write!(f, "Node not found: {}", id),
            GraphError::MetricNotSelected => {
                write!(f, "No centrality metric selected for this graph")
            }
            GraphError::DidNotConverge { sweeps } => {
                write!(f, "Centrality did not converge after {} sweeps", sweeps)
            }
        }
    }
}

impl Error for GraphError {}

// Convenience constructors
impl GraphError {
    pub fn node_not_found(id: impl Into<NodeId>) -> Self {
        GraphError::NodeNotFound(id.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_missing_node() {
        let err = GraphError::node_not_found(9u64);
        assert_eq!(err.to_string(), "Node not found: 9");
    }

    #[test]
    fn display_reports_the_sweep_cap() {
        let err = GraphError::DidNotConverge { sweeps: 1_000 };
        assert_eq!(
            err.to_string(),
            "Centrality did not converge after 1000 sweeps"
        );
    }
}
