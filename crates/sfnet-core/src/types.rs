//! Shared types used across the sfnet crates.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Unique identifier for a node in the network.
///
/// Ids are supplied by the caller, must not repeat within one graph, and never
/// change once the node exists: the id is the sole lookup key, so everything
/// hashes and compares through it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u64);

impl From<u64> for NodeId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The centrality measure a graph computes for its nodes.
///
/// Selected once at graph construction. All kinds produce a per-node vector
/// normalized to sum to 1, usable directly as voting weights by the consuming
/// ensemble.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetricKind {
    /// Raw degree over total degree; uniform `1/N` when the graph has no edges.
    Degree,
    /// Brandes' shortest-path betweenness.
    Betweenness,
    /// BFS closeness, `(N-1) / sum of hop distances` per node.
    Closeness,
    /// Power iteration with zero damping.
    Eigenvector,
    /// Power iteration with 0.5 damping.
    Pagerank,
}

impl MetricKind {
    /// Every metric kind, in option-string order.
    pub const ALL: [MetricKind; 5] = [
        MetricKind::Degree,
        MetricKind::Betweenness,
        MetricKind::Closeness,
        MetricKind::Eigenvector,
        MetricKind::Pagerank,
    ];

    /// The option-string name of this kind, as ensembles spell it in their
    /// configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricKind::Degree => "Degree",
            MetricKind::Betweenness => "Betweenness",
            MetricKind::Closeness => "Closeness",
            MetricKind::Eigenvector => "Eigenvector",
            MetricKind::Pagerank => "Pagerank",
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown metric name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseMetricKindError(pub String);

impl fmt::Display for ParseMetricKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown centrality metric: {}", self.0)
    }
}

impl std::error::Error for ParseMetricKindError {}

impl FromStr for MetricKind {
    type Err = ParseMetricKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Degree" => Ok(MetricKind::Degree),
            "Betweenness" => Ok(MetricKind::Betweenness),
            "Closeness" => Ok(MetricKind::Closeness),
            "Eigenvector" => Ok(MetricKind::Eigenvector),
            "Pagerank" => Ok(MetricKind::Pagerank),
            other => Err(ParseMetricKindError(other.to_string())),
        }
    }
}
