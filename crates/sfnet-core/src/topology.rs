//! Topology — the narrow surface an adaptive ensemble consumes.

use std::collections::{HashMap, HashSet};

use crate::error::Result;
use crate::types::NodeId;

/// The graph interface the consuming ensemble relies on.
///
/// This is a trait rather than a concrete type so that ensembles can swap
/// graph backends without touching their growth/shrink logic. Node payloads
/// (`N`) and edge values (`E`) are opaque to the topology: it stores them,
/// hands them back, and never interprets them.
///
/// Adjacency is undirected: any method taking two ids yields the same result
/// for `(a, b)` and `(b, a)`. Mutators with missing endpoints are silent
/// no-ops; see the implementing type for the full contract of each operation.
pub trait Topology<N, E> {
    /// Add an isolated node. No-op if `id` is already present.
    fn add_node(&mut self, id: NodeId, value: N);

    /// Remove a node and sever all its incident edges. No-op if absent.
    fn remove_node(&mut self, id: NodeId);

    /// Create or replace the undirected edge between `a` and `b`.
    /// No-op unless both endpoints exist.
    fn set_edge(&mut self, a: NodeId, b: NodeId, value: E);

    /// Remove the edge between `a` and `b`, if present.
    fn remove_edge(&mut self, a: NodeId, b: NodeId);

    /// The payload of node `id`.
    fn node(&self, id: NodeId) -> Option<&N>;

    /// Mutable access to the payload of node `id`.
    fn node_mut(&mut self, id: NodeId) -> Option<&mut N>;

    /// All node ids, in no particular order.
    fn node_ids(&self) -> Vec<NodeId>;

    /// Neighbors of `id` with their edge values; empty for an isolated node,
    /// `None` for an unknown id.
    fn neighbors(&self, id: NodeId) -> Option<Vec<(NodeId, &E)>>;

    /// Neighbor ids of `id`; empty for an isolated node, `None` for an
    /// unknown id.
    fn neighbor_ids(&self, id: NodeId) -> Option<Vec<NodeId>>;

    /// The number of neighbors of `id`. Fails with `NodeNotFound` for an
    /// unknown id.
    fn degree(&self, id: NodeId) -> Result<usize>;

    /// The edge value between `a` and `b`, if an edge exists.
    fn edge(&self, a: NodeId, b: NodeId) -> Option<&E>;

    /// Activated edges over possible edges: `edges / (nodes*(nodes-1)/2)`,
    /// `0.0` below 2 nodes.
    fn edge_density(&self) -> f64;

    /// Number of nodes.
    fn node_count(&self) -> usize;

    /// Number of activated edges (see the implementing type for the
    /// counting discipline).
    fn edge_count(&self) -> u64;

    /// Centrality of one node under the selected metric, lazily recomputed.
    fn centrality(&mut self, id: NodeId) -> Result<f64>;

    /// The full per-node centrality vector, lazily recomputed.
    fn centrality_all(&mut self) -> Result<HashMap<NodeId, f64>>;

    /// Weakly connected components, one set of ids per component. Always
    /// computed fresh from current adjacency.
    fn connected_components(&self) -> Vec<HashSet<NodeId>>;
}
