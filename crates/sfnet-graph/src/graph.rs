//! The node arena and its adjacency operations.
//!
//! Nodes live in a single map keyed by their caller-supplied id; each node
//! carries its own `id -> edge value` adjacency map. No node ever owns or
//! references another node, so removal walks ids, never live references.

use std::collections::HashMap;
use std::fmt;

use sfnet_core::error::{GraphError, Result};
use sfnet_core::topology::Topology;
use sfnet_core::types::{MetricKind, NodeId};

/// A node: opaque payload plus its own half of the mirrored adjacency.
pub(crate) struct Node<N, E> {
    pub(crate) value: N,
    pub(crate) neighbors: HashMap<NodeId, E>,
}

/// Cache state for the centrality vector.
///
/// Every topology mutation moves the state to `Dirty`; only a completed
/// metric recomputation moves it back to `Valid`. Nothing else writes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CacheState {
    Valid,
    Dirty,
}

/// Undirected graph over caller-supplied integer ids.
///
/// Any method that takes two ids yields the same result for `(a, b)` and
/// `(b, a)`: edges are unordered, and adjacency entries are mirrored on both
/// endpoints at all times. Node payloads (`N`) and edge values (`E`) are
/// opaque; the graph only touches payloads through `PartialEq` in the
/// convenience lookups.
///
/// Mutators with missing endpoints are silent no-ops, so an ensemble can
/// issue speculative edits without guarding every call. The graph is not
/// internally synchronized: all methods take `&self`/`&mut self` and run to
/// completion, so cross-thread callers must wrap the whole instance in one
/// exclusive lock.
pub struct Graph<N, E> {
    pub(crate) nodes: HashMap<NodeId, Node<N, E>>,
    /// Distinct unordered pairs that ever gained an edge. Monotonic:
    /// `remove_edge`/`remove_node` do not decrement it, so after deletions
    /// this drifts above the live edge count (and `edge_density` with it).
    edge_counter: u64,
    pub(crate) metric: Option<MetricKind>,
    pub(crate) metric_values: HashMap<NodeId, f64>,
    pub(crate) cache: CacheState,
}

impl<N, E> Graph<N, E> {
    /// An empty graph with no metric selected; centrality queries on it
    /// report `MetricNotSelected`.
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            edge_counter: 0,
            metric: None,
            metric_values: HashMap::new(),
            cache: CacheState::Dirty,
        }
    }

    /// An empty graph that will compute `kind` on demand.
    pub fn with_metric(kind: MetricKind) -> Self {
        Self {
            metric: Some(kind),
            ..Self::new()
        }
    }

    /// The metric kind selected at construction, if any.
    pub fn metric_kind(&self) -> Option<MetricKind> {
        self.metric
    }

    // MUTATORS (change the internal state)

    /// Add an isolated node. No-op if `id` is already present: the existing
    /// payload is kept.
    pub fn add_node(&mut self, id: NodeId, value: N) {
        self.nodes.entry(id).or_insert_with(|| Node {
            value,
            neighbors: HashMap::new(),
        });
        self.cache = CacheState::Dirty;
    }

    /// Remove a node, severing all incident edges first. No-op if absent.
    ///
    /// After this returns, no other node's adjacency map mentions `id`.
    pub fn remove_node(&mut self, id: NodeId) {
        if let Some(node) = self.nodes.remove(&id) {
            for neighbor_id in node.neighbors.keys() {
                if let Some(neighbor) = self.nodes.get_mut(neighbor_id) {
                    neighbor.neighbors.remove(&id);
                }
            }
        }
        self.cache = CacheState::Dirty;
    }

    /// Create or replace the undirected edge between `a` and `b`.
    ///
    /// No-op unless both endpoints exist. A fresh pair increments the edge
    /// counter; replacing an existing edge's value does not. `a == b` never
    /// creates anything: a node is not its own neighbor.
    pub fn set_edge(&mut self, a: NodeId, b: NodeId, value: E)
    where
        E: Clone,
    {
        if a == b || !self.nodes.contains_key(&a) || !self.nodes.contains_key(&b) {
            return;
        }
        let created = match self.nodes.get_mut(&a) {
            Some(node) => node.neighbors.insert(b, value.clone()).is_none(),
            None => return,
        };
        if let Some(node) = self.nodes.get_mut(&b) {
            node.neighbors.insert(a, value);
        }
        if created {
            self.edge_counter += 1;
        }
        self.cache = CacheState::Dirty;
    }

    /// Remove the edge between `a` and `b`, if present. No-op unless both
    /// endpoints exist. The edge counter is untouched.
    pub fn remove_edge(&mut self, a: NodeId, b: NodeId) {
        if !self.nodes.contains_key(&a) || !self.nodes.contains_key(&b) {
            return;
        }
        if let Some(node) = self.nodes.get_mut(&a) {
            node.neighbors.remove(&b);
        }
        if let Some(node) = self.nodes.get_mut(&b) {
            node.neighbors.remove(&a);
        }
        self.cache = CacheState::Dirty;
    }

    // ACCESSORS (do not change internal state)

    /// The payload of node `id`.
    pub fn node(&self, id: NodeId) -> Option<&N> {
        self.nodes.get(&id).map(|node| &node.value)
    }

    /// Mutable access to the payload of node `id`.
    ///
    /// Payloads are opaque to every metric, so this does not invalidate the
    /// centrality cache.
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut N> {
        self.nodes.get_mut(&id).map(|node| &mut node.value)
    }

    /// Whether a node with this id exists.
    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// All node ids, in no particular order.
    pub fn node_ids(&self) -> Vec<NodeId> {
        self.nodes.keys().copied().collect()
    }

    /// Neighbors of `id` with their edge values; empty for an isolated node,
    /// `None` for an unknown id.
    pub fn neighbors(&self, id: NodeId) -> Option<Vec<(NodeId, &E)>> {
        self.nodes
            .get(&id)
            .map(|node| node.neighbors.iter().map(|(&nid, e)| (nid, e)).collect())
    }

    /// Neighbor ids of `id`; empty for an isolated node, `None` for an
    /// unknown id.
    pub fn neighbor_ids(&self, id: NodeId) -> Option<Vec<NodeId>> {
        self.nodes
            .get(&id)
            .map(|node| node.neighbors.keys().copied().collect())
    }

    /// The number of neighbors of `id`. The one accessor that fails on an
    /// unknown id instead of returning an absence.
    pub fn degree(&self, id: NodeId) -> Result<usize> {
        self.nodes
            .get(&id)
            .map(|node| node.neighbors.len())
            .ok_or(GraphError::NodeNotFound(id))
    }

    /// The edge value between `a` and `b`, if an edge exists.
    pub fn edge(&self, a: NodeId, b: NodeId) -> Option<&E> {
        self.nodes.get(&a).and_then(|node| node.neighbors.get(&b))
    }

    /// Whether an edge exists between `a` and `b`.
    pub fn is_neighbor(&self, a: NodeId, b: NodeId) -> bool {
        self.edge(a, b).is_some()
    }

    /// Every live edge once per unordered pair, as `(low id, high id, value)`.
    pub fn edges(&self) -> Vec<(NodeId, NodeId, &E)> {
        let mut edges = Vec::new();
        for (&a, node) in &self.nodes {
            for (&b, value) in &node.neighbors {
                if a < b {
                    edges.push((a, b, value));
                }
            }
        }
        edges
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of activated edges. Monotonic: see the counting discipline on
    /// the struct field.
    pub fn edge_count(&self) -> u64 {
        self.edge_counter
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Activated edges over possible edges: `edges / (nodes*(nodes-1)/2)`,
    /// `0.0` below 2 nodes.
    pub fn edge_density(&self) -> f64 {
        if self.nodes.len() < 2 {
            return 0.0;
        }
        let n = self.nodes.len() as f64;
        self.edge_counter as f64 / (n * (n - 1.0) / 2.0)
    }

    /// The id of the first node whose payload equals `value`.
    pub fn find_node(&self, value: &N) -> Option<NodeId>
    where
        N: PartialEq,
    {
        self.nodes
            .iter()
            .find(|(_, node)| node.value == *value)
            .map(|(&id, _)| id)
    }

    /// Whether the nodes carrying these payloads are adjacent. False when
    /// either payload is not in the graph.
    pub fn values_are_neighbors(&self, a: &N, b: &N) -> bool
    where
        N: PartialEq,
    {
        match (self.find_node(a), self.find_node(b)) {
            (Some(a), Some(b)) => self.is_neighbor(a, b),
            _ => false,
        }
    }
}

impl<N, E> Default for Graph<N, E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Adjacency dump, one node per line, ids sorted for stable output.
impl<N: fmt::Display, E: fmt::Display> fmt::Display for Graph<N, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ids: Vec<NodeId> = self.nodes.keys().copied().collect();
        ids.sort();
        for id in ids {
            let node = &self.nodes[&id];
            write!(f, "{} ({})", id, node.value)?;
            let mut neighbor_ids: Vec<NodeId> = node.neighbors.keys().copied().collect();
            neighbor_ids.sort();
            for nid in neighbor_ids {
                write!(f, " {}[{}]", nid, node.neighbors[&nid])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<N, E: Clone> Topology<N, E> for Graph<N, E> {
    fn add_node(&mut self, id: NodeId, value: N) {
        self.add_node(id, value);
    }

    fn remove_node(&mut self, id: NodeId) {
        self.remove_node(id);
    }

    fn set_edge(&mut self, a: NodeId, b: NodeId, value: E) {
        self.set_edge(a, b, value);
    }

    fn remove_edge(&mut self, a: NodeId, b: NodeId) {
        self.remove_edge(a, b);
    }

    fn node(&self, id: NodeId) -> Option<&N> {
        self.node(id)
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut N> {
        self.node_mut(id)
    }

    fn node_ids(&self) -> Vec<NodeId> {
        self.node_ids()
    }

    fn neighbors(&self, id: NodeId) -> Option<Vec<(NodeId, &E)>> {
        self.neighbors(id)
    }

    fn neighbor_ids(&self, id: NodeId) -> Option<Vec<NodeId>> {
        self.neighbor_ids(id)
    }

    fn degree(&self, id: NodeId) -> Result<usize> {
        self.degree(id)
    }

    fn edge(&self, a: NodeId, b: NodeId) -> Option<&E> {
        self.edge(a, b)
    }

    fn edge_density(&self) -> f64 {
        self.edge_density()
    }

    fn node_count(&self) -> usize {
        self.node_count()
    }

    fn edge_count(&self) -> u64 {
        self.edge_count()
    }

    fn centrality(&mut self, id: NodeId) -> Result<f64> {
        self.centrality(id)
    }

    fn centrality_all(&mut self) -> Result<HashMap<NodeId, f64>> {
        self.centrality_all()
    }

    fn connected_components(&self) -> Vec<std::collections::HashSet<NodeId>> {
        self.connected_components()
    }
}
