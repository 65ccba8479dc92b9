//! # sfnet Graph
//!
//! The concrete substrate behind [`sfnet_core::topology::Topology`]: a
//! mutable undirected graph over caller-supplied integer ids, built for
//! interleaving live topology edits with on-demand global analysis.
//!
//! - [`graph`] — the node arena, adjacency mutators and accessors, and the
//!   dirty-flag cache state machine.
//! - `traversal` — single-source BFS distance maps and geodesic queries.
//! - `centrality` — the four metric families behind the lazy cache.
//! - `components` — weakly-connected-component discovery, always fresh.
//!
//! ## Quick Start
//!
//! ```rust
//! use sfnet_core::prelude::*;
//! use sfnet_graph::Graph;
//!
//! let mut graph: Graph<&str, f64> = Graph::with_metric(MetricKind::Degree);
//! graph.add_node(NodeId(1), "a");
//! graph.add_node(NodeId(2), "b");
//! graph.set_edge(NodeId(1), NodeId(2), 1.0);
//!
//! assert_eq!(graph.degree(NodeId(1)).unwrap(), 1);
//! let weights = graph.centrality_all().unwrap();
//! assert_eq!(weights.len(), 2);
//! ```

pub mod graph;

mod centrality;
mod components;
mod traversal;

pub use graph::Graph;
