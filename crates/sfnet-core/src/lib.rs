//! # sfnet Core
//!
//! Shared types, the error taxonomy, and the `Topology` trait for the sfnet
//! substrate: a mutable undirected graph consumed by adaptive streaming
//! ensembles that grow and shrink nodes in response to drift signals.
//!
//! This crate carries no graph implementation of its own. It defines the
//! narrow surface an ensemble relies on:
//!
//! - **Types** — [`types::NodeId`] (caller-supplied stable integer ids) and
//!   [`types::MetricKind`] (the closed set of centrality measures).
//! - **Errors** — [`error::GraphError`] and the [`error::Result`] alias.
//! - **Topology** — the [`topology::Topology`] trait: mutation primitives,
//!   pure accessors, lazy centrality queries, and component discovery.
//!
//! ## Quick Start
//!
//! ```rust
//! use sfnet_core::prelude::*;
//!
//! let id = NodeId(7);
//! let kind: MetricKind = "Pagerank".parse().unwrap();
//! assert_eq!(kind, MetricKind::Pagerank);
//! ```

pub mod error;
pub mod prelude;
pub mod topology;
pub mod types;
