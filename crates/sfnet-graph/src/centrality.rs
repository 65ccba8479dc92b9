//! Centrality metrics and the recomputation cache.
//!
//! All four metric families produce a vector over every node id, normalized
//! to sum to 1 so the consuming ensemble can use the values directly as
//! voting weights. The vector is cached on the graph and recomputed in full
//! whenever a query finds the cache dirty; mutations never recompute
//! anything themselves.

use std::collections::{HashMap, VecDeque};

use sfnet_core::error::{GraphError, Result};
use sfnet_core::types::{MetricKind, NodeId};

use crate::graph::{CacheState, Graph};

/// Damping for the eigenvector-flavoured power iteration.
const EIGENVECTOR_ALPHA: f64 = 0.0;
/// Damping for the pagerank-flavoured power iteration.
const PAGERANK_ALPHA: f64 = 0.5;
/// A sweep has converged when every node moved by at most this much.
const CONVERGENCE_TOLERANCE: f64 = 1e-5;
/// Sweep cap for the power iteration; hitting it surfaces `DidNotConverge`.
const MAX_SWEEPS: usize = 1_000;

impl<N, E> Graph<N, E> {
    /// Centrality of one node under the selected metric.
    ///
    /// Recomputes the whole cached vector first if any mutation happened
    /// since the last query. `NodeNotFound` for ids outside the graph,
    /// `MetricNotSelected` when the graph was built without a kind.
    pub fn centrality(&mut self, id: NodeId) -> Result<f64> {
        self.refresh_metrics()?;
        self.metric_values
            .get(&id)
            .copied()
            .ok_or(GraphError::NodeNotFound(id))
    }

    /// The full per-node centrality vector under the selected metric,
    /// recomputed first if stale.
    pub fn centrality_all(&mut self) -> Result<HashMap<NodeId, f64>> {
        self.refresh_metrics()?;
        Ok(self.metric_values.clone())
    }

    fn refresh_metrics(&mut self) -> Result<()> {
        let kind = self.metric.ok_or(GraphError::MetricNotSelected)?;
        if self.cache == CacheState::Valid {
            return Ok(());
        }

        // Below 3 nodes most metrics are degenerate; degree covers those
        // graphs whatever kind was selected.
        let values = if self.node_count() < 3 {
            self.degree_metric()
        } else {
            match kind {
                MetricKind::Degree => self.degree_metric(),
                MetricKind::Betweenness => self.betweenness_metric(),
                MetricKind::Closeness => self.closeness_metric(),
                MetricKind::Eigenvector => self.power_iteration_metric(EIGENVECTOR_ALPHA)?,
                MetricKind::Pagerank => self.power_iteration_metric(PAGERANK_ALPHA)?,
            }
        };

        self.metric_values = values;
        self.cache = CacheState::Valid;
        Ok(())
    }

    /// Raw degree over total degree; uniform `1/N` when the graph has no
    /// edges at all.
    fn degree_metric(&self) -> HashMap<NodeId, f64> {
        if self.nodes.is_empty() {
            return HashMap::new();
        }

        let mut values: HashMap<NodeId, f64> = self
            .nodes
            .iter()
            .map(|(&id, node)| (id, node.neighbors.len() as f64))
            .collect();

        let total: f64 = values.values().sum();
        if total == 0.0 {
            let uniform = 1.0 / self.nodes.len() as f64;
            for value in values.values_mut() {
                *value = uniform;
            }
        } else {
            for value in values.values_mut() {
                *value /= total;
            }
        }
        values
    }

    /// Closeness within components: `(N-1) / sum of hop distances`, where
    /// unreached nodes contribute 0 to the sum. That keeps the measure
    /// defined on multipartite graphs at the cost of inflating scores in
    /// small components.
    fn closeness_metric(&self) -> HashMap<NodeId, f64> {
        let n = self.nodes.len() as f64;
        let mut values: HashMap<NodeId, f64> = HashMap::with_capacity(self.nodes.len());

        for &v in self.nodes.keys() {
            let sum: u32 = match self.distances_from(v) {
                Some(dist) => dist.values().sum(),
                None => 0,
            };
            let closeness = if sum > 0 { (n - 1.0) / sum as f64 } else { 0.0 };
            values.insert(v, closeness);
        }

        normalize_in_place(&mut values);
        values
    }

    /// Brandes' single-pass betweenness accumulation.
    ///
    /// Per source: a FIFO BFS records distances, shortest-path counts
    /// (`sigma`) and predecessor lists; the discovery stack is then unwound
    /// accumulating path dependencies (`delta`) back onto predecessors.
    fn betweenness_metric(&self) -> HashMap<NodeId, f64> {
        let node_ids: Vec<NodeId> = self.nodes.keys().copied().collect();
        let n = node_ids.len();
        let id_to_idx: HashMap<NodeId, usize> = node_ids
            .iter()
            .enumerate()
            .map(|(i, &id)| (id, i))
            .collect();

        let mut cb = vec![0.0_f64; n];

        for s in 0..n {
            let mut stack: Vec<usize> = Vec::new();
            let mut predecessors: Vec<Vec<usize>> = vec![Vec::new(); n];
            let mut sigma = vec![0.0_f64; n];
            let mut dist = vec![-1_i64; n];
            let mut delta = vec![0.0_f64; n];

            sigma[s] = 1.0;
            dist[s] = 0;

            let mut queue = VecDeque::new();
            queue.push_back(s);

            while let Some(v) = queue.pop_front() {
                stack.push(v);
                let Some(node) = self.nodes.get(&node_ids[v]) else {
                    continue;
                };
                for neighbor_id in node.neighbors.keys() {
                    let Some(&w) = id_to_idx.get(neighbor_id) else {
                        continue;
                    };
                    if dist[w] < 0 {
                        queue.push_back(w);
                        dist[w] = dist[v] + 1;
                    }
                    if dist[w] == dist[v] + 1 {
                        // sigma[v] > 0 for every dequeued v: it is on a
                        // shortest path from s.
                        sigma[w] += sigma[v];
                        predecessors[w].push(v);
                    }
                }
            }

            while let Some(w) = stack.pop() {
                for &p in &predecessors[w] {
                    delta[p] += (sigma[p] / sigma[w]) * (1.0 + delta[w]);
                }
                if w != s {
                    cb[w] += delta[w];
                }
            }
        }

        let mut values: HashMap<NodeId, f64> = node_ids.into_iter().zip(cb).collect();
        normalize_in_place(&mut values);
        values
    }

    /// Katz-family power iteration, damped by `alpha` (0 for the
    /// eigenvector flavour, 0.5 for the pagerank flavour).
    ///
    /// Sweeps `next[v] = (1-alpha)/N + alpha * sum(old[u]/degree(u))` over
    /// the neighbors `u` of `v` until every node's change is within
    /// tolerance. Neighbors have degree >= 1 by definition, so the division
    /// is always defined. A topology that refuses to settle within the
    /// sweep cap surfaces `DidNotConverge` instead of spinning forever.
    fn power_iteration_metric(&self, alpha: f64) -> Result<HashMap<NodeId, f64>> {
        let n = self.nodes.len() as f64;
        let mut old: HashMap<NodeId, f64> =
            self.nodes.keys().map(|&id| (id, 1.0 / n)).collect();
        let mut current: HashMap<NodeId, f64> = HashMap::with_capacity(self.nodes.len());

        for _ in 0..MAX_SWEEPS {
            current.clear();
            for (&v, node) in &self.nodes {
                let mut sum = 0.0;
                for u in node.neighbors.keys() {
                    if let (Some(&value), Some(u_node)) = (old.get(u), self.nodes.get(u)) {
                        sum += value / u_node.neighbors.len() as f64;
                    }
                }
                current.insert(v, (1.0 - alpha) / n + alpha * sum);
            }

            let converged = current
                .iter()
                .all(|(id, &value)| (value - old[id]).abs() <= CONVERGENCE_TOLERANCE);

            std::mem::swap(&mut old, &mut current);

            if converged {
                let mut values = old;
                normalize_in_place(&mut values);
                return Ok(values);
            }
        }

        Err(GraphError::DidNotConverge { sweeps: MAX_SWEEPS })
    }
}

/// Scale the vector so it sums to 1.
///
/// A zero total marks every entry with the `f64::NAN` sentinel instead: the
/// whole vector is non-numeric, uniformly, and callers can detect the
/// degenerate normalization with `is_nan`.
fn normalize_in_place(values: &mut HashMap<NodeId, f64>) {
    let total: f64 = values.values().sum();
    if total == 0.0 {
        for value in values.values_mut() {
            *value = f64::NAN;
        }
    } else {
        for value in values.values_mut() {
            *value /= total;
        }
    }
}
