//! Metric vectors, the recomputation cache, and the traversal sentinels.

use std::collections::HashSet;

use sfnet_core::prelude::*;
use sfnet_graph::Graph;

fn id(raw: u64) -> NodeId {
    NodeId(raw)
}

/// Path 1-2-3-4-5 with unit edge values.
fn path5(kind: MetricKind) -> Graph<u64, f64> {
    let mut graph = Graph::with_metric(kind);
    for i in 1..=5 {
        graph.add_node(id(i), i);
    }
    for i in 1..5 {
        graph.set_edge(id(i), id(i + 1), 1.0);
    }
    graph
}

#[test]
fn every_metric_vector_sums_to_one_on_a_connected_graph() {
    for kind in MetricKind::ALL {
        let mut graph = path5(kind);
        let values = graph.centrality_all().unwrap();
        assert_eq!(values.len(), 5, "{} vector must cover all nodes", kind);
        let total: f64 = values.values().sum();
        assert!(
            (total - 1.0).abs() < 1e-9,
            "{} vector sums to {}",
            kind,
            total
        );
    }
}

#[test]
fn betweenness_separates_bridges_from_leaves() {
    let mut graph = path5(MetricKind::Betweenness);
    let values = graph.centrality_all().unwrap();
    // The interior carries every crossing path; the leaves carry none.
    assert!(values[&id(3)] > values[&id(2)]);
    assert!(values[&id(2)] > 0.0);
    assert_eq!(values[&id(1)], 0.0);
    assert_eq!(values[&id(5)], 0.0);
}

#[test]
fn metric_queries_are_stable_between_mutations() {
    let mut graph = path5(MetricKind::Pagerank);
    let first = graph.centrality_all().unwrap();
    let second = graph.centrality_all().unwrap();
    assert_eq!(first, second, "no mutation may change the answer");

    // A topology edit between queries may change the result.
    graph.set_edge(id(1), id(5), 1.0);
    let third = graph.centrality_all().unwrap();
    assert_ne!(first, third, "closing the ring shifts the weights");
    let total: f64 = third.values().sum();
    assert!((total - 1.0).abs() < 1e-9);
}

#[test]
fn per_node_and_full_vector_queries_agree() {
    let mut graph = path5(MetricKind::Closeness);
    let values = graph.centrality_all().unwrap();
    for i in 1..=5 {
        let single = graph.centrality(id(i)).unwrap();
        assert_eq!(single, values[&id(i)]);
    }
}

#[test]
fn geodesic_sentinels_distinguish_their_three_outcomes() {
    let mut graph: Graph<u64, f64> = Graph::new();
    for i in 1..=3 {
        graph.add_node(id(i), i);
    }
    graph.set_edge(id(1), id(2), 1.0);

    assert_eq!(graph.geodesic_distance(id(1), id(1)).unwrap(), Some(0));
    assert_eq!(graph.geodesic_distance(id(1), id(2)).unwrap(), Some(1));
    // Different component: an outcome, never a number.
    assert_eq!(graph.geodesic_distance(id(1), id(3)).unwrap(), None);
    // Unknown id: an error, never an outcome.
    assert_eq!(
        graph.geodesic_distance(id(1), id(9)).unwrap_err(),
        GraphError::NodeNotFound(id(9))
    );
}

#[test]
fn disjoint_pairs_split_into_two_exact_components() {
    let mut graph: Graph<u64, f64> = Graph::new();
    for i in 1..=4 {
        graph.add_node(id(i), i);
    }
    graph.set_edge(id(1), id(2), 1.0);
    graph.set_edge(id(3), id(4), 1.0);

    let components = graph.connected_components();
    assert_eq!(components.len(), 2);

    let mut covered: HashSet<NodeId> = HashSet::new();
    for component in &components {
        assert_eq!(component.len(), 2);
        covered.extend(component);
    }
    assert_eq!(covered.len(), 4, "components must partition the node set");
}

#[test]
fn components_are_never_served_from_a_cache() {
    let mut graph: Graph<u64, f64> = Graph::with_metric(MetricKind::Degree);
    for i in 1..=4 {
        graph.add_node(id(i), i);
    }
    graph.set_edge(id(1), id(2), 1.0);
    graph.set_edge(id(2), id(3), 1.0);
    graph.set_edge(id(3), id(4), 1.0);

    // Warm the metric cache, then mutate and re-read both surfaces.
    let _ = graph.centrality_all().unwrap();
    assert_eq!(graph.connected_components().len(), 1);

    graph.remove_node(id(2));
    assert_eq!(graph.connected_components().len(), 2);
    let weights = graph.centrality_all().unwrap();
    assert_eq!(weights.len(), 3, "metric vector follows the new node set");
}

#[test]
fn an_edgeless_population_gets_uniform_voting_weights() {
    let mut graph: Graph<u64, f64> = Graph::with_metric(MetricKind::Degree);
    for i in 1..=10 {
        graph.add_node(id(i), i);
    }
    let values = graph.centrality_all().unwrap();
    for value in values.values() {
        assert!((value - 0.1).abs() < 1e-9, "uniform 1/N, got {}", value);
    }
}
