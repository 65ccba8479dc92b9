//! Weakly-connected-component discovery.

use std::collections::HashSet;

use sfnet_core::types::NodeId;

use crate::graph::Graph;

impl<N, E> Graph<N, E> {
    /// The connected components of the graph, one set of ids per component.
    ///
    /// Iterative DFS over an explicit stack; every node lands in exactly one
    /// component and isolated nodes form singletons. Always computed fresh
    /// from current adjacency; component structure is never cached.
    pub fn connected_components(&self) -> Vec<HashSet<NodeId>> {
        let mut components: Vec<HashSet<NodeId>> = Vec::new();
        let mut assigned: HashSet<NodeId> = HashSet::new();

        for &start in self.nodes.keys() {
            if !assigned.insert(start) {
                continue;
            }
            let mut component = HashSet::new();
            let mut frontier = vec![start];
            while let Some(v) = frontier.pop() {
                component.insert(v);
                if let Some(node) = self.nodes.get(&v) {
                    for &w in node.neighbors.keys() {
                        if assigned.insert(w) {
                            frontier.push(w);
                        }
                    }
                }
            }
            components.push(component);
        }

        components
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: u64) -> NodeId {
        NodeId(raw)
    }

    #[test]
    fn empty_graph_has_no_components() {
        let graph: Graph<&str, f64> = Graph::new();
        assert!(graph.connected_components().is_empty());
    }

    #[test]
    fn isolated_nodes_form_singletons() {
        let mut graph: Graph<&str, f64> = Graph::new();
        graph.add_node(id(1), "a");
        graph.add_node(id(2), "b");
        let components = graph.connected_components();
        assert_eq!(components.len(), 2);
        assert!(components.iter().all(|c| c.len() == 1));
    }

    #[test]
    fn two_disjoint_pairs_yield_two_components() {
        let mut graph: Graph<&str, f64> = Graph::new();
        for i in 1..=4 {
            graph.add_node(id(i), "n");
        }
        graph.set_edge(id(1), id(2), 1.0);
        graph.set_edge(id(3), id(4), 1.0);

        let components = graph.connected_components();
        assert_eq!(components.len(), 2);

        let mut covered: HashSet<NodeId> = HashSet::new();
        for component in &components {
            assert_eq!(component.len(), 2);
            for &node in component {
                assert!(covered.insert(node), "{} assigned twice", node);
            }
        }
        assert_eq!(covered.len(), 4);
    }

    #[test]
    fn components_track_live_topology() {
        let mut graph: Graph<&str, f64> = Graph::new();
        for i in 1..=3 {
            graph.add_node(id(i), "n");
        }
        graph.set_edge(id(1), id(2), 1.0);
        graph.set_edge(id(2), id(3), 1.0);
        assert_eq!(graph.connected_components().len(), 1);

        // Severing the bridge splits the chain on the very next query.
        graph.remove_node(id(2));
        let components = graph.connected_components();
        assert_eq!(components.len(), 2);
        assert!(components.iter().all(|c| c.len() == 1));
    }
}
