//! Adjacency-list representation of the
//! interference graph built by the loader.

use std::collections::HashMap;

pub type NodeId = u32;

/// Interference graph. Built once from the input records
/// and read-only for the rest of the pipeline.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Graph {
    adjacency: HashMap<NodeId, Vec<NodeId>>,
}

impl Graph {
    pub fn new() -> Self {
        Graph {
            adjacency: HashMap::new(),
        }
    }

    /// Number of nodes with a record in the graph.
    pub fn size(&self) -> usize {
        self.adjacency.len()
    }

    /// Install the neighbour list for a node. A node that
    /// appears in a later record overwrites its earlier list.
    pub fn set_node(&mut self, node: NodeId, neighbours: Vec<NodeId>) {
        self.adjacency.insert(node, neighbours);
    }

    /// Neighbours of a node. Nodes without a record have none.
    pub fn neighbours(&self, node: NodeId) -> &[NodeId] {
        self.adjacency.get(&node).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn degree(&self, node: NodeId) -> usize {
        self.neighbours(node).len()
    }

    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency.keys().copied()
    }

    /// All recorded arcs as (from, to) pairs.
    pub fn iterate_edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.adjacency
            .iter()
            .flat_map(|(node, neighbours)| neighbours.iter().map(move |end| (*node, *end)))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_unknown_node_has_no_neighbours() {
        let graph = Graph::new();

        assert_eq!(0, graph.size());
        assert!(graph.neighbours(42).is_empty());
        assert_eq!(0, graph.degree(42));
    }

    #[test]
    fn test_set_node_overwrites() {
        let mut graph = Graph::new();
        graph.set_node(1, vec![2, 3]);
        graph.set_node(1, vec![4]);

        assert_eq!(1, graph.size());
        assert_eq!(vec![4], graph.neighbours(1));
        assert_eq!(1, graph.degree(1));
    }

    #[test]
    fn test_iterate_edges() {
        let mut graph = Graph::new();
        graph.set_node(1, vec![2]);
        graph.set_node(2, vec![1]);

        let mut arcs = graph.iterate_edges().collect::<Vec<_>>();
        arcs.sort_unstable();

        assert_eq!(vec![(1, 2), (2, 1)], arcs);
    }
}
