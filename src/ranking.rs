use crate::graph::{Graph, NodeId};

/// Rank all nodes for colouring: highest degree first, ties
/// broken towards the smaller node id.
///
/// The comparator is a total order over the keys; the result
/// does not depend on map iteration order.
pub fn rank_nodes(graph: &Graph) -> Vec<NodeId> {
    let mut order = graph.nodes().collect::<Vec<_>>();
    order.sort_unstable_by(|left, right| {
        graph
            .degree(*right)
            .cmp(&graph.degree(*left))
            .then_with(|| left.cmp(right))
    });
    order
}
