//! Greedy first-fit colouring over the fixed register palette.

use std::collections::{BTreeMap, HashSet};

use crate::graph::{Graph, NodeId};

pub type Colour = char;

/// The ordered palette. Assignment always scans it front to
/// back, so earlier letters stand for preferred registers.
pub const PALETTE: [Colour; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Node to colour mapping, ordered by node id.
pub type ColourAssignment = BTreeMap<NodeId, Colour>;

/// Outcome of the greedy pass. Nodes the palette could not
/// cover are listed explicitly instead of receiving a
/// made-up colour.
#[derive(Debug, PartialEq, Eq)]
pub struct Colouring {
    pub assignment: ColourAssignment,
    pub uncoloured: Vec<NodeId>,
}

/// Assign each node in ranking order the first palette colour
/// not already used by one of its neighbours.
///
/// Neighbours ranked later are still uncoloured when a node is
/// visited and do not constrain its choice; no node is ever
/// revisited. The pass is a one-shot greedy approximation, not
/// a minimum colouring.
pub fn colour_graph(order: &[NodeId], graph: &Graph) -> Colouring {
    let mut assignment = ColourAssignment::new();
    let mut uncoloured = Vec::new();

    for &node in order {
        let in_use = graph
            .neighbours(node)
            .iter()
            .filter_map(|neighbour| assignment.get(neighbour).copied())
            .collect::<HashSet<Colour>>();

        match PALETTE.iter().find(|colour| !in_use.contains(colour)) {
            Some(colour) => {
                assignment.insert(node, *colour);
            }
            None => uncoloured.push(node),
        }
    }

    Colouring {
        assignment,
        uncoloured,
    }
}
