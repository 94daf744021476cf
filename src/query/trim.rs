//! Orphan trimming shared by both filter strategies

use crate::graph::{Edge, Network, Node, NodeId};
use std::collections::HashSet;

/// Edges whose endpoints are both in `ids`
pub(crate) fn edges_within(edges: &[Edge], ids: &HashSet<&NodeId>) -> Vec<Edge> {
    edges
        .iter()
        .filter(|edge| ids.contains(&edge.from) && ids.contains(&edge.to))
        .cloned()
        .collect()
}

/// Build the sub-network of `network` on `nodes`, keeping the ego and every
/// edge between two kept nodes
pub(crate) fn restrict(network: &Network, nodes: Vec<Node>) -> Network {
    let ids: HashSet<&NodeId> = nodes.iter().map(|node| &node.id).collect();
    let edges = edges_within(&network.edges, &ids);
    Network {
        nodes,
        edges,
        ego: network.ego.clone(),
    }
}

/// Drop edges whose `from` or `to` is not a node of the network
pub fn trim_orphans(network: &Network) -> Network {
    restrict(network, network.nodes.clone())
}
