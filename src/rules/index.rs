//! Edge membership index: which nodes touch an edge of a given type

use crate::graph::{Edge, NodeId};
use std::collections::{HashMap, HashSet};

/// Edge type -> IDs of nodes at either end of an edge of that type
///
/// Direction and multiplicity are discarded; only "does this node touch an
/// edge of this type" survives.
#[derive(Debug, Clone, Default)]
pub struct EdgeIndex {
    by_type: HashMap<String, HashSet<NodeId>>,
}

impl EdgeIndex {
    pub fn build(edges: &[Edge]) -> Self {
        let mut by_type: HashMap<String, HashSet<NodeId>> = HashMap::new();

        for edge in edges {
            let members = by_type.entry(edge.edge_type.clone()).or_default();
            members.insert(edge.from.clone());
            members.insert(edge.to.clone());
        }

        Self { by_type }
    }

    /// Whether `id` touches an edge of `edge_type`
    pub fn contains(&self, edge_type: &str, id: &NodeId) -> bool {
        self.by_type
            .get(edge_type)
            .is_some_and(|members| members.contains(id))
    }
}
