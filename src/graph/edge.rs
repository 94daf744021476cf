//! Typed relationship between two nodes

use super::node::{Attributes, NodeId};
use serde::{Deserialize, Serialize};

/// A typed edge between two nodes
///
/// Direction is recorded but no rule currently inspects it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Source node
    pub from: NodeId,
    /// Target node
    pub to: NodeId,
    /// Type of relationship (e.g., "friend", "band")
    #[serde(rename = "type")]
    pub edge_type: String,
    /// Additional attributes
    #[serde(default, skip_serializing_if = "Attributes::is_empty")]
    pub attributes: Attributes,
}

impl Edge {
    /// Create a new edge
    pub fn new(
        from: impl Into<NodeId>,
        to: impl Into<NodeId>,
        edge_type: impl Into<String>,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            edge_type: edge_type.into(),
            attributes: Attributes::new(),
        }
    }
}
