//! Network: nodes, edges, and an optional ego

use super::edge::Edge;
use super::node::{Node, NodeId};
use crate::rules::{is_yaml_path, ConfigResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// A social network as collected from an interview
///
/// The ego is the focal participant. It is carried separately from `nodes`
/// and need not appear among them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Network {
    /// Alters and other entities, in collection order
    #[serde(default)]
    pub nodes: Vec<Node>,
    /// Relationships between nodes
    #[serde(default)]
    pub edges: Vec<Edge>,
    /// The focal node, if recorded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ego: Option<Node>,
}

impl Network {
    /// Create a network without an ego
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self {
            nodes,
            edges,
            ego: None,
        }
    }

    /// Set the ego node
    pub fn with_ego(mut self, ego: Node) -> Self {
        self.ego = Some(ego);
        self
    }

    /// Parse a network from JSON
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a network from YAML
    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load from a file; `.yaml`/`.yml` files are read as YAML, anything else as JSON
    pub fn from_path(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        if is_yaml_path(path) {
            Self::from_yaml_str(&contents)
        } else {
            Self::from_json_str(&contents)
        }
    }

    /// Same ego, no nodes or edges
    pub fn emptied(&self) -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            ego: self.ego.clone(),
        }
    }

    /// IDs of all nodes in `nodes`
    pub fn node_ids(&self) -> HashSet<&NodeId> {
        self.nodes.iter().map(|node| &node.id).collect()
    }

    /// The ego's ID, if an ego is recorded
    pub fn ego_id(&self) -> Option<&NodeId> {
        self.ego.as_ref().map(|ego| &ego.id)
    }

    /// Whether every edge endpoint names a node in `nodes`
    pub fn is_well_formed(&self) -> bool {
        let ids = self.node_ids();
        self.edges
            .iter()
            .all(|edge| ids.contains(&edge.from) && ids.contains(&edge.to))
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
