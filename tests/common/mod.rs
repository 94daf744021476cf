//! Shared fixtures for the integration tests
//!
//! Each integration test binary uses a different subset of these.
#![allow(dead_code)]

pub mod generators;

use netquery::{Edge, Network, Node};
use std::collections::HashSet;

/// William, Theodore, Rufus and a phone box
pub fn bill_and_ted() -> Network {
    Network::new(
        vec![
            Node::new("1", "person")
                .with_attribute("name", "William")
                .with_attribute("age", 19)
                .with_attribute("favouriteColor", "green"),
            Node::new("2", "person")
                .with_attribute("name", "Theodore")
                .with_attribute("age", 18)
                .with_attribute("favouriteColor", "red"),
            Node::new("3", "person")
                .with_attribute("name", "Rufus")
                .with_attribute("age", 51)
                .with_attribute("favouriteColor", "red"),
            Node::new("4", "publicUtility").with_attribute("name", "Phone Box"),
        ],
        vec![
            Edge::new("1", "2", "friend"),
            Edge::new("2", "3", "friend"),
            Edge::new("1", "3", "friend"),
            Edge::new("1", "2", "band"),
        ],
    )
}

/// Me, Carl and Theodore; "Me" is also the ego
pub fn running_club() -> Network {
    let me = Node::new("1", "person").with_attribute("name", "Me").with_attribute("uid", 1);
    Network::new(
        vec![
            me.clone(),
            Node::new("2", "person").with_attribute("name", "Carl").with_attribute("uid", 2),
            Node::new("3", "person").with_attribute("name", "Theodore").with_attribute("uid", 3),
        ],
        vec![
            Edge::new("1", "2", "friends"),
            Edge::new("1", "2", "running_club"),
            Edge::new("1", "3", "friends"),
        ],
    )
    .with_ego(me)
}

/// Node names of a network, in order
pub fn names(network: &Network) -> Vec<String> {
    network
        .nodes
        .iter()
        .map(|node| node.attribute("name").as_str().unwrap_or_default().to_string())
        .collect()
}

/// Node ids as an unordered set
pub fn id_set(network: &Network) -> HashSet<String> {
    network.nodes.iter().map(|node| node.id.to_string()).collect()
}

/// Edges as an unordered set of `(from, to, type)`
pub fn edge_set(network: &Network) -> HashSet<(String, String, String)> {
    network
        .edges
        .iter()
        .map(|edge| (edge.from.to_string(), edge.to.to_string(), edge.edge_type.clone()))
        .collect()
}
