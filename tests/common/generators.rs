//! Random networks and rule sets
//!
//! `proptest` strategies for the property tests and a seeded `rand` builder
//! for large networks. Generated ids are unique and every edge endpoint
//! names a generated node.

use netquery::{AlterRule, Edge, EdgeRule, EgoRule, Network, Node, Operator, RuleEntry};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const NODE_TYPES: [&str; 3] = ["person", "venue", "pet"];
pub const EDGE_TYPES: [&str; 3] = ["friend", "band", "family"];
pub const NAMES: [&str; 5] = ["William", "Theodore", "Rufus", "Joanna", "Elizabeth"];

fn node(index: usize, node_type: &str, age: i64, name: &str) -> Node {
    Node::new(index.to_string(), node_type)
        .with_attribute("age", age)
        .with_attribute("name", name)
}

/// Well-formed network with up to 12 nodes and an optional ego drawn from them
pub fn network() -> impl Strategy<Value = Network> {
    (0usize..12).prop_flat_map(|n| {
        let endpoints = if n == 0 { 0..1 } else { 0..n };
        (
            prop::collection::vec(
                (
                    prop::sample::select(NODE_TYPES.to_vec()),
                    0i64..60,
                    prop::sample::select(NAMES.to_vec()),
                ),
                n,
            ),
            prop::collection::vec(
                (endpoints.clone(), endpoints.clone(), prop::sample::select(EDGE_TYPES.to_vec())),
                if n == 0 { 0..1 } else { 0..24 },
            ),
            prop::option::of(endpoints),
        )
            .prop_map(move |(fields, edges, ego)| {
                let nodes: Vec<Node> = fields
                    .into_iter()
                    .enumerate()
                    .map(|(i, (node_type, age, name))| node(i, node_type, age, name))
                    .collect();
                let edges = if n == 0 {
                    Vec::new()
                } else {
                    edges
                        .into_iter()
                        .map(|(from, to, edge_type)| {
                            Edge::new(from.to_string(), to.to_string(), edge_type)
                        })
                        .collect()
                };
                let ego = ego.and_then(|i| nodes.get(i).cloned());
                Network {
                    nodes,
                    edges,
                    ego,
                }
            })
    })
}

fn value_operator() -> impl Strategy<Value = Operator> {
    prop::sample::select(vec![
        Operator::Exists,
        Operator::NotExists,
        Operator::Exactly,
        Operator::Not,
        Operator::LessThan,
        Operator::GreaterThanOrEqual,
    ])
}

pub fn alter_rule() -> impl Strategy<Value = RuleEntry> {
    prop_oneof![
        (prop::sample::select(NODE_TYPES.to_vec()), value_operator())
            .prop_map(|(node_type, op)| RuleEntry::from(AlterRule::of_type(node_type, op))),
        (prop::sample::select(NODE_TYPES.to_vec()), value_operator(), 0i64..60)
            .prop_map(|(node_type, op, age)| {
                RuleEntry::from(AlterRule::attribute(node_type, "age", op, age))
            }),
        (
            prop::sample::select(NODE_TYPES.to_vec()),
            prop::sample::select(NAMES.to_vec()),
        )
            .prop_map(|(node_type, name)| {
                RuleEntry::from(AlterRule::attribute(node_type, "name", Operator::Exactly, name))
            }),
    ]
}

pub fn edge_rule() -> impl Strategy<Value = RuleEntry> {
    (
        prop::sample::select(EDGE_TYPES.to_vec()),
        prop::sample::select(vec![Operator::Exists, Operator::NotExists]),
    )
        .prop_map(|(edge_type, op)| RuleEntry::from(EdgeRule::new(edge_type, op)))
}

pub fn ego_rule() -> impl Strategy<Value = RuleEntry> {
    (value_operator(), 0i64..60).prop_map(|(op, age)| RuleEntry::from(EgoRule::new("age", op, age)))
}

/// Rules whose outcome for a node depends only on that node (and the ego)
pub fn node_local_rules() -> impl Strategy<Value = Vec<RuleEntry>> {
    prop::collection::vec(prop_oneof![3 => alter_rule(), 1 => ego_rule()], 0..5)
}

pub fn any_rules() -> impl Strategy<Value = Vec<RuleEntry>> {
    prop::collection::vec(prop_oneof![alter_rule(), edge_rule(), ego_rule()], 0..5)
}

pub fn alter_and_edge_rules() -> impl Strategy<Value = Vec<RuleEntry>> {
    prop::collection::vec(prop_oneof![alter_rule(), edge_rule()], 0..5)
}

/// Seeded random network with `nodes` nodes and `edges` edges
pub fn large_network(seed: u64, nodes: usize, edges: usize) -> Network {
    let mut rng = StdRng::seed_from_u64(seed);

    let nodes: Vec<Node> = (0..nodes)
        .map(|i| {
            node(
                i,
                NODE_TYPES[rng.gen_range(0..NODE_TYPES.len())],
                rng.gen_range(0..90),
                NAMES[rng.gen_range(0..NAMES.len())],
            )
        })
        .collect();
    let edges: Vec<Edge> = (0..edges)
        .map(|_| {
            Edge::new(
                rng.gen_range(0..nodes.len()).to_string(),
                rng.gen_range(0..nodes.len()).to_string(),
                EDGE_TYPES[rng.gen_range(0..EDGE_TYPES.len())],
            )
        })
        .collect();
    let ego = nodes[rng.gen_range(0..nodes.len())].clone();

    Network::new(nodes, edges).with_ego(ego)
}
