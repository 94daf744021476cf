//! Standard filter: reduce a network to the sub-network matching a rule set
//!
//! AND runs the rules as a pipeline. Each stage sees only the nodes and
//! edges that survived the previous one, and rebuilds its edge index from
//! them, so a later edge rule can only be satisfied through surviving edges.
//!
//! OR runs every rule against the input network and unions the matches. The
//! result keeps every input edge between two matched nodes, including edges
//! joining nodes matched by different rules.

use super::trim::restrict;
use crate::graph::{Network, Node, NodeId};
use crate::rules::{compile_rule, EdgeIndex, Join, JoinSpec, MatchContext, Matcher};
use std::collections::HashSet;

/// A compiled filter; reusable across networks
#[derive(Debug, Clone)]
pub struct Filter {
    join: Join,
    matchers: Vec<Matcher>,
}

/// Compile a join spec into a network filter
///
/// ```
/// use netquery::{compile_filter, AlterRule, Edge, JoinSpec, Network, Node, Operator};
///
/// let network = Network::new(
///     vec![
///         Node::new("1", "person").with_attribute("age", 19),
///         Node::new("2", "person").with_attribute("age", 51),
///     ],
///     vec![Edge::new("1", "2", "friend")],
/// );
/// let filter = compile_filter(&JoinSpec::or([AlterRule::attribute(
///     "person",
///     "age",
///     Operator::LessThan,
///     20,
/// )]));
///
/// let result = filter.apply(&network);
/// assert_eq!(result.nodes.len(), 1);
/// assert!(result.edges.is_empty());
/// ```
pub fn compile_filter(spec: &JoinSpec) -> Filter {
    let matchers: Vec<Matcher> = spec.rules.iter().map(|entry| compile_rule(&entry.rule)).collect();
    tracing::debug!(join = ?spec.join, rules = matchers.len(), "compiled filter");
    Filter {
        join: spec.join,
        matchers,
    }
}

impl Filter {
    /// Apply the filter; the input is never modified
    pub fn apply(&self, network: &Network) -> Network {
        let result = match self.join {
            Join::And => self.apply_and(network),
            Join::Or => self.apply_or(network),
        };
        tracing::debug!(
            join = ?self.join,
            nodes_in = network.node_count(),
            nodes_out = result.node_count(),
            edges_out = result.edge_count(),
            "applied filter"
        );
        result
    }

    fn apply_and(&self, network: &Network) -> Network {
        let mut stages = self.matchers.iter();
        let Some(first) = stages.next() else {
            return network.clone();
        };

        let mut current = narrow(network, first);
        for (stage, matcher) in stages.enumerate() {
            if current.nodes.is_empty() {
                break;
            }
            current = narrow(&current, matcher);
            tracing::trace!(stage = stage + 1, nodes = current.node_count(), "AND stage");
        }
        current
    }

    fn apply_or(&self, network: &Network) -> Network {
        if self.matchers.is_empty() {
            return network.emptied();
        }

        let index = EdgeIndex::build(&network.edges);
        let ctx = MatchContext::new(&index, network);

        let mut matched: HashSet<&NodeId> = HashSet::new();
        for matcher in &self.matchers {
            matched.extend(
                network
                    .nodes
                    .iter()
                    .filter(|node| matcher.matches(node, &ctx))
                    .map(|node| &node.id),
            );
        }

        let mut seen: HashSet<&NodeId> = HashSet::new();
        let nodes: Vec<Node> = network
            .nodes
            .iter()
            .filter(|node| matched.contains(&node.id) && seen.insert(&node.id))
            .cloned()
            .collect();

        restrict(network, nodes)
    }
}

/// One AND stage: keep matching nodes, then trim orphaned edges
fn narrow(network: &Network, matcher: &Matcher) -> Network {
    let index = EdgeIndex::build(&network.edges);
    let ctx = MatchContext::new(&index, network);
    let nodes = network
        .nodes
        .iter()
        .filter(|node| matcher.matches(node, &ctx))
        .cloned()
        .collect();
    restrict(network, nodes)
}
