//! Single-pass filter for large networks
//!
//! Builds one edge index up front and tests every rule against each node of
//! the input in a single pass, without the intermediate networks of the AND
//! pipeline. Peak memory holds the full index regardless of how far the
//! rules narrow the node set.

use super::trim::restrict;
use crate::graph::{Network, Node};
use crate::rules::{compile_rule, EdgeIndex, Join, JoinSpec, MatchContext, Matcher, RuleDomain};

/// A compiled single-pass filter; reusable across networks
#[derive(Debug, Clone)]
pub struct FastFilter {
    join: Join,
    matchers: Vec<Matcher>,
    /// Ego rules, when they can be settled once before the node pass
    ego_prefilter: Option<Vec<Matcher>>,
}

/// Compile a join spec into a single-pass filter
pub fn compile_fast_filter(spec: &JoinSpec) -> FastFilter {
    let all: Vec<Matcher> = spec.rules.iter().map(|entry| compile_rule(&entry.rule)).collect();
    let (ego, rest): (Vec<Matcher>, Vec<Matcher>) =
        all.iter().cloned().partition(|matcher| matcher.domain() == RuleDomain::Ego);

    let prefilter = !ego.is_empty() && (spec.join == Join::And || rest.is_empty());
    let (matchers, ego_prefilter) = if prefilter { (rest, Some(ego)) } else { (all, None) };

    tracing::debug!(
        join = ?spec.join,
        rules = spec.rules.len(),
        ego_prefilter = prefilter,
        "compiled fast filter"
    );
    FastFilter {
        join: spec.join,
        matchers,
        ego_prefilter,
    }
}

impl FastFilter {
    /// Apply the filter; the input is never modified
    pub fn apply(&self, network: &Network) -> Network {
        if self.matchers.is_empty() && self.ego_prefilter.is_none() {
            return match self.join {
                Join::And => network.clone(),
                Join::Or => network.emptied(),
            };
        }

        let index = EdgeIndex::build(&network.edges);
        let ctx = MatchContext::new(&index, network);

        let candidates: Vec<&Node> = match &self.ego_prefilter {
            Some(ego_rules) => {
                let ego_passes = self
                    .join
                    .combine(ego_rules.iter().map(|matcher| matcher.matches_ego(ctx.ego)));
                match (ego_passes, network.ego_id()) {
                    (true, Some(ego_id)) => network
                        .nodes
                        .iter()
                        .filter(|node| &node.id == ego_id)
                        .collect(),
                    _ => Vec::new(),
                }
            }
            None => network.nodes.iter().collect(),
        };

        let nodes: Vec<Node> = if self.matchers.is_empty() {
            candidates.into_iter().cloned().collect()
        } else {
            candidates
                .into_iter()
                .filter(|node| {
                    self.join
                        .combine(self.matchers.iter().map(|matcher| matcher.matches(node, &ctx)))
                })
                .cloned()
                .collect()
        };

        let result = restrict(network, nodes);
        tracing::debug!(
            join = ?self.join,
            nodes_in = network.node_count(),
            nodes_out = result.node_count(),
            edges_out = result.edge_count(),
            "applied fast filter"
        );
        result
    }
}
