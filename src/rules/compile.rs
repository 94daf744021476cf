//! Rule compiler: turns a `RuleConfig` into a matcher over nodes

use super::config::{AlterRule, EdgeRule, EgoRule, RuleConfig, RuleDomain};
use super::index::EdgeIndex;
use super::predicate::{evaluate_optional, Operator};
use crate::graph::{Network, Node};

/// What a matcher may consult besides the node itself
#[derive(Debug, Clone, Copy)]
pub struct MatchContext<'a> {
    pub index: &'a EdgeIndex,
    pub ego: Option<&'a Node>,
}

impl<'a> MatchContext<'a> {
    pub fn new(index: &'a EdgeIndex, network: &'a Network) -> Self {
        Self {
            index,
            ego: network.ego.as_ref(),
        }
    }
}

/// A compiled rule, tagged with its domain
#[derive(Debug, Clone, PartialEq)]
pub enum Matcher {
    Alter(AlterRule),
    Edge(EdgeRule),
    Ego(EgoRule),
    Never,
}

/// Compile one rule configuration
pub fn compile_rule(config: &RuleConfig) -> Matcher {
    match config {
        RuleConfig::Alter(rule) => Matcher::Alter(rule.clone()),
        RuleConfig::Edge(rule) => Matcher::Edge(rule.clone()),
        RuleConfig::Ego(rule) => Matcher::Ego(rule.clone()),
        RuleConfig::Unrecognized { domain, .. } => {
            tracing::warn!(domain = %domain, "unrecognized rule domain never matches");
            Matcher::Never
        }
    }
}

impl Matcher {
    pub fn domain(&self) -> RuleDomain {
        match self {
            Matcher::Alter(_) => RuleDomain::Alter,
            Matcher::Edge(_) => RuleDomain::Edge,
            Matcher::Ego(_) => RuleDomain::Ego,
            Matcher::Never => RuleDomain::Unrecognized,
        }
    }

    /// Whether `node` satisfies the rule
    ///
    /// An ego rule matches only the node carrying the ego's id, and only when
    /// the ego itself satisfies the predicate.
    pub fn matches(&self, node: &Node, ctx: &MatchContext<'_>) -> bool {
        match self {
            Matcher::Alter(rule) => alter_matches(rule, node),
            Matcher::Edge(rule) => edge_matches(rule, node, ctx.index),
            Matcher::Ego(rule) => ctx
                .ego
                .is_some_and(|ego| ego.id == node.id && ego_matches(rule, ego)),
            Matcher::Never => false,
        }
    }

    /// Evaluate against the ego node directly; non-ego matchers never match here
    pub fn matches_ego(&self, ego: Option<&Node>) -> bool {
        match self {
            Matcher::Ego(rule) => ego.is_some_and(|ego| ego_matches(rule, ego)),
            _ => false,
        }
    }
}

fn alter_matches(rule: &AlterRule, node: &Node) -> bool {
    let Some(attribute) = rule.attribute_name() else {
        return match rule.operator {
            Some(Operator::Exists) => node.node_type == rule.node_type,
            _ => node.node_type != rule.node_type,
        };
    };

    node.node_type == rule.node_type
        && evaluate_optional(rule.operator.as_ref(), node.attribute(attribute), &rule.value)
}

fn edge_matches(rule: &EdgeRule, node: &Node, index: &EdgeIndex) -> bool {
    let touches = index.contains(&rule.edge_type, &node.id);
    match rule.operator {
        Operator::Exists => touches,
        _ => !touches,
    }
}

fn ego_matches(rule: &EgoRule, ego: &Node) -> bool {
    evaluate_optional(rule.operator.as_ref(), ego.attribute(&rule.attribute), &rule.value)
}
