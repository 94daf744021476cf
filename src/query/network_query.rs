//! Boolean queries: does the network satisfy a rule set?
//!
//! Rules are grouped by domain in order of first appearance. Each group is
//! reduced by the join, and the group outcomes are reduced by the join again.
//! Alter and edge rules are existential over nodes: a rule passes when at
//! least one node satisfies it, or when its cardinality assertion holds for
//! the number of nodes that do.

use crate::graph::Network;
use crate::rules::{
    compile_rule, evaluate_count, CountAssertion, EdgeIndex, Join, JoinSpec, MatchContext, Matcher,
    RuleDomain,
};

/// A compiled query; reusable across networks
#[derive(Debug, Clone)]
pub struct NetworkQuery {
    join: Join,
    groups: Vec<RuleGroup>,
}

#[derive(Debug, Clone)]
struct RuleGroup {
    domain: RuleDomain,
    rules: Vec<CompiledRule>,
}

#[derive(Debug, Clone)]
struct CompiledRule {
    matcher: Matcher,
    count: Option<CountAssertion>,
}

/// Compile a join spec into a network query
///
/// ```
/// use netquery::{compile_query, AlterRule, EgoRule, JoinSpec, Network, Node, Operator, RuleEntry};
///
/// let bill = Node::new("1", "person").with_attribute("name", "Bill");
/// let ted = Node::new("ego", "person").with_attribute("name", "Ted");
/// let network = Network::new(vec![bill], vec![]).with_ego(ted);
///
/// let query = compile_query(&JoinSpec::and([
///     RuleEntry::from(AlterRule::attribute("person", "name", Operator::Exactly, "Bill")),
///     RuleEntry::from(EgoRule::new("name", Operator::Exactly, "Ted")),
/// ]));
/// assert!(query.evaluate(&network));
/// ```
pub fn compile_query(spec: &JoinSpec) -> NetworkQuery {
    let mut groups: Vec<RuleGroup> = Vec::new();

    for entry in &spec.rules {
        let matcher = compile_rule(&entry.rule);
        let domain = matcher.domain();
        let rule = CompiledRule {
            matcher,
            count: entry.count.clone(),
        };
        match groups.iter_mut().find(|group| group.domain == domain) {
            Some(group) => group.rules.push(rule),
            None => groups.push(RuleGroup {
                domain,
                rules: vec![rule],
            }),
        }
    }

    tracing::debug!(
        join = ?spec.join,
        rules = spec.rules.len(),
        groups = groups.len(),
        "compiled query"
    );
    NetworkQuery {
        join: spec.join,
        groups,
    }
}

impl NetworkQuery {
    /// Evaluate the query against a network
    pub fn evaluate(&self, network: &Network) -> bool {
        let index = if self.groups.iter().any(|group| group.domain == RuleDomain::Edge) {
            EdgeIndex::build(&network.edges)
        } else {
            EdgeIndex::default()
        };
        let ctx = MatchContext::new(&index, network);

        let result = self
            .join
            .combine(self.groups.iter().map(|group| group.evaluate(self.join, network, &ctx)));
        tracing::debug!(join = ?self.join, nodes = network.node_count(), result, "evaluated query");
        result
    }
}

impl RuleGroup {
    fn evaluate(&self, join: Join, network: &Network, ctx: &MatchContext<'_>) -> bool {
        match self.domain {
            RuleDomain::Ego => join.combine(
                self.rules
                    .iter()
                    .map(|rule| rule.matcher.matches_ego(ctx.ego)),
            ),
            RuleDomain::Alter | RuleDomain::Edge => {
                join.combine(self.rules.iter().map(|rule| rule.passes(network, ctx)))
            }
            RuleDomain::Unrecognized => false,
        }
    }
}

impl CompiledRule {
    fn passes(&self, network: &Network, ctx: &MatchContext<'_>) -> bool {
        let mut matching = network.nodes.iter().filter(|node| self.matcher.matches(node, ctx));
        match &self.count {
            Some(assertion) => {
                evaluate_count(&assertion.operator, matching.count(), assertion.value)
            }
            None => matching.next().is_some(),
        }
    }
}
