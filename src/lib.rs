//! netquery: rule-based queries and filters over ego-centred social networks
//!
//! Declarative rules are compiled into matchers over three domains and then
//! evaluated either as a boolean query or as a filter producing a
//! sub-network.
//!
//! # Core Concepts
//!
//! - **Alter rules**: node type and attribute tests
//! - **Edge rules**: whether a node touches an edge of a given type
//! - **Ego rules**: attribute tests on the focal node of the network
//! - **Join**: AND/OR combination of rule outcomes
//!
//! # Example
//!
//! ```
//! use netquery::{compile_query, AlterRule, JoinSpec, Network, Node, Operator, RuleEntry};
//!
//! let network = Network::new(
//!     vec![
//!         Node::new("1", "person").with_attribute("age", 19),
//!         Node::new("2", "person").with_attribute("age", 18),
//!     ],
//!     vec![],
//! );
//! let young = RuleEntry::from(AlterRule::attribute("person", "age", Operator::LessThan, 20))
//!     .with_count(Operator::GreaterThanOrEqual, 2.0);
//!
//! assert!(compile_query(&JoinSpec::or([young])).evaluate(&network));
//! ```

mod graph;
pub mod query;
pub mod rules;

pub use graph::{AttributeValue, Attributes, Edge, Network, Node, NodeId};
pub use query::{
    compile_fast_filter, compile_filter, compile_query, trim_orphans, FastFilter, Filter,
    NetworkQuery,
};
pub use rules::{
    compile_rule, evaluate, AlterRule, ConfigError, ConfigResult, CountAssertion, EdgeIndex,
    EdgeRule, EgoRule, Join, JoinSpec, Operator, RuleConfig, RuleDomain, RuleEntry,
};
