//! Rule configuration, compilation, and the predicates rules are built from

mod compile;
mod config;
mod index;
mod predicate;

pub use compile::{compile_rule, MatchContext, Matcher};
pub use config::{
    AlterRule, ConfigError, ConfigResult, CountAssertion, EdgeRule, EgoRule, Join, JoinSpec,
    RuleConfig, RuleDomain, RuleEntry,
};
pub(crate) use config::is_yaml_path;
pub use index::EdgeIndex;
pub use predicate::{evaluate, evaluate_count, evaluate_optional, Operator};
