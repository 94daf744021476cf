//! Declarative rule configurations and their JSON/YAML shape
//!
//! A rule entry is serialized as `{ "type": <domain>, "options": {...},
//! "count": {...} }`, the shape produced by the rule-building UI. Alter and
//! edge options name the node or edge type under `"type"`.

use super::predicate::Operator;
use crate::graph::AttributeValue;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading rule configurations or networks
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Which part of the network a rule inspects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleDomain {
    Alter,
    Edge,
    Ego,
    Unrecognized,
}

/// Node type and attribute test
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlterRule {
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator: Option<Operator>,
    #[serde(default, skip_serializing_if = "AttributeValue::is_null")]
    pub value: AttributeValue,
}

impl AlterRule {
    /// Type membership only: `EXISTS` means "is of this type", any other
    /// operator, or none, means "is not of this type"
    pub fn of_type(node_type: impl Into<String>, operator: impl Into<Operator>) -> Self {
        Self {
            node_type: node_type.into(),
            attribute: None,
            operator: Some(operator.into()),
            value: AttributeValue::Null,
        }
    }

    /// Nodes of `node_type` whose `attribute` satisfies `operator` against `value`
    pub fn attribute(
        node_type: impl Into<String>,
        attribute: impl Into<String>,
        operator: impl Into<Operator>,
        value: impl Into<AttributeValue>,
    ) -> Self {
        Self {
            node_type: node_type.into(),
            attribute: Some(attribute.into()),
            operator: Some(operator.into()),
            value: value.into(),
        }
    }

    /// The attribute to test, treating an empty name as absent
    pub fn attribute_name(&self) -> Option<&str> {
        self.attribute.as_deref().filter(|name| !name.is_empty())
    }
}

/// Edge type existence test
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRule {
    #[serde(rename = "type")]
    pub edge_type: String,
    pub operator: Operator,
}

impl EdgeRule {
    pub fn new(edge_type: impl Into<String>, operator: impl Into<Operator>) -> Self {
        Self {
            edge_type: edge_type.into(),
            operator: operator.into(),
        }
    }
}

/// Attribute test on the ego node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EgoRule {
    pub attribute: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator: Option<Operator>,
    #[serde(default, skip_serializing_if = "AttributeValue::is_null")]
    pub value: AttributeValue,
}

impl EgoRule {
    pub fn new(
        attribute: impl Into<String>,
        operator: impl Into<Operator>,
        value: impl Into<AttributeValue>,
    ) -> Self {
        Self {
            attribute: attribute.into(),
            operator: Some(operator.into()),
            value: value.into(),
        }
    }
}

/// One rule, by domain
#[derive(Debug, Clone, PartialEq)]
pub enum RuleConfig {
    Alter(AlterRule),
    Edge(EdgeRule),
    Ego(EgoRule),
    /// A domain tag this crate does not know; never matches
    Unrecognized {
        domain: String,
        options: serde_json::Value,
    },
}

impl RuleConfig {
    pub fn domain(&self) -> RuleDomain {
        match self {
            RuleConfig::Alter(_) => RuleDomain::Alter,
            RuleConfig::Edge(_) => RuleDomain::Edge,
            RuleConfig::Ego(_) => RuleDomain::Ego,
            RuleConfig::Unrecognized { .. } => RuleDomain::Unrecognized,
        }
    }

    /// The domain tag as written in configuration
    pub fn domain_tag(&self) -> &str {
        match self {
            RuleConfig::Alter(_) => "alter",
            RuleConfig::Edge(_) => "edge",
            RuleConfig::Ego(_) => "ego",
            RuleConfig::Unrecognized { domain, .. } => domain,
        }
    }
}

/// Cardinality assertion: compare the number of matching nodes with `value`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountAssertion {
    pub operator: Operator,
    pub value: f64,
}

impl CountAssertion {
    pub fn new(operator: impl Into<Operator>, value: f64) -> Self {
        Self {
            operator: operator.into(),
            value,
        }
    }
}

/// A rule plus its optional cardinality assertion
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawRuleEntry")]
pub struct RuleEntry {
    pub rule: RuleConfig,
    pub count: Option<CountAssertion>,
}

impl RuleEntry {
    pub fn new(rule: RuleConfig) -> Self {
        Self { rule, count: None }
    }

    /// Attach a cardinality assertion (ignored for ego rules)
    pub fn with_count(mut self, operator: impl Into<Operator>, value: f64) -> Self {
        self.count = Some(CountAssertion::new(operator, value));
        self
    }
}

impl From<RuleConfig> for RuleEntry {
    fn from(rule: RuleConfig) -> Self {
        Self::new(rule)
    }
}

impl From<AlterRule> for RuleEntry {
    fn from(rule: AlterRule) -> Self {
        Self::new(RuleConfig::Alter(rule))
    }
}

impl From<EdgeRule> for RuleEntry {
    fn from(rule: EdgeRule) -> Self {
        Self::new(RuleConfig::Edge(rule))
    }
}

impl From<EgoRule> for RuleEntry {
    fn from(rule: EgoRule) -> Self {
        Self::new(RuleConfig::Ego(rule))
    }
}

#[derive(Deserialize)]
struct RawRuleEntry {
    #[serde(rename = "type")]
    domain: String,
    #[serde(default)]
    options: serde_json::Value,
    #[serde(default, alias = "assert")]
    count: Option<CountAssertion>,
}

impl TryFrom<RawRuleEntry> for RuleEntry {
    type Error = serde_json::Error;

    fn try_from(raw: RawRuleEntry) -> Result<Self, Self::Error> {
        let rule = match raw.domain.as_str() {
            "alter" => RuleConfig::Alter(serde_json::from_value(raw.options)?),
            "edge" => RuleConfig::Edge(serde_json::from_value(raw.options)?),
            "ego" => RuleConfig::Ego(serde_json::from_value(raw.options)?),
            _ => RuleConfig::Unrecognized {
                domain: raw.domain,
                options: raw.options,
            },
        };
        Ok(Self {
            rule,
            count: raw.count,
        })
    }
}

impl Serialize for RuleEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("RuleEntry", 3)?;
        state.serialize_field("type", self.rule.domain_tag())?;
        match &self.rule {
            RuleConfig::Alter(rule) => state.serialize_field("options", rule)?,
            RuleConfig::Edge(rule) => state.serialize_field("options", rule)?,
            RuleConfig::Ego(rule) => state.serialize_field("options", rule)?,
            RuleConfig::Unrecognized { options, .. } => state.serialize_field("options", options)?,
        }
        match &self.count {
            Some(count) => state.serialize_field("count", count)?,
            None => state.skip_field("count")?,
        }
        state.end()
    }
}

/// Boolean combinator for rule outcomes
///
/// Any tag other than `"AND"` reads as `Or`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Join {
    And,
    #[default]
    Or,
}

impl From<String> for Join {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "AND" => Join::And,
            "OR" => Join::Or,
            other => {
                tracing::warn!(join = other, "unrecognized join, falling back to OR");
                Join::Or
            }
        }
    }
}

impl From<Join> for String {
    fn from(join: Join) -> Self {
        match join {
            Join::And => "AND".to_string(),
            Join::Or => "OR".to_string(),
        }
    }
}

impl Join {
    /// Fold rule outcomes: `all` for AND, `any` for OR
    pub fn combine<I: IntoIterator<Item = bool>>(self, outcomes: I) -> bool {
        let mut outcomes = outcomes.into_iter();
        match self {
            Join::And => outcomes.all(|passed| passed),
            Join::Or => outcomes.any(|passed| passed),
        }
    }
}

/// An ordered rule set and the join combining it
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct JoinSpec {
    #[serde(default)]
    pub rules: Vec<RuleEntry>,
    #[serde(default)]
    pub join: Join,
}

impl JoinSpec {
    pub fn new(join: Join, rules: Vec<RuleEntry>) -> Self {
        Self { rules, join }
    }

    pub fn and<I, R>(rules: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<RuleEntry>,
    {
        Self::new(Join::And, rules.into_iter().map(Into::into).collect())
    }

    pub fn or<I, R>(rules: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<RuleEntry>,
    {
        Self::new(Join::Or, rules.into_iter().map(Into::into).collect())
    }

    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

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
}

pub(crate) fn is_yaml_path(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml" | "yml")
    )
}
