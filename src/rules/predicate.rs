//! Comparison and existence predicates over attribute values
//!
//! Every predicate is total: mismatched shapes and unknown operators
//! evaluate to `false` rather than failing.

use crate::graph::AttributeValue;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::convert::Infallible;
use std::str::FromStr;

/// Operator tags accepted in rule configurations
///
/// Unrecognized tags are kept as `Unknown` so a configuration round-trips
/// unchanged; they never match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Operator {
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
    Exactly,
    Not,
    Exists,
    NotExists,
    Includes,
    Excludes,
    Count,
    CountNot,
    CountAny,
    CountNone,
    CountGreaterThan,
    CountGreaterThanOrEqual,
    CountLessThan,
    CountLessThanOrEqual,
    Unknown(String),
}

impl Operator {
    pub fn as_str(&self) -> &str {
        match self {
            Operator::GreaterThan => "GREATER_THAN",
            Operator::GreaterThanOrEqual => "GREATER_THAN_OR_EQUAL",
            Operator::LessThan => "LESS_THAN",
            Operator::LessThanOrEqual => "LESS_THAN_OR_EQUAL",
            Operator::Exactly => "EXACTLY",
            Operator::Not => "NOT",
            Operator::Exists => "EXISTS",
            Operator::NotExists => "NOT_EXISTS",
            Operator::Includes => "INCLUDES",
            Operator::Excludes => "EXCLUDES",
            Operator::Count => "COUNT",
            Operator::CountNot => "COUNT_NOT",
            Operator::CountAny => "COUNT_ANY",
            Operator::CountNone => "COUNT_NONE",
            Operator::CountGreaterThan => "COUNT_GREATER_THAN",
            Operator::CountGreaterThanOrEqual => "COUNT_GREATER_THAN_OR_EQUAL",
            Operator::CountLessThan => "COUNT_LESS_THAN",
            Operator::CountLessThanOrEqual => "COUNT_LESS_THAN_OR_EQUAL",
            Operator::Unknown(tag) => tag,
        }
    }
}

impl FromStr for Operator {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "GREATER_THAN" => Operator::GreaterThan,
            "GREATER_THAN_OR_EQUAL" => Operator::GreaterThanOrEqual,
            "LESS_THAN" => Operator::LessThan,
            "LESS_THAN_OR_EQUAL" => Operator::LessThanOrEqual,
            "EXACTLY" => Operator::Exactly,
            "NOT" => Operator::Not,
            "EXISTS" => Operator::Exists,
            "NOT_EXISTS" => Operator::NotExists,
            "INCLUDES" => Operator::Includes,
            "EXCLUDES" => Operator::Excludes,
            "COUNT" => Operator::Count,
            "COUNT_NOT" => Operator::CountNot,
            "COUNT_ANY" => Operator::CountAny,
            "COUNT_NONE" => Operator::CountNone,
            "COUNT_GREATER_THAN" => Operator::CountGreaterThan,
            "COUNT_GREATER_THAN_OR_EQUAL" => Operator::CountGreaterThanOrEqual,
            "COUNT_LESS_THAN" => Operator::CountLessThan,
            "COUNT_LESS_THAN_OR_EQUAL" => Operator::CountLessThanOrEqual,
            other => Operator::Unknown(other.to_string()),
        })
    }
}

impl From<String> for Operator {
    fn from(s: String) -> Self {
        match s.parse() {
            Ok(op) => op,
            Err(never) => match never {},
        }
    }
}

impl From<&str> for Operator {
    fn from(s: &str) -> Self {
        Operator::from(s.to_string())
    }
}

impl From<Operator> for String {
    fn from(op: Operator) -> Self {
        op.as_str().to_string()
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compare `value` with `other` under `operator`
///
/// ```
/// use netquery::{evaluate, AttributeValue, Operator};
///
/// let age = AttributeValue::Int(19);
/// assert!(evaluate(&Operator::LessThan, &age, &AttributeValue::Int(20)));
/// ```
pub fn evaluate(operator: &Operator, value: &AttributeValue, other: &AttributeValue) -> bool {
    match operator {
        Operator::GreaterThan | Operator::CountGreaterThan => {
            compare(value, other) == Some(Ordering::Greater)
        }
        Operator::GreaterThanOrEqual | Operator::CountGreaterThanOrEqual => {
            matches!(compare(value, other), Some(Ordering::Greater | Ordering::Equal))
        }
        Operator::LessThan | Operator::CountLessThan => {
            compare(value, other) == Some(Ordering::Less)
        }
        Operator::LessThanOrEqual | Operator::CountLessThanOrEqual => {
            matches!(compare(value, other), Some(Ordering::Less | Ordering::Equal))
        }
        Operator::Exactly | Operator::Count => deep_equal(value, other),
        Operator::Not | Operator::CountNot => !deep_equal(value, other),
        Operator::Exists => !value.is_null(),
        Operator::NotExists => value.is_null(),
        Operator::Includes => includes(value, other, false).unwrap_or(false),
        Operator::Excludes => includes(value, other, true).map(|found| !found).unwrap_or(false),
        Operator::CountAny => value.as_f64().is_some_and(|n| n > 0.0),
        Operator::CountNone => value.as_f64().is_some_and(|n| n == 0.0),
        Operator::Unknown(_) => false,
    }
}

/// `evaluate` for configurations where the operator may be absent
pub fn evaluate_optional(
    operator: Option<&Operator>,
    value: &AttributeValue,
    other: &AttributeValue,
) -> bool {
    operator.is_some_and(|op| evaluate(op, value, other))
}

/// Evaluate a cardinality assertion against a match count
pub fn evaluate_count(operator: &Operator, count: usize, expected: f64) -> bool {
    evaluate(
        operator,
        &AttributeValue::Int(count as i64),
        &AttributeValue::Float(expected),
    )
}

fn compare(value: &AttributeValue, other: &AttributeValue) -> Option<Ordering> {
    match (value, other) {
        (AttributeValue::String(a), AttributeValue::String(b)) => Some(a.cmp(b)),
        (AttributeValue::Bool(a), AttributeValue::Bool(b)) => Some(a.cmp(b)),
        _ => value.as_f64()?.partial_cmp(&other.as_f64()?),
    }
}

fn deep_equal(value: &AttributeValue, other: &AttributeValue) -> bool {
    match (value, other) {
        (AttributeValue::Array(a), AttributeValue::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| deep_equal(x, y))
        }
        (
            AttributeValue::Int(_) | AttributeValue::Float(_),
            AttributeValue::Int(_) | AttributeValue::Float(_),
        ) => value.as_f64() == other.as_f64(),
        _ => value == other,
    }
}

/// Membership of `other` in `value`; `None` when `value` is not a collection
///
/// An array `other` asks whether all of its elements are present; with
/// `any_needle` set it asks whether any of them is.
fn includes(value: &AttributeValue, other: &AttributeValue, any_needle: bool) -> Option<bool> {
    match value {
        AttributeValue::Array(items) => {
            let contains =
                |needle: &AttributeValue| items.iter().any(|item| deep_equal(item, needle));
            Some(match other {
                AttributeValue::Array(needles) if any_needle => needles.iter().any(contains),
                AttributeValue::Array(needles) => needles.iter().all(contains),
                needle => contains(needle),
            })
        }
        AttributeValue::String(haystack) => other.as_str().map(|needle| haystack.contains(needle)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(i: i64) -> AttributeValue {
        AttributeValue::Int(i)
    }

    fn float(f: f64) -> AttributeValue {
        AttributeValue::Float(f)
    }

    #[test]
    fn absent_operator_is_false() {
        assert!(!evaluate_optional(None, &AttributeValue::Null, &AttributeValue::Null));
    }

    #[test]
    fn unknown_operator_is_false() {
        let op = Operator::from("GREATER_THAN_OR_EQUAL_TO");
        assert_eq!(op, Operator::Unknown("GREATER_THAN_OR_EQUAL_TO".into()));
        assert!(!evaluate(&op, &int(3), &int(2)));
    }

    #[test]
    fn greater_than() {
        assert!(evaluate(&Operator::GreaterThan, &float(1.5), &int(1)));
        assert!(!evaluate(&Operator::GreaterThan, &int(2), &int(2)));
    }

    #[test]
    fn less_than() {
        assert!(evaluate(&Operator::LessThan, &int(1), &float(1.5)));
        assert!(!evaluate(&Operator::LessThan, &int(2), &int(2)));
    }

    #[test]
    fn greater_than_or_equal() {
        assert!(evaluate(&Operator::GreaterThanOrEqual, &float(1.5), &int(1)));
        assert!(evaluate(&Operator::GreaterThanOrEqual, &int(2), &int(2)));
        assert!(!evaluate(&Operator::GreaterThanOrEqual, &int(2), &int(3)));
    }

    #[test]
    fn less_than_or_equal() {
        assert!(evaluate(&Operator::LessThanOrEqual, &int(1), &float(1.5)));
        assert!(evaluate(&Operator::LessThanOrEqual, &int(2), &int(2)));
        assert!(!evaluate(&Operator::LessThanOrEqual, &int(3), &int(2)));
    }

    #[test]
    fn ordering_across_shapes_is_false() {
        let name = AttributeValue::from("Rufus");
        assert!(!evaluate(&Operator::LessThan, &name, &int(20)));
        assert!(!evaluate(&Operator::GreaterThan, &AttributeValue::Null, &int(0)));
        assert!(!evaluate(&Operator::LessThan, &AttributeValue::Null, &int(20)));
    }

    #[test]
    fn strings_order_lexicographically() {
        let a = AttributeValue::from("Bill");
        let b = AttributeValue::from("Ted");
        assert!(evaluate(&Operator::LessThan, &a, &b));
        assert!(evaluate(&Operator::GreaterThanOrEqual, &b, &b));
    }

    #[test]
    fn exactly() {
        assert!(evaluate(&Operator::Exactly, &int(1), &int(1)));
        assert!(!evaluate(&Operator::Exactly, &int(2), &int(1)));
        assert!(evaluate(&Operator::Exactly, &int(1), &float(1.0)));
    }

    #[test]
    fn exactly_is_structural_on_arrays() {
        let a = AttributeValue::from(vec![1, 2]);
        let b = AttributeValue::Array(vec![float(1.0), int(2)]);
        let c = AttributeValue::from(vec![2, 1]);
        assert!(evaluate(&Operator::Exactly, &a, &b));
        assert!(!evaluate(&Operator::Exactly, &a, &c));
    }

    #[test]
    fn not() {
        assert!(!evaluate(&Operator::Not, &int(1), &int(1)));
        assert!(evaluate(&Operator::Not, &int(2), &int(1)));
    }

    #[test]
    fn exists() {
        assert!(!evaluate(&Operator::Exists, &AttributeValue::Null, &AttributeValue::Null));
        assert!(evaluate(&Operator::Exists, &int(1), &AttributeValue::Null));
        assert!(evaluate(&Operator::Exists, &AttributeValue::Bool(false), &AttributeValue::Null));
    }

    #[test]
    fn not_exists() {
        assert!(!evaluate(&Operator::NotExists, &int(1), &AttributeValue::Null));
        assert!(evaluate(&Operator::NotExists, &AttributeValue::Null, &AttributeValue::Null));
    }

    #[test]
    fn includes_scalar_in_array() {
        let colours = AttributeValue::from(vec!["red", "green"]);
        assert!(evaluate(&Operator::Includes, &colours, &"red".into()));
        assert!(!evaluate(&Operator::Includes, &colours, &"blue".into()));
        assert!(!evaluate(&Operator::Excludes, &colours, &"red".into()));
        assert!(evaluate(&Operator::Excludes, &colours, &"blue".into()));
    }

    #[test]
    fn includes_array_is_subset_test() {
        let colours = AttributeValue::from(vec!["red", "green", "blue"]);
        assert!(evaluate(&Operator::Includes, &colours, &vec!["red", "blue"].into()));
        assert!(!evaluate(&Operator::Includes, &colours, &vec!["red", "pink"].into()));
    }

    #[test]
    fn excludes_array_requires_no_overlap() {
        let colours = AttributeValue::from(vec!["red", "green"]);
        assert!(evaluate(&Operator::Excludes, &colours, &vec!["pink", "blue"].into()));
        assert!(!evaluate(&Operator::Excludes, &colours, &vec!["pink", "red"].into()));
    }

    #[test]
    fn includes_on_string_is_substring_test() {
        let name = AttributeValue::from("Theodore");
        assert!(evaluate(&Operator::Includes, &name, &"odor".into()));
        assert!(!evaluate(&Operator::Includes, &name, &"Ted".into()));
        assert!(evaluate(&Operator::Excludes, &name, &"Ted".into()));
    }

    #[test]
    fn includes_on_non_collection_is_false_both_ways() {
        for value in [AttributeValue::Null, int(3), AttributeValue::Bool(true)] {
            assert!(!evaluate(&Operator::Includes, &value, &int(3)));
            assert!(!evaluate(&Operator::Excludes, &value, &int(3)));
        }
        let name = AttributeValue::from("33");
        assert!(!evaluate(&Operator::Includes, &name, &int(3)));
        assert!(!evaluate(&Operator::Excludes, &name, &int(3)));
    }

    #[test]
    fn count_operators_mirror_value_operators() {
        assert!(evaluate_count(&Operator::Count, 2, 2.0));
        assert!(evaluate_count(&Operator::CountNot, 3, 2.0));
        assert!(evaluate_count(&Operator::CountGreaterThan, 3, 2.0));
        assert!(evaluate_count(&Operator::CountGreaterThanOrEqual, 2, 2.0));
        assert!(evaluate_count(&Operator::CountLessThan, 1, 2.0));
        assert!(evaluate_count(&Operator::CountLessThanOrEqual, 2, 2.0));
        assert!(!evaluate_count(&Operator::CountLessThan, 2, 2.0));
    }

    #[test]
    fn count_any_and_none_ignore_other() {
        assert!(evaluate_count(&Operator::CountAny, 1, 0.0));
        assert!(!evaluate_count(&Operator::CountAny, 0, 5.0));
        assert!(evaluate_count(&Operator::CountNone, 0, 5.0));
        assert!(!evaluate_count(&Operator::CountNone, 4, 0.0));
    }

    #[test]
    fn plain_operators_work_on_counts() {
        assert!(evaluate_count(&Operator::GreaterThanOrEqual, 2, 2.0));
        assert!(evaluate_count(&Operator::Exists, 0, 0.0));
    }

    #[test]
    fn operator_tags_roundtrip() {
        let json = serde_json::to_string(&Operator::CountGreaterThanOrEqual).unwrap();
        assert_eq!(json, "\"COUNT_GREATER_THAN_OR_EQUAL\"");

        let op: Operator = serde_json::from_str("\"SOMETIMES\"").unwrap();
        assert_eq!(op.to_string(), "SOMETIMES");
    }
}
