//! Tagged pattern representation and template parsing.
//!
//! Patterns live in the same data universe as subject values but are
//! interpreted structurally: wildcard and capture strings, literals,
//! sequences with an optional tail capture, and exact-arity records.
//! `Pattern::from_value` interprets a plain data value as a pattern,
//! so callers can write patterns as ordinary `Value` templates.

use crate::value::Value;
use std::collections::BTreeMap;

/// A structural pattern, dispatched on a closed tag set.
#[derive(Debug, Clone, PartialEq)]
pub enum Pattern {
    /// Matches anything, binds nothing
    Wildcard,
    /// Matches anything, binds the whole subject to the name
    Capture(String),
    /// Matches only an identical-kind, identical-value subject
    Literal(Value),
    /// Ordered sequence pattern; `rest` captures the remaining suffix
    /// of the subject as a list when present
    Sequence {
        elements: Vec<Pattern>,
        rest: Option<String>,
    },
    /// Record pattern with exact key-set matching; sorted by construction
    Record(BTreeMap<String, Pattern>),
}

impl Pattern {
    /// Create a capture pattern binding `name`
    pub fn capture(name: impl Into<String>) -> Self {
        Pattern::Capture(name.into())
    }

    /// Create a literal pattern from any value
    pub fn literal(value: impl Into<Value>) -> Self {
        Pattern::Literal(value.into())
    }

    /// Create a fixed-length sequence pattern
    pub fn sequence(elements: Vec<Pattern>) -> Self {
        Pattern::Sequence {
            elements,
            rest: None,
        }
    }

    /// Create a sequence pattern whose tail is captured under `rest`
    pub fn sequence_with_rest(elements: Vec<Pattern>, rest: impl Into<String>) -> Self {
        Pattern::Sequence {
            elements,
            rest: Some(rest.into()),
        }
    }

    /// Create a record pattern from key/pattern pairs
    pub fn record<K, I>(fields: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Pattern)>,
    {
        Pattern::Record(fields.into_iter().map(|(k, p)| (k.into(), p)).collect())
    }

    /// Interpret a plain data value as a pattern.
    ///
    /// A string starting with `_` is a wildcard; a string starting with `$`
    /// captures the remainder of its name (possibly empty). A list whose
    /// last element is a string of the form `...$name` becomes a
    /// tail-capture sequence; a `...$` string in any other position is an
    /// ordinary string literal. Lists and records recurse; everything else
    /// is a literal.
    pub fn from_value(template: &Value) -> Self {
        match template {
            Value::String(s) if s.starts_with('_') => Pattern::Wildcard,
            Value::String(s) if s.starts_with('$') => Pattern::Capture(s[1..].to_string()),
            Value::List(items) => {
                let rest = match items.last() {
                    Some(Value::String(s)) if s.starts_with("...$") => Some(s[4..].to_string()),
                    _ => None,
                };
                let fixed = if rest.is_some() {
                    &items[..items.len() - 1]
                } else {
                    &items[..]
                };
                Pattern::Sequence {
                    elements: fixed.iter().map(Pattern::from_value).collect(),
                    rest,
                }
            }
            Value::Record(fields) => Pattern::Record(
                fields
                    .iter()
                    .map(|(k, v)| (k.clone(), Pattern::from_value(v)))
                    .collect(),
            ),
            other => Pattern::Literal(other.clone()),
        }
    }

    /// Collect every capture name this pattern can bind, in binding order.
    ///
    /// Duplicate names are reported each time they occur; the matcher's
    /// merge policy means the last occurrence wins at match time.
    pub fn bound_names(&self) -> Vec<String> {
        let mut names = Vec::new();
        self.collect_bound_names(&mut names);
        names
    }

    fn collect_bound_names(&self, names: &mut Vec<String>) {
        match self {
            Pattern::Wildcard | Pattern::Literal(_) => {}
            Pattern::Capture(name) => names.push(name.clone()),
            Pattern::Sequence { elements, rest } => {
                for element in elements {
                    element.collect_bound_names(names);
                }
                if let Some(rest_name) = rest {
                    names.push(rest_name.clone());
                }
            }
            Pattern::Record(fields) => {
                for pattern in fields.values() {
                    pattern.collect_bound_names(names);
                }
            }
        }
    }

    /// Check whether this pattern matches every possible value.
    pub fn is_irrefutable(&self) -> bool {
        match self {
            Pattern::Wildcard | Pattern::Capture(_) => true,
            // Literals, fixed sequences and records all require a specific
            // subject kind, so they can always be refuted
            Pattern::Literal(_) | Pattern::Sequence { .. } | Pattern::Record(_) => false,
        }
    }
}

impl From<&Value> for Pattern {
    fn from(template: &Value) -> Self {
        Pattern::from_value(template)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_wildcard_template() {
        assert_eq!(Pattern::from_value(&Value::from("_")), Pattern::Wildcard);
        assert_eq!(
            Pattern::from_value(&Value::from("_anything")),
            Pattern::Wildcard
        );
    }

    #[test]
    fn test_capture_template() {
        assert_eq!(
            Pattern::from_value(&Value::from("$x")),
            Pattern::capture("x")
        );
        // A bare `$` captures under the empty name, as the template syntax allows
        assert_eq!(Pattern::from_value(&Value::from("$")), Pattern::capture(""));
    }

    #[test]
    fn test_literal_template() {
        assert_eq!(
            Pattern::from_value(&Value::from("hello")),
            Pattern::literal("hello")
        );
        assert_eq!(
            Pattern::from_value(&Value::from(42.0)),
            Pattern::literal(42.0)
        );
        assert_eq!(
            Pattern::from_value(&Value::Null),
            Pattern::Literal(Value::Null)
        );
    }

    #[test]
    fn test_tail_capture_template() {
        let template = Value::List(vec![Value::from("a"), Value::from("...$rest")]);
        assert_eq!(
            Pattern::from_value(&template),
            Pattern::sequence_with_rest(vec![Pattern::literal("a")], "rest")
        );
    }

    #[test]
    fn test_rest_marker_only_in_last_position() {
        let template = Value::List(vec![Value::from("...$rest"), Value::from("a")]);
        assert_eq!(
            Pattern::from_value(&template),
            Pattern::sequence(vec![Pattern::literal("...$rest"), Pattern::literal("a")])
        );
    }

    #[test]
    fn test_record_template_recurses() {
        let template = Value::record([("a", Value::from("$x")), ("b", Value::from(1.0))]);
        assert_eq!(
            Pattern::from_value(&template),
            Pattern::record([("a", Pattern::capture("x")), ("b", Pattern::literal(1.0))])
        );
    }

    #[test]
    fn test_bound_names_in_binding_order() {
        let pattern = Pattern::sequence_with_rest(
            vec![
                Pattern::capture("x"),
                Pattern::record([("k", Pattern::capture("y"))]),
            ],
            "rest",
        );
        assert_eq!(pattern.bound_names(), vec!["x", "y", "rest"]);
    }

    #[test]
    fn test_irrefutable_patterns() {
        assert!(Pattern::Wildcard.is_irrefutable());
        assert!(Pattern::capture("x").is_irrefutable());
        assert!(!Pattern::literal(42.0).is_irrefutable());
        assert!(!Pattern::sequence(vec![Pattern::Wildcard]).is_irrefutable());
        assert!(!Pattern::record([("a", Pattern::Wildcard)]).is_irrefutable());
    }
}
