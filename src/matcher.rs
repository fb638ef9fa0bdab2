//! Recursive structural matcher.
//!
//! `match_value` is a pure function from a pattern and a subject value to a
//! `MatchResult`: a matched flag plus the bindings captured along the way.
//! Matching failure is a normal outcome, not an error; nothing here panics
//! on well-formed input and no shared state is touched, so the function is
//! safe to call reentrantly from independent call sites.

use crate::pattern::Pattern;
use crate::value::Value;
use std::collections::{BTreeMap, HashMap};

/// Variables bound by a successful match, keyed by capture name.
pub type Bindings = HashMap<String, Value>;

/// Result of matching a pattern against a value.
///
/// When `matched` is false the bindings content carries no meaning and
/// callers must not rely on it.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    /// Whether the match was successful
    pub matched: bool,

    /// Variables bound by the pattern match
    pub bindings: Bindings,
}

impl MatchResult {
    /// Create a successful match with bindings
    pub fn success(bindings: Bindings) -> Self {
        Self {
            matched: true,
            bindings,
        }
    }

    /// Create an empty successful match (no bindings)
    pub fn empty_success() -> Self {
        Self {
            matched: true,
            bindings: Bindings::new(),
        }
    }

    /// Create a failed match
    pub fn failure() -> Self {
        Self {
            matched: false,
            bindings: Bindings::new(),
        }
    }

    /// Merge another match result into this one.
    ///
    /// Merging a failed result marks this one failed. Merging a successful
    /// result unions the bindings; a capture name already present is
    /// silently overwritten, so the binding merged last wins. No conflict
    /// is ever raised for duplicate names.
    pub fn merge(&mut self, other: MatchResult) {
        if !other.matched {
            self.matched = false;
            return;
        }
        self.bindings.extend(other.bindings);
    }

    /// Bind a single name directly, overwriting any earlier binding
    pub fn bind(&mut self, name: impl Into<String>, value: Value) {
        self.bindings.insert(name.into(), value);
    }
}

/// Match a pattern against a subject value.
///
/// Wildcards and captures absorb the subject without inspecting its shape;
/// literals require identical-kind, identical-value subjects; sequences and
/// records recurse per position or field, short-circuiting on the first
/// failing sub-match. Bindings accumulate left-to-right for sequences and
/// in sorted-key order for records, later writes overwriting earlier ones.
pub fn match_value(pattern: &Pattern, value: &Value) -> MatchResult {
    match pattern {
        Pattern::Wildcard => MatchResult::empty_success(),

        Pattern::Capture(name) => {
            let mut result = MatchResult::empty_success();
            result.bind(name.clone(), value.clone());
            result
        }

        Pattern::Literal(literal) => {
            if literal_matches(literal, value) {
                MatchResult::empty_success()
            } else {
                MatchResult::failure()
            }
        }

        Pattern::Sequence { elements, rest } => match_sequence(elements, rest.as_deref(), value),

        Pattern::Record(fields) => match_record(fields, value),
    }
}

/// Strict same-kind equality for literal patterns.
///
/// The two absence sentinels match only their own kind. A NaN number
/// literal is never accepted: NaN compares unequal to everything including
/// itself, and the source semantics this reimplements carried a
/// NaN-sentinel arm that was likewise never taken. We keep the observable
/// no-op without a dead match arm.
fn literal_matches(literal: &Value, value: &Value) -> bool {
    match (literal, value) {
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => a == b,
        (Value::Boolean(a), Value::Boolean(b)) => a == b,
        (Value::BigInt(a), Value::BigInt(b)) => a == b,
        (Value::Null, Value::Null) | (Value::Undefined, Value::Undefined) => true,
        _ => false,
    }
}

/// Match a sequence pattern, with or without a tail capture.
fn match_sequence(elements: &[Pattern], rest: Option<&str>, value: &Value) -> MatchResult {
    let Value::List(items) = value else {
        return MatchResult::failure();
    };

    match rest {
        Some(rest_name) => {
            // Tail capture: the subject needs at least the fixed prefix
            if items.len() < elements.len() {
                return MatchResult::failure();
            }

            let mut result = MatchResult::empty_success();
            for (element, item) in elements.iter().zip(items.iter()) {
                let sub = match_value(element, item);
                if !sub.matched {
                    return MatchResult::failure();
                }
                result.merge(sub);
            }

            // Everything past the fixed prefix, possibly empty
            let tail = Value::List(items[elements.len()..].to_vec());
            result.bind(rest_name, tail);
            result
        }

        None => {
            if items.len() != elements.len() {
                return MatchResult::failure();
            }

            let mut result = MatchResult::empty_success();
            for (element, item) in elements.iter().zip(items.iter()) {
                let sub = match_value(element, item);
                if !sub.matched {
                    return MatchResult::failure();
                }
                result.merge(sub);
            }
            result
        }
    }
}

/// Match a record pattern with exact key-set arity.
fn match_record(fields: &BTreeMap<String, Pattern>, value: &Value) -> MatchResult {
    let Value::Record(entries) = value else {
        return MatchResult::failure();
    };

    // The pattern side is sorted by construction; sort the value side and
    // require element-wise equal key lists. A subject key absent from the
    // pattern fails the match just as a missing pattern key does.
    let mut value_keys: Vec<&String> = entries.keys().collect();
    value_keys.sort();

    if value_keys.len() != fields.len()
        || !fields.keys().zip(value_keys.iter()).all(|(a, b)| a == *b)
    {
        return MatchResult::failure();
    }

    let mut result = MatchResult::empty_success();
    for (key, pattern) in fields {
        let sub = match_value(pattern, &entries[key]);
        if !sub.matched {
            return MatchResult::failure();
        }
        result.merge(sub);
    }
    result
}
