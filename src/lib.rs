//! Structural pattern matching for dynamic, tree-shaped values.
//!
//! Patterns are plain data from the same universe as subject values,
//! interpreted structurally: wildcard and capture placeholders, literals,
//! fixed and tail-capturing sequences, and exact-arity records. On top of
//! the pure recursive matcher sit two clause-evaluation shapes with the
//! same semantics: a fluent, latching `case → when → run` pipeline over a
//! single subject, and an ordered clause list where the first eligible
//! clause wins.

pub mod clauses;
pub mod error;
pub mod evaluator;
pub mod matcher;
pub mod pattern;
pub mod value;

// Include tests directory with all acceptance test modules
#[cfg(test)]
#[path = "tests/mod.rs"]
pub mod tests;

// Re-export public API
pub use clauses::{Clause, evaluate_clauses};
pub use error::{ClauseError, Result};
pub use evaluator::{CaseEvaluator, begin_match};
pub use matcher::{Bindings, MatchResult, match_value};
pub use pattern::Pattern;
pub use value::Value;

/// Match a plain data template against a subject value.
///
/// Convenience wrapper that interprets the template as a pattern first;
/// equivalent to `match_value(&Pattern::from_value(template), value)`.
pub fn match_template(template: &Value, value: &Value) -> MatchResult {
    match_value(&Pattern::from_value(template), value)
}
