//! Ordered-clause-list evaluation.
//!
//! The list form of the pipeline: each clause pairs a pattern and a
//! subject with a handler and an optional guard. Evaluation walks the
//! clauses in order and the first eligible one wins; exhausting the list
//! is reported as an explicit error rather than falling through to an
//! implicit default.

use crate::error::{ClauseError, Result};
use crate::matcher::{Bindings, match_value};
use crate::pattern::Pattern;
use crate::value::Value;

/// One clause of an ordered evaluation: a pattern, the subject it is
/// matched against, an optional guard, and the handler to run on success.
pub struct Clause<R> {
    pattern: Pattern,
    subject: Value,
    guard: Option<Box<dyn FnOnce(&Bindings) -> bool>>,
    handler: Box<dyn FnOnce(&Bindings) -> R>,
}

impl<R> Clause<R> {
    /// Create a clause from a pattern, a subject and a handler
    pub fn new(
        pattern: impl Into<Pattern>,
        subject: Value,
        handler: impl FnOnce(&Bindings) -> R + 'static,
    ) -> Self {
        Self {
            pattern: pattern.into(),
            subject,
            guard: None,
            handler: Box::new(handler),
        }
    }

    /// Attach a guard; a clause whose pattern matches but whose guard
    /// returns false is ineligible and evaluation moves on
    pub fn with_guard(mut self, guard: impl FnOnce(&Bindings) -> bool + 'static) -> Self {
        self.guard = Some(Box::new(guard));
        self
    }
}

impl<R> std::fmt::Debug for Clause<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Clause")
            .field("pattern", &self.pattern)
            .field("subject", &self.subject)
            .field("guarded", &self.guard.is_some())
            .finish_non_exhaustive()
    }
}

/// Evaluate clauses in order, returning the first eligible handler's result.
///
/// Each clause's pattern is matched against that clause's own subject. The
/// first clause that matches and passes its guard has its handler invoked
/// with the captured bindings, and that result is returned immediately; no
/// clause is revisited and there is no backtracking. An exhausted list
/// yields `ClauseError::NoClauseMatched`.
pub fn evaluate_clauses<R>(clauses: impl IntoIterator<Item = Clause<R>>) -> Result<R> {
    for clause in clauses {
        let outcome = match_value(&clause.pattern, &clause.subject);
        if !outcome.matched {
            continue;
        }

        if let Some(guard) = clause.guard {
            if !guard(&outcome.bindings) {
                continue;
            }
        }

        return Ok((clause.handler)(&outcome.bindings));
    }

    Err(ClauseError::NoClauseMatched)
}
