//! Fluent case pipeline over one fixed subject value.
//!
//! A `CaseEvaluator` is a small state machine driven by chained builder
//! calls: `case` tries a pattern against the subject, `when` filters the
//! tentative match with a caller predicate, `otherwise` accepts it
//! unconditionally, and `run` invokes the handler and latches the result.
//! Once latched the evaluator is inert and every later call is a no-op, so
//! the first clause to match and pass its filter wins with no backtracking.

use crate::matcher::{Bindings, MatchResult, match_value};
use crate::pattern::Pattern;
use crate::value::Value;

/// Lifecycle of the pipeline.
///
/// `Resolved` is terminal and absorbing: every builder call checks for it
/// first and passes the evaluator through unchanged.
#[derive(Debug)]
enum EvaluatorState<R> {
    /// No case has been tried yet
    Pending,
    /// The most recent `case` result, plus the filter flag set by
    /// `when`/`otherwise`
    Tentative { result: MatchResult, accepted: bool },
    /// A handler has run; the pipeline result is latched
    Resolved(R),
}

/// Evaluates an ordered chain of `case → [when|otherwise] → run` groups
/// against one subject value.
///
/// Owned exclusively by the call chain that constructed it; every method
/// consumes and returns `self`.
#[derive(Debug)]
pub struct CaseEvaluator<R> {
    subject: Value,
    state: EvaluatorState<R>,
}

impl<R> CaseEvaluator<R> {
    /// Create a pipeline over a fixed subject value
    pub fn new(subject: Value) -> Self {
        Self {
            subject,
            state: EvaluatorState::Pending,
        }
    }

    /// Try a pattern against the subject, making it the current clause.
    ///
    /// The tentative match starts accepted; a following `when` may reject
    /// it. No-op once a result is latched.
    pub fn case(mut self, pattern: impl Into<Pattern>) -> Self {
        if matches!(self.state, EvaluatorState::Resolved(_)) {
            return self;
        }

        let result = match_value(&pattern.into(), &self.subject);
        self.state = EvaluatorState::Tentative {
            result,
            accepted: true,
        };
        self
    }

    /// Filter the current clause with a predicate over its bindings.
    ///
    /// Only consulted when the current match succeeded; on a failed match
    /// the flag is left untouched, which is irrelevant since a
    /// non-matching clause can never run. No-op once latched or before any
    /// `case`.
    pub fn when(mut self, predicate: impl FnOnce(&Bindings) -> bool) -> Self {
        if let EvaluatorState::Tentative { result, accepted } = &mut self.state {
            if result.matched {
                *accepted = predicate(&result.bindings);
            }
        }
        self
    }

    /// Unconditionally accept the current clause.
    ///
    /// The predicate parameter exists only for call-site symmetry with
    /// `when` and is never invoked. Typically used on the final clause as
    /// a default.
    pub fn otherwise(mut self, _predicate: impl FnOnce(&Bindings) -> bool) -> Self {
        if let EvaluatorState::Tentative { accepted, .. } = &mut self.state {
            *accepted = true;
        }
        self
    }

    /// Run the handler if the current clause matched and passed its filter,
    /// latching its return value as the pipeline result.
    pub fn run(mut self, handler: impl FnOnce(&Bindings) -> R) -> Self {
        if let EvaluatorState::Tentative { result, accepted } = &self.state {
            if result.matched && *accepted {
                let outcome = handler(&result.bindings);
                self.state = EvaluatorState::Resolved(outcome);
            }
        }
        self
    }

    /// Yield the latched result, or `None` if no clause ever
    /// matched-and-passed.
    pub fn finish(self) -> Option<R> {
        match self.state {
            EvaluatorState::Resolved(result) => Some(result),
            EvaluatorState::Pending | EvaluatorState::Tentative { .. } => None,
        }
    }
}

/// Begin a fluent case pipeline over a subject value.
pub fn begin_match<R>(subject: Value) -> CaseEvaluator<R> {
    CaseEvaluator::new(subject)
}
