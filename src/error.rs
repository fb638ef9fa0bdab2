//! Error types for clause evaluation.
//!
//! Matching failure is a normal outcome carried in `MatchResult`, not an
//! error. The only abnormal condition the engine itself reports is an
//! ordered clause list running out with no eligible clause; panics raised
//! by caller-supplied guards and handlers propagate unmodified.

use miette::Diagnostic;
use thiserror::Error;

/// Errors that can occur while evaluating an ordered clause list
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum ClauseError {
    #[error("no clause matched the subject value")]
    #[diagnostic(
        code(matchbox::clauses::no_clause_matched),
        help("add a trailing clause with a wildcard pattern to provide a default")
    )]
    NoClauseMatched,
}

/// Type alias for clause evaluation results
pub type Result<T> = std::result::Result<T, ClauseError>;
