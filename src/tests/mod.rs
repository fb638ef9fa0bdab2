//! Acceptance tests for the structural matching engine.
//!
//! These exercise the public API end to end: template parsing feeding the
//! recursive matcher, and both clause-evaluation shapes over realistic
//! subjects.
