// Copyright the graph contributors.
// Licensed under the Apache License, Version 2.0 (see LICENSE).

use std::fmt;

/// Errors surfaced by the graph library's public API.
///
/// `PreconditionUnmet` is the only variant produced at runtime by default (see the crate-level
/// `unchecked` feature, which skips the checks that would otherwise raise it). Internal invariant
/// violations are asserted via `debug_assert!` at the call site instead of being represented here,
/// matching the checked/unchecked split described in the crate documentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A caller-observable precondition was not met.
    PreconditionUnmet(&'static str),
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::PreconditionUnmet(msg) => write!(f, "precondition unmet: {msg}"),
        }
    }
}

impl std::error::Error for GraphError {}

pub type GraphResult<T> = Result<T, GraphError>;

/// Raises a `PreconditionUnmet` error unless the `unchecked` feature is enabled, in which case the
/// check is skipped entirely (the call site is expected to uphold the condition itself).
#[macro_export]
macro_rules! check_precondition {
    ($cond:expr, $msg:literal) => {{
        #[cfg(not(feature = "unchecked"))]
        if !$cond {
            return Err($crate::error::GraphError::PreconditionUnmet($msg));
        }
    }};
}
