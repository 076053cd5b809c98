//! Error type for affordance construction.

use thiserror::Error;

/// Returned by [`crate::AffordanceBuilder::build`] when the caller breaks the
/// builder contract. Never retried; the caller must fix its arguments.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AffordanceError {
    /// No relation names were given, the list was absent, or a relation was
    /// empty or blank.
    #[error("at least one non-blank rel is required")]
    InvalidRel,
    /// The target URL was empty or blank.
    #[error("link target must not be empty")]
    EmptyTarget,
}
