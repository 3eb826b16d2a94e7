//! Error types for the projection core.

use thiserror::Error;

/// Errors that can occur while building a projection plan.
///
/// Both variants signal a configuration defect in the caller or the format
/// registry, not a runtime transient: the current pass is aborted.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlanError {
    /// A singular column role was assigned to two descriptors.
    #[error("column kind '{0}' is used twice")]
    DuplicateRole(&'static str),

    /// A kind code was malformed or unrecognized.
    #[error("invalid column kind: {0}")]
    InvalidKind(String),
}

/// Result type for plan operations.
pub type Result<T> = std::result::Result<T, PlanError>;
