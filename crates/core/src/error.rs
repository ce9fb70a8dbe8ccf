//! Report error model.

use thiserror::Error;

/// Result type used across the report engines.
pub type ReportResult<T> = Result<T, ReportError>;

/// Report-level error.
///
/// Only deterministic, data-level failures live here (validation, lookups,
/// id collisions). Numeric coercion never produces one of these.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReportError {
    /// A value failed validation (e.g. a blank item name).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A row or record with the given id does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// A row or record id is already taken.
    #[error("conflict: {0}")]
    Conflict(String),
}

impl ReportError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }
}
