//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures. Every variant
/// carries a message naming the offending value and the rule it broke.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value does not match its textual grammar (bad species, size, record shape).
    #[error("format error: {0}")]
    Format(String),

    /// A value is well-formed but out of range (e.g. a requirement clamps below 1).
    #[error("range error: {0}")]
    Range(String),

    /// A domain invariant was violated (e.g. committing more stems than on hand).
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}

impl DomainError {
    pub fn format(msg: impl Into<String>) -> Self {
        Self::Format(msg.into())
    }

    pub fn range(msg: impl Into<String>) -> Self {
        Self::Range(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    /// Short rule name, used when reporting which rule a record violated.
    pub fn rule(&self) -> &'static str {
        match self {
            DomainError::Format(_) => "format",
            DomainError::Range(_) => "range",
            DomainError::InvariantViolation(_) => "invariant",
        }
    }
}
