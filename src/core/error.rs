//! Domain error taxonomy
//!
//! Every rejected operation surfaces one of these kinds together with a
//! human-readable reason. Domain code returns errors instead of printing; the
//! front ends decide how to render them. No domain error ever aborts the
//! process.

use thiserror::Error;

/// Result alias used throughout the domain core.
pub type DomainResult<T> = Result<T, DomainError>;

/// Classified failure of a domain operation.
///
/// The operation that produced the error performed no partial mutation; the
/// caller can always retry with corrected input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Malformed input to a domain operation (bad date format, out-of-range
    /// score, duplicate id on creation).
    #[error("{0}")]
    Validation(String),

    /// The operation would violate an invariant (double booking, borrowing an
    /// unavailable title, logging in while another session is active).
    #[error("{0}")]
    Conflict(String),

    /// A referenced entity id or email has no matching record.
    #[error("{0}")]
    NotFound(String),

    /// A role-gated operation was invoked by a disallowed role.
    #[error("{0}")]
    Unauthorized(String),
}

impl DomainError {
    /// Build a [`DomainError::Validation`] from any message.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`DomainError::Conflict`] from any message.
    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    /// Build a [`DomainError::NotFound`] from any message.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Build a [`DomainError::Unauthorized`] from any message.
    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }
}
