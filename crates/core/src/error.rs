//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic construction failures. Field reassignment on a
/// value object or entity has no runtime variant: fields are private and no setter
/// exists, so it is rejected by the compiler.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An identifier candidate did not parse as a UUID.
    #[error("ID must be a valid UUID")]
    InvalidUuid,
}

impl DomainError {
    pub fn invalid_uuid() -> Self {
        Self::InvalidUuid
    }
}
