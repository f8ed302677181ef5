//! Domain-level error types.

use thiserror::Error;

use crate::ports::CredentialError;

/// Domain errors - business rule failures raised by the mutation services.
///
/// Lookup misses are never errors at this layer: queries return `Option`,
/// deletes and unsubscribes signal absence with `false`.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A create-time uniqueness check failed. The message names the field
    /// that collided ("Email already subscribed", "Mobile number already
    /// registered", ...).
    #[error("{0}")]
    Duplicate(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error(transparent)]
    Credential(#[from] CredentialError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Store-level errors - transient infrastructure faults only.
///
/// Absence of a record is a normal, representable outcome and never
/// surfaces here.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Query execution failed: {0}")]
    Query(String),
}
