//! Analysis-time rejection types.
//!
//! There is no runtime error path in this crate: every failure is an
//! ill-formed derivation request, surfaced to the caller as a
//! [`DeriveError`] with no derived descriptor produced.

use thiserror::Error;

/// Errors produced when a derivation request is ill-formed.
///
/// Each variant names a specific rejection. The `Display` impl provides a
/// human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeriveError {
    /// The named field does not exist in the schema.
    #[error("unknown field: {0}")]
    UnknownField(String),
    /// The named field exists but its descriptor is not callable.
    #[error("field is not a method: {0}")]
    NotAMethod(String),
    /// Extension was requested for schemas whose key sets intersect.
    #[error("cannot extend: overlapping field {0}")]
    OverlappingField(String),
    /// Literal text normalization was requested for a non-literal descriptor.
    #[error("descriptor is not a literal text value")]
    NotALiteral,
}

/// Convenience alias for results with [`DeriveError`].
pub type Result<T> = std::result::Result<T, DeriveError>;
