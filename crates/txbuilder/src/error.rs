//! # Error Definitions
//!
//! `Error` is what a caller sees when a payload cannot be turned back into a
//! call. `CatalogError` describes a corrupt operation table; it never reaches a
//! caller at runtime because the process-wide catalog refuses to load.

use crate::catalog::Dialect;
use crate::catalog::Identity;
use crate::catalog::SemanticType;
use crate::payload::MAX_TYPE_TAG_DEPTH;

/// Which argument list an arity check was made against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgKind {
    Type,
    Value,
}

impl std::fmt::Display for ArgKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArgKind::Type => write!(f, "type argument"),
            ArgKind::Value => write!(f, "value argument"),
        }
    }
}

/// Decoding and framing failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The payload's identity matches no catalog entry.
    #[error("unknown operation: {0}")]
    UnknownOperation(Identity),
    /// The payload carries a different number of arguments than the operation declares.
    #[error("{kind} count mismatch: expected {expected}, found {actual}")]
    ArityMismatch { kind: ArgKind, expected: usize, actual: usize },
    /// The value argument at `position` does not have the declared shape.
    #[error("value argument {position} is not a valid {expected}")]
    ArgumentTypeMismatch { position: usize, expected: SemanticType },
    #[error("invalid account address: {0}")]
    InvalidAddress(String),
    /// The underlying txpack framing failed.
    #[error("payload framing failed: {0}")]
    Wire(#[from] txpack::Error),
    /// The framed payload is missing a field or has an unknown shape.
    #[error("protocol violation: {0}")]
    ProtocolViolation(String),
    #[error("type tag nesting exceeds {} levels", MAX_TYPE_TAG_DEPTH)]
    RecursionLimitExceeded,
}

/// A specialized Result type for codec operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Defects in an operation table, detected when it is loaded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("operation `{0}` is declared more than once")]
    DuplicateName(&'static str),
    #[error("operations `{first}` and `{second}` share the {dialect} identity {identity}")]
    DuplicateIdentity {
        dialect: Dialect,
        identity: Identity,
        first: &'static str,
        second: &'static str,
    },
    #[error("operation `{name}` declares type parameter `{slot}` after a value parameter")]
    SlotOrder { name: &'static str, slot: &'static str },
}
