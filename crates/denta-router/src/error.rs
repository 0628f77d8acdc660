//! Routing error types.

use thiserror::Error;

/// Errors that can occur while building or querying a route table.
///
/// The two `Unresolved` variants are lookup misses a running application
/// can meet; the remaining variants fire once, at startup, when the
/// declared table violates its own invariants.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RouterError {
    /// No registered route matches the requested path.
    #[error("no route matches path `{0}`")]
    UnresolvedPath(String),

    /// No registered route carries the requested name.
    #[error("no route named `{0}`")]
    UnresolvedName(String),

    /// Two entries share the same path after normalization.
    #[error("duplicate route path `{0}`")]
    DuplicatePath(String),

    /// Two entries share the same symbolic name.
    #[error("duplicate route name `{0}`")]
    DuplicateName(String),

    /// A route was declared with a malformed path.
    #[error("invalid route path `{path}`: {reason}")]
    InvalidPath {
        /// The offending path as declared.
        path: String,
        /// Why the path was rejected.
        reason: &'static str,
    },

    /// A route was declared without a symbolic name.
    #[error("route `{0}` has an empty name")]
    EmptyName(String),
}

/// A specialized Result type for routing operations.
pub type Result<T> = std::result::Result<T, RouterError>;
