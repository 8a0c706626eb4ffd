//! Error types for Rivulet.

use thiserror::Error;

/// Result type alias using Rivulet's Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for registry operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Requested identifier has no registered descriptor.
    #[error("unknown element: {id}")]
    UnknownElement {
        /// Raw element identifier that was looked up.
        id: String,
    },

    /// Structural contract of a descriptor was violated during resolution.
    #[error("malformed descriptor: {0}")]
    Malformed(#[from] crate::resolver::ResolveError),

    /// Canonical descriptor could not be rendered by the serialization layer.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
