//! Resolution error types.

use thiserror::Error;

/// Structural contract violation found while canonicalizing a descriptor.
///
/// These are fatal for the single canonicalization call; the caller is
/// expected to render an empty or error document rather than a partially
/// rewritten one. Data-availability failures (missing locale bundles, an
/// opinion-less negotiation context) are not errors and never appear here.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// A stream-category descriptor was canonicalized without the owning
    /// source's context segment.
    #[error("stream descriptor {id} has no owning source context")]
    MissingContextSegment {
        /// Raw identifier of the offending descriptor.
        id: String,
    },

    /// A descriptor or nested stream carries an empty identifier.
    #[error("descriptor has an empty identifier")]
    EmptyIdentifier,
}
