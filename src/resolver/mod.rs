//! Descriptor canonicalization.
//!
//! This module turns a raw, element-local descriptor into its canonical,
//! globally addressable form in a single pass.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        Canonicalizer                            │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  1. Assign category-scoped URIs (descriptor + nested streams)   │
//! │  2. Resolve display labels from locale resources (best effort)  │
//! │  3. Negotiate grounding for consumable entities                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The pass is linear: identifiers, then labels, then grounding. Only
//! structural contract violations abort it; missing locale data and an
//! opinion-less negotiation context are defined non-error branches.
//!
//! # Example
//!
//! ```rust,ignore
//! use rivulet::resolver::Canonicalizer;
//!
//! let canonicalizer = Canonicalizer::new(&config, locale_store);
//! let canonical = canonicalizer.canonicalize(&raw, &context.snapshot()).await?;
//!
//! // Canonical descriptor has:
//! // - Fully resolved URIs (no relative identifiers remain)
//! // - Labels filled where locale resources existed
//! // - A grounding that is fully negotiated or fully element-declared
//! ```

mod canonicalize;
mod error;
mod grounding;
mod identifier;
mod labels;

pub use canonicalize::Canonicalizer;
pub use error::ResolveError;
pub use grounding::NegotiationOutcome;
pub use labels::LabelOutcome;

pub(crate) use grounding::negotiate;
pub(crate) use identifier::assign_identifiers;
pub(crate) use labels::apply_labels;
