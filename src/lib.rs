//! # Rivulet
//!
//! Registry-side descriptor resolution for a distributed stream-processing
//! platform.
//!
//! Pipeline elements (data sources, processors, sinks) self-describe their
//! capabilities as structured descriptors. Before a descriptor is handed to a
//! client or persisted, the registry transforms it from an element-local,
//! relative representation into a globally addressable, internationalized,
//! and transport-negotiated canonical form.
//!
//! ## What canonicalization does
//!
//! - **Identifier assignment**: stable, category-scoped URIs for a descriptor
//!   and every nested stream it contains
//! - **Label resolution**: display name/description filled from locale
//!   resources, with graceful degradation when resources are missing
//! - **Grounding negotiation**: the transport protocol/format pairing a
//!   consumable entity supports, with registry-wide capabilities overriding
//!   element-declared defaults
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use rivulet::prelude::*;
//! use std::sync::Arc;
//!
//! let config = RegistryConfig::new("https://registry/")?;
//! let canonicalizer = Canonicalizer::new(&config, Arc::new(NoLocales));
//!
//! let context = NegotiationContext::empty();
//! let canonical = canonicalizer.canonicalize(&raw_descriptor, &context).await?;
//! ```
//!
//! The HTTP surface, linked-data serialization, and downstream persistence
//! are external collaborators; this crate guarantees the descriptor it hands
//! over has fully resolved URIs and a grounding that is either fully
//! negotiated or fully element-declared, never a mix.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod context;
pub mod error;
pub mod locales;
pub mod model;
pub mod observability;
pub mod registry;
pub mod resolver;
pub mod service;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::RegistryConfig;
    pub use crate::context::{NegotiationContext, SharedContext};
    pub use crate::error::{Error, Result};
    pub use crate::locales::{LocaleBundle, LocaleStore, NoLocales};
    pub use crate::model::{
        ElementCategory, ElementDescriptor, EventGrounding, StreamDescriptor, TransportFormat,
        TransportProtocol,
    };
    pub use crate::registry::{Declarer, DeclarerRegistry};
    pub use crate::resolver::Canonicalizer;
}

pub use error::{Error, Result};
