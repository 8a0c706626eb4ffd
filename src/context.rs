//! Registry-wide negotiation context.
//!
//! The context holds the set of transport protocols and formats the platform
//! currently accepts. It is read extensively during canonicalization and
//! mutated only by the configuration-reload path: reloads publish a new
//! immutable snapshot through [`SharedContext`], and in-flight
//! canonicalization calls finish against the snapshot they started with.

use crate::model::{TransportFormat, TransportProtocol};
use std::sync::{Arc, RwLock};

/// Transport capabilities currently accepted platform-wide.
///
/// Read-only from the resolver's perspective.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NegotiationContext {
    /// Transport protocols accepted by the platform.
    pub supported_protocols: Vec<TransportProtocol>,
    /// Transport formats accepted by the platform.
    pub supported_formats: Vec<TransportFormat>,
}

impl NegotiationContext {
    /// Create a context with no opinion on either axis.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a context from protocol and format lists.
    pub fn new(
        supported_protocols: Vec<TransportProtocol>,
        supported_formats: Vec<TransportFormat>,
    ) -> Self {
        Self {
            supported_protocols,
            supported_formats,
        }
    }

    /// Add a supported protocol.
    pub fn with_protocol(mut self, protocol: impl Into<TransportProtocol>) -> Self {
        self.supported_protocols.push(protocol.into());
        self
    }

    /// Add a supported format.
    pub fn with_format(mut self, format: impl Into<TransportFormat>) -> Self {
        self.supported_formats.push(format.into());
        self
    }

    /// Whether the registry is authoritative about transport.
    ///
    /// Negotiation is all-or-nothing: the context only overrides
    /// element-declared groundings when both sets are non-empty.
    pub fn has_opinion(&self) -> bool {
        !self.supported_protocols.is_empty() && !self.supported_formats.is_empty()
    }
}

/// Handle publishing immutable [`NegotiationContext`] snapshots.
///
/// Callers take a snapshot per canonicalization call; a reload never
/// invalidates a snapshot mid-call.
#[derive(Debug)]
pub struct SharedContext {
    current: RwLock<Arc<NegotiationContext>>,
}

impl SharedContext {
    /// Create a handle with an initial context.
    pub fn new(context: NegotiationContext) -> Self {
        Self {
            current: RwLock::new(Arc::new(context)),
        }
    }

    /// Get the current snapshot.
    pub fn snapshot(&self) -> Arc<NegotiationContext> {
        self.current.read().expect("context lock poisoned").clone()
    }

    /// Publish a new snapshot, leaving existing snapshots untouched.
    pub fn publish(&self, context: NegotiationContext) {
        *self.current.write().expect("context lock poisoned") = Arc::new(context);
    }
}

impl Default for SharedContext {
    fn default() -> Self {
        Self::new(NegotiationContext::empty())
    }
}
