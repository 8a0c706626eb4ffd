//! Pipeline element descriptor model.
//!
//! Descriptors are the self-description a pipeline element publishes: who it
//! is, what streams it exposes, which transports it speaks, and which
//! configuration options it takes. Connectors author descriptors with
//! element-local, relative identifiers; the [`resolver`](crate::resolver)
//! turns them into the canonical, globally addressable form.
//!
//! # Design Principles
//!
//! - **Explicit category**: the descriptor carries an [`ElementCategory`]
//!   tag resolved at construction; resolution never inspects runtime types
//! - **Plain values**: descriptors are cheap-to-clone documents, not live
//!   objects; canonicalization produces a new value instead of aliasing
//! - **Opaque config**: configuration options pass through resolution
//!   untouched as key-value pairs

use serde::{Deserialize, Serialize};

// ============================================================================
// Category
// ============================================================================

/// The category of a pipeline element.
///
/// Determines the URI prefix assigned during canonicalization and whether
/// the element's grounding is subject to negotiation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementCategory {
    /// A data source: owns one or more streams, has no grounding of its own.
    Source,
    /// A transformation operator: consumes and produces streams.
    Processor,
    /// A data sink: consumes streams.
    Sink,
    /// A single stream exposed by a source, addressed in its owner's scope.
    Stream,
}

impl ElementCategory {
    /// Whether entities of this category carry a grounding subject to
    /// negotiation.
    ///
    /// Sources are exempt: they declare per-stream groundings individually.
    pub fn is_consumable(&self) -> bool {
        matches!(self, Self::Processor | Self::Sink | Self::Stream)
    }
}

// ============================================================================
// Transport grounding
// ============================================================================

/// A transport protocol an entity can exchange events over (e.g. "kafka").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransportProtocol(pub String);

impl From<&str> for TransportProtocol {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for TransportProtocol {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl std::fmt::Display for TransportProtocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A transport payload format an entity can exchange events in (e.g. "json").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransportFormat(pub String);

impl From<&str> for TransportFormat {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for TransportFormat {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl std::fmt::Display for TransportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The transport binding an entity offers or requires.
///
/// Protocol and format lists are ordered by preference. Whether a grounding
/// is element-declared or registry-negotiated is distinguished only by which
/// value is currently installed on the entity; a grounding is never half
/// replaced (see [`crate::resolver::grounding`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventGrounding {
    /// Supported transport protocols, ordered by preference.
    pub protocols: Vec<TransportProtocol>,
    /// Supported transport formats, ordered by preference.
    pub formats: Vec<TransportFormat>,
}

impl EventGrounding {
    /// Create an empty grounding.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a supported protocol.
    pub fn with_protocol(mut self, protocol: impl Into<TransportProtocol>) -> Self {
        self.protocols.push(protocol.into());
        self
    }

    /// Add a supported format.
    pub fn with_format(mut self, format: impl Into<TransportFormat>) -> Self {
        self.formats.push(format.into());
        self
    }
}

// ============================================================================
// Configuration options (opaque to resolution)
// ============================================================================

/// Possible values for a configuration option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ConfigValue {
    /// String value.
    String(String),
    /// Integer value.
    Int(i64),
    /// Floating-point value.
    Float(f64),
    /// Boolean value.
    Bool(bool),
}

/// A configuration option an element accepts.
///
/// Passed through canonicalization untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigOption {
    /// Option name.
    pub key: String,
    /// Option value or default.
    pub value: ConfigValue,
}

// ============================================================================
// Descriptors
// ============================================================================

/// A stream exposed by a `Source` element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamDescriptor {
    /// Identifier: element-local when raw, a full URI once canonicalized.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Display description.
    pub description: String,
    /// Whether display labels should be generated from locale resources.
    pub includes_locales: bool,
    /// Transport binding this stream is exposed over.
    pub grounding: Option<EventGrounding>,
}

impl StreamDescriptor {
    /// Create a stream descriptor with the given raw identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            description: String::new(),
            includes_locales: false,
            grounding: None,
        }
    }

    /// Set the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the display description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Request locale-driven label generation.
    pub fn with_locales(mut self) -> Self {
        self.includes_locales = true;
        self
    }

    /// Set the declared grounding.
    pub fn with_grounding(mut self, grounding: EventGrounding) -> Self {
        self.grounding = Some(grounding);
        self
    }
}

/// Self-description of a pipeline element's interface.
///
/// Produced raw by a connector (see [`crate::registry::Declarer`]) and turned
/// into its canonical form by [`crate::resolver::Canonicalizer`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementDescriptor {
    /// Identifier: element-local when raw, a full URI once canonicalized.
    pub id: String,
    /// Element category, fixed at construction.
    pub category: ElementCategory,
    /// Display name.
    pub name: String,
    /// Display description.
    pub description: String,
    /// Icon reference, if the element ships one.
    pub icon_url: Option<String>,
    /// Whether display labels should be generated from locale resources.
    pub includes_locales: bool,
    /// Streams exposed by this element. Only meaningful for `Source`.
    pub streams: Vec<StreamDescriptor>,
    /// Transport binding. Only meaningful for consumable categories.
    pub grounding: Option<EventGrounding>,
    /// Configuration options, opaque to resolution.
    pub config: Vec<ConfigOption>,
}

impl ElementDescriptor {
    /// Create a descriptor with the given raw identifier and category.
    pub fn new(id: impl Into<String>, category: ElementCategory) -> Self {
        Self {
            id: id.into(),
            category,
            name: String::new(),
            description: String::new(),
            icon_url: None,
            includes_locales: false,
            streams: Vec::new(),
            grounding: None,
            config: Vec::new(),
        }
    }

    /// Set the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the display description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the icon reference.
    pub fn with_icon_url(mut self, icon_url: impl Into<String>) -> Self {
        self.icon_url = Some(icon_url.into());
        self
    }

    /// Request locale-driven label generation.
    pub fn with_locales(mut self) -> Self {
        self.includes_locales = true;
        self
    }

    /// Add an exposed stream.
    pub fn with_stream(mut self, stream: StreamDescriptor) -> Self {
        self.streams.push(stream);
        self
    }

    /// Set the declared grounding.
    pub fn with_grounding(mut self, grounding: EventGrounding) -> Self {
        self.grounding = Some(grounding);
        self
    }

    /// Add a configuration option.
    pub fn with_config(mut self, key: impl Into<String>, value: ConfigValue) -> Self {
        self.config.push(ConfigOption {
            key: key.into(),
            value,
        });
        self
    }

    /// Get a configuration option by key.
    pub fn get_config(&self, key: &str) -> Option<&ConfigValue> {
        self.config.iter().find(|o| o.key == key).map(|o| &o.value)
    }
}
