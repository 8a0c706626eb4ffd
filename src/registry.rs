//! Declarer registry: the supply side of raw descriptors.
//!
//! Connectors register a [`Declarer`] per pipeline element. A declarer
//! produces the element's raw, element-local descriptor on demand; source
//! declarers additionally produce the descriptors of the streams they
//! expose, which the registry attaches to the source descriptor before it is
//! handed to the resolver.

use crate::error::{Error, Result};
use crate::model::{ElementCategory, ElementDescriptor, StreamDescriptor};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Supplies the raw descriptor for one registered pipeline element.
///
/// A declarer never returns a partially constructed descriptor; a missing
/// element is a registry lookup miss, not a degenerate descriptor.
pub trait Declarer: Send + Sync {
    /// Produce the element's raw descriptor.
    fn declare(&self) -> ElementDescriptor;

    /// Produce the descriptors of the streams this element exposes.
    ///
    /// Only meaningful for `Source` declarers; the default produces none.
    /// `owner` is the raw source descriptor the streams will be attached to.
    fn declare_streams(&self, _owner: &ElementDescriptor) -> Vec<StreamDescriptor> {
        Vec::new()
    }
}

/// Registry of declarers, keyed by raw element identifier.
///
/// The registry provides a central place to:
/// - Register declarers at node startup
/// - Query registered element identifiers
/// - Produce raw descriptors for resolution
pub struct DeclarerRegistry {
    declarers: RwLock<HashMap<String, Arc<dyn Declarer>>>,
}

impl DeclarerRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            declarers: RwLock::new(HashMap::new()),
        }
    }

    /// Register a declarer under its declared identifier.
    ///
    /// A later registration under the same identifier replaces the earlier
    /// one.
    pub fn register(&self, declarer: Arc<dyn Declarer>) {
        let id = declarer.declare().id;
        self.declarers
            .write()
            .expect("registry lock poisoned")
            .insert(id, declarer);
    }

    /// Get the declarer registered under `id`.
    pub fn get(&self, id: &str) -> Option<Arc<dyn Declarer>> {
        self.declarers
            .read()
            .expect("registry lock poisoned")
            .get(id)
            .cloned()
    }

    /// Whether an element is registered under `id`.
    pub fn contains(&self, id: &str) -> bool {
        self.declarers
            .read()
            .expect("registry lock poisoned")
            .contains_key(id)
    }

    /// Raw identifiers of all registered elements.
    pub fn ids(&self) -> Vec<String> {
        self.declarers
            .read()
            .expect("registry lock poisoned")
            .keys()
            .cloned()
            .collect()
    }

    /// Number of registered elements.
    pub fn len(&self) -> usize {
        self.declarers.read().expect("registry lock poisoned").len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Produce the raw descriptor for `id`, with source streams attached.
    pub fn raw_descriptor(&self, id: &str) -> Result<ElementDescriptor> {
        let declarer = self.get(id).ok_or_else(|| Error::UnknownElement {
            id: id.to_string(),
        })?;

        let mut descriptor = declarer.declare();
        if descriptor.category == ElementCategory::Source {
            let streams = declarer.declare_streams(&descriptor);
            descriptor.streams.extend(streams);
        }
        Ok(descriptor)
    }
}

impl Default for DeclarerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EnricherDeclarer;

    impl Declarer for EnricherDeclarer {
        fn declare(&self) -> ElementDescriptor {
            ElementDescriptor::new("enricher", ElementCategory::Processor).with_name("Enricher")
        }
    }

    struct GearboxDeclarer;

    impl Declarer for GearboxDeclarer {
        fn declare(&self) -> ElementDescriptor {
            ElementDescriptor::new("gearbox", ElementCategory::Source)
        }

        fn declare_streams(&self, owner: &ElementDescriptor) -> Vec<StreamDescriptor> {
            vec![
                StreamDescriptor::new("pressure").with_name(format!("{} pressure", owner.id)),
                StreamDescriptor::new("torque"),
            ]
        }
    }

    #[test]
    fn test_register_and_lookup() {
        let registry = DeclarerRegistry::new();
        assert!(registry.is_empty());

        registry.register(Arc::new(EnricherDeclarer));
        assert_eq!(registry.len(), 1);
        assert!(registry.contains("enricher"));
        assert!(registry.get("enricher").is_some());
        assert_eq!(registry.ids(), vec!["enricher".to_string()]);
    }

    #[test]
    fn test_unknown_element() {
        let registry = DeclarerRegistry::new();
        assert!(matches!(
            registry.raw_descriptor("missing"),
            Err(Error::UnknownElement { .. })
        ));
    }

    #[test]
    fn test_source_streams_attached() {
        let registry = DeclarerRegistry::new();
        registry.register(Arc::new(GearboxDeclarer));

        let descriptor = registry.raw_descriptor("gearbox").unwrap();
        assert_eq!(descriptor.streams.len(), 2);
        assert_eq!(descriptor.streams[0].id, "pressure");
        assert_eq!(descriptor.streams[0].name, "gearbox pressure");
        assert_eq!(descriptor.streams[1].id, "torque");
    }

    #[test]
    fn test_non_source_streams_not_queried() {
        let registry = DeclarerRegistry::new();
        registry.register(Arc::new(EnricherDeclarer));

        let descriptor = registry.raw_descriptor("enricher").unwrap();
        assert!(descriptor.streams.is_empty());
    }
}
