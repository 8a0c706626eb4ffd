//! Description service: the query path behind the registry's HTTP surface.
//!
//! The HTTP routing layer itself is an external collaborator; it calls
//! [`DescriptionService`] with a raw element identifier and returns whatever
//! document the service renders. On any failure the service logs and renders
//! the empty document instead of propagating a fault to the client.

use crate::context::SharedContext;
use crate::error::Result;
use crate::locales::LocaleStore;
use crate::model::ElementDescriptor;
use crate::registry::DeclarerRegistry;
use crate::resolver::Canonicalizer;
use std::sync::Arc;

/// Document returned when a description cannot be produced.
pub const EMPTY_DOCUMENT: &str = "{}";

/// Standard file name of an element's icon asset.
pub const ICON_ASSET_NAME: &str = "icon.png";

/// Standard file name of an element's documentation asset.
pub const DOCUMENTATION_ASSET_NAME: &str = "documentation.md";

/// Relative asset path of an element's icon.
pub fn icon_path(element_id: &str) -> String {
    asset_path(element_id, ICON_ASSET_NAME)
}

/// Relative asset path of an element's documentation.
pub fn documentation_path(element_id: &str) -> String {
    asset_path(element_id, DOCUMENTATION_ASSET_NAME)
}

fn asset_path(element_id: &str, asset_name: &str) -> String {
    format!("{element_id}/{asset_name}")
}

/// Renders a canonical descriptor as a linked-data document.
///
/// The concrete format (JSON-LD or equivalent) is the collaborator's choice;
/// the service guarantees the descriptor it hands over is fully canonical.
pub trait DescriptorSerializer: Send + Sync {
    /// Render the canonical descriptor.
    fn serialize(&self, descriptor: &ElementDescriptor) -> Result<String>;
}

/// Serves canonical element descriptions.
///
/// Composes the declarer registry, the canonicalizer, and the serialization
/// collaborator into the path a description query takes: fetch raw
/// descriptor, canonicalize against the current context snapshot, render.
pub struct DescriptionService<L, S> {
    registry: Arc<DeclarerRegistry>,
    canonicalizer: Canonicalizer<L>,
    context: Arc<SharedContext>,
    serializer: S,
}

impl<L: LocaleStore, S: DescriptorSerializer> DescriptionService<L, S> {
    /// Create a service over the given collaborators.
    pub fn new(
        registry: Arc<DeclarerRegistry>,
        canonicalizer: Canonicalizer<L>,
        context: Arc<SharedContext>,
        serializer: S,
    ) -> Self {
        Self {
            registry,
            canonicalizer,
            context,
            serializer,
        }
    }

    /// Produce the canonical descriptor for a registered element.
    pub async fn description(&self, element_id: &str) -> Result<ElementDescriptor> {
        let raw = self.registry.raw_descriptor(element_id)?;
        let snapshot = self.context.snapshot();
        let canonical = self.canonicalizer.canonicalize(&raw, &snapshot).await?;
        Ok(canonical)
    }

    /// Render the description document for a registered element.
    ///
    /// Never fails from the caller's perspective: resolution or
    /// serialization errors are logged and [`EMPTY_DOCUMENT`] is returned.
    pub async fn description_document(&self, element_id: &str) -> String {
        let canonical = match self.description(element_id).await {
            Ok(canonical) => canonical,
            Err(e) => {
                tracing::error!(id = %element_id, error = %e, "failed to resolve description");
                return EMPTY_DOCUMENT.to_string();
            }
        };

        match self.serializer.serialize(&canonical) {
            Ok(document) => document,
            Err(e) => {
                tracing::error!(id = %element_id, error = %e, "failed to serialize description");
                EMPTY_DOCUMENT.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RegistryConfig;
    use crate::context::NegotiationContext;
    use crate::error::Error;
    use crate::locales::NoLocales;
    use crate::model::ElementCategory;
    use crate::registry::Declarer;

    struct EnricherDeclarer;

    impl Declarer for EnricherDeclarer {
        fn declare(&self) -> ElementDescriptor {
            ElementDescriptor::new("enricher", ElementCategory::Processor)
        }
    }

    struct IdSerializer;

    impl DescriptorSerializer for IdSerializer {
        fn serialize(&self, descriptor: &ElementDescriptor) -> Result<String> {
            Ok(descriptor.id.clone())
        }
    }

    struct FailingSerializer;

    impl DescriptorSerializer for FailingSerializer {
        fn serialize(&self, _descriptor: &ElementDescriptor) -> Result<String> {
            Err(Error::Serialization("rdf graph rejected".to_string()))
        }
    }

    fn service<S: DescriptorSerializer>(serializer: S) -> DescriptionService<NoLocales, S> {
        let registry = Arc::new(DeclarerRegistry::new());
        registry.register(Arc::new(EnricherDeclarer));

        let config = RegistryConfig::new("https://registry/").unwrap();
        DescriptionService::new(
            registry,
            Canonicalizer::new(&config, Arc::new(NoLocales)),
            Arc::new(SharedContext::new(NegotiationContext::empty())),
            serializer,
        )
    }

    #[tokio::test]
    async fn test_description_is_canonical() {
        let descriptor = service(IdSerializer).description("enricher").await.unwrap();
        assert_eq!(descriptor.id, "https://registry/processor/enricher");
    }

    #[tokio::test]
    async fn test_document_rendered() {
        let document = service(IdSerializer).description_document("enricher").await;
        assert_eq!(document, "https://registry/processor/enricher");
    }

    #[tokio::test]
    async fn test_unknown_element_yields_empty_document() {
        let document = service(IdSerializer).description_document("missing").await;
        assert_eq!(document, EMPTY_DOCUMENT);
    }

    #[tokio::test]
    async fn test_serializer_failure_yields_empty_document() {
        let document = service(FailingSerializer)
            .description_document("enricher")
            .await;
        assert_eq!(document, EMPTY_DOCUMENT);
    }

    #[test]
    fn test_asset_paths() {
        assert_eq!(icon_path("enricher"), "enricher/icon.png");
        assert_eq!(documentation_path("enricher"), "enricher/documentation.md");
    }
}
