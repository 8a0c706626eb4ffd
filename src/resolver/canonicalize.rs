//! Canonicalization orchestrator.

use super::error::ResolveError;
use super::{apply_labels, assign_identifiers, negotiate};
use crate::config::RegistryConfig;
use crate::context::NegotiationContext;
use crate::locales::LocaleStore;
use crate::model::{ElementCategory, ElementDescriptor};
use crate::observability;
use std::sync::Arc;
use std::time::Duration;

/// Turns raw descriptors into their canonical form.
///
/// One pass per descriptor: identifiers are rewritten top-down, labels are
/// filled per entity, and groundings of consumable entities are negotiated
/// against the registry context. The input is never mutated; a new canonical
/// descriptor is returned.
///
/// Calls for different descriptors may run fully in parallel: the
/// canonicalizer only reads its own configuration and the context snapshot
/// it is handed.
#[derive(Debug, Clone)]
pub struct Canonicalizer<L> {
    base_uri: String,
    locale_timeout: Duration,
    locale_store: Arc<L>,
}

impl<L: LocaleStore> Canonicalizer<L> {
    /// Create a canonicalizer for the given node configuration.
    pub fn new(config: &RegistryConfig, locale_store: Arc<L>) -> Self {
        Self {
            base_uri: config.base_uri().to_string(),
            locale_timeout: config.locale_timeout(),
            locale_store,
        }
    }

    /// Canonicalize a raw top-level descriptor.
    ///
    /// Precondition: `raw` must carry element-local identifiers as produced
    /// by its connector. Feeding an already-canonical descriptor back in is
    /// caller misuse and yields double-prefixed URIs.
    ///
    /// `Stream`-category descriptors cannot be canonicalized without their
    /// owning source's scope; use [`canonicalize_scoped`] for those.
    ///
    /// [`canonicalize_scoped`]: Self::canonicalize_scoped
    pub async fn canonicalize(
        &self,
        raw: &ElementDescriptor,
        context: &NegotiationContext,
    ) -> Result<ElementDescriptor, ResolveError> {
        self.canonicalize_scoped(raw, "", context).await
    }

    /// Canonicalize a raw descriptor within an owning source's scope.
    ///
    /// `context_segment` is the owning source's raw identifier; it is only
    /// consulted for `Stream`-category descriptors.
    pub async fn canonicalize_scoped(
        &self,
        raw: &ElementDescriptor,
        context_segment: &str,
        context: &NegotiationContext,
    ) -> Result<ElementDescriptor, ResolveError> {
        let mut canonical = raw.clone();

        // Locale bundles are keyed by raw identifiers, so save them before
        // the rewrite.
        let original_id = canonical.id.clone();
        let original_stream_ids: Vec<String> =
            canonical.streams.iter().map(|s| s.id.clone()).collect();

        assign_identifiers(&mut canonical, &self.base_uri, context_segment)?;

        apply_labels(
            self.locale_store.as_ref(),
            self.locale_timeout,
            canonical.includes_locales,
            &original_id,
            &mut canonical.name,
            &mut canonical.description,
        )
        .await;

        if canonical.category == ElementCategory::Source {
            // A source has no grounding of its own; labels and negotiation
            // apply per stream.
            for (stream, original_stream_id) in
                canonical.streams.iter_mut().zip(&original_stream_ids)
            {
                apply_labels(
                    self.locale_store.as_ref(),
                    self.locale_timeout,
                    stream.includes_locales,
                    original_stream_id,
                    &mut stream.name,
                    &mut stream.description,
                )
                .await;
                negotiate(&mut stream.grounding, context, &stream.id);
            }
        } else if canonical.category.is_consumable() {
            negotiate(&mut canonical.grounding, context, &canonical.id);
        }

        observability::record_canonicalized();
        tracing::debug!(
            id = %canonical.id,
            category = ?canonical.category,
            "descriptor canonicalized"
        );
        Ok(canonical)
    }
}
