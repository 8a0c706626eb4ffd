//! Best-effort label resolution.
//!
//! Label resolution fills display name and description from a locale store.
//! It is the one part of canonicalization that touches I/O, so every lookup
//! runs under a timeout, and every failure mode (missing bundle, read error,
//! timeout) degrades to keeping the labels the entity already had. A failed
//! lookup must never abort canonicalization; failures are isolated per
//! entity.

use crate::locales::LocaleStore;
use crate::observability;
use std::time::Duration;
use tokio::time::timeout;

/// Outcome of resolving one entity's labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelOutcome {
    /// Locale labels were applied.
    Applied,
    /// The entity did not request locale-driven labels.
    Skipped,
    /// The lookup failed or timed out; existing labels were kept.
    Degraded,
}

/// Fill `name` and `description` from the locale store entry for `id`.
///
/// `id` must be the entity's *original* raw identifier; locale bundles are
/// keyed by it, not by the canonical URI. Bundle fields replace the current
/// labels field-by-field, but an empty bundle field never blanks a label
/// that was already set.
pub(crate) async fn apply_labels<L: LocaleStore>(
    store: &L,
    budget: Duration,
    includes_locales: bool,
    id: &str,
    name: &mut String,
    description: &mut String,
) -> LabelOutcome {
    if !includes_locales {
        return LabelOutcome::Skipped;
    }

    let bundle = match timeout(budget, store.lookup(id)).await {
        Ok(Ok(bundle)) => bundle,
        Ok(Err(e)) => {
            tracing::warn!(id = %id, error = %e, "label resolution degraded");
            observability::record_label_degraded();
            return LabelOutcome::Degraded;
        }
        Err(_) => {
            tracing::warn!(id = %id, budget_ms = budget.as_millis() as u64, "locale lookup timed out");
            observability::record_label_degraded();
            return LabelOutcome::Degraded;
        }
    };

    if !bundle.title.is_empty() {
        *name = bundle.title;
    }
    if !bundle.description.is_empty() {
        *description = bundle.description;
    }
    LabelOutcome::Applied
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locales::{LocaleBundle, LocaleError, MemoryLocaleStore, NoLocales};

    const BUDGET: Duration = Duration::from_millis(100);

    #[tokio::test]
    async fn test_flag_off_is_noop() {
        let store = MemoryLocaleStore::new();
        let mut name = "Raw".to_string();
        let mut description = String::new();

        let outcome = apply_labels(&store, BUDGET, false, "pump", &mut name, &mut description).await;
        assert_eq!(outcome, LabelOutcome::Skipped);
        assert_eq!(name, "Raw");
    }

    #[tokio::test]
    async fn test_successful_lookup_overwrites_placeholders() {
        let mut store = MemoryLocaleStore::new();
        store.insert("pump", LocaleBundle::new("Pump Station", "Monitors a pump"));

        let mut name = "pump (placeholder)".to_string();
        let mut description = String::new();

        let outcome = apply_labels(&store, BUDGET, true, "pump", &mut name, &mut description).await;
        assert_eq!(outcome, LabelOutcome::Applied);
        assert_eq!(name, "Pump Station");
        assert_eq!(description, "Monitors a pump");
    }

    #[tokio::test]
    async fn test_empty_bundle_field_keeps_existing_label() {
        let mut store = MemoryLocaleStore::new();
        store.insert("pump", LocaleBundle::new("Pump Station", ""));

        let mut name = String::new();
        let mut description = "Authored description".to_string();

        apply_labels(&store, BUDGET, true, "pump", &mut name, &mut description).await;
        assert_eq!(name, "Pump Station");
        assert_eq!(description, "Authored description");
    }

    #[tokio::test]
    async fn test_failed_lookup_keeps_labels() {
        let mut name = "Raw".to_string();
        let mut description = "Raw description".to_string();

        let outcome =
            apply_labels(&NoLocales, BUDGET, true, "pump", &mut name, &mut description).await;
        assert_eq!(outcome, LabelOutcome::Degraded);
        assert_eq!(name, "Raw");
        assert_eq!(description, "Raw description");
    }

    /// Store whose lookups never complete, to exercise the timeout path.
    struct StalledStore;

    impl LocaleStore for StalledStore {
        async fn lookup(&self, _id: &str) -> Result<LocaleBundle, LocaleError> {
            std::future::pending().await
        }
    }

    #[tokio::test]
    async fn test_slow_lookup_times_out() {
        let mut name = "Raw".to_string();
        let mut description = String::new();

        let outcome = apply_labels(
            &StalledStore,
            Duration::from_millis(10),
            true,
            "pump",
            &mut name,
            &mut description,
        )
        .await;
        assert_eq!(outcome, LabelOutcome::Degraded);
        assert_eq!(name, "Raw");
    }
}
