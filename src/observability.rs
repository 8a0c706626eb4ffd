//! Metrics for descriptor resolution, using metrics-rs.
//!
//! Degraded label lookups and negotiation outcomes are absorbed by the
//! resolver rather than surfaced as errors, so counters are the way to see
//! them from the outside.

use metrics::Unit;
use std::sync::atomic::{AtomicBool, Ordering};

/// Whether metrics have been initialized.
static METRICS_INITIALIZED: AtomicBool = AtomicBool::new(false);

// Metric names as constants for consistency
const DESCRIPTORS_CANONICALIZED: &str = "rivulet_descriptors_canonicalized";
const LABEL_LOOKUPS_DEGRADED: &str = "rivulet_label_lookups_degraded";
const GROUNDINGS_NEGOTIATED: &str = "rivulet_groundings_negotiated";
const GROUNDINGS_KEPT: &str = "rivulet_groundings_kept";

/// Initialize metrics descriptions.
///
/// Call this once at registry startup before serving descriptions.
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init_metrics() {
    if METRICS_INITIALIZED.swap(true, Ordering::SeqCst) {
        return; // Already initialized
    }

    metrics::describe_counter!(
        DESCRIPTORS_CANONICALIZED,
        Unit::Count,
        "Total number of descriptors canonicalized"
    );
    metrics::describe_counter!(
        LABEL_LOOKUPS_DEGRADED,
        Unit::Count,
        "Locale lookups that failed or timed out and were absorbed"
    );
    metrics::describe_counter!(
        GROUNDINGS_NEGOTIATED,
        Unit::Count,
        "Groundings overridden by the registry-wide negotiation context"
    );
    metrics::describe_counter!(
        GROUNDINGS_KEPT,
        Unit::Count,
        "Groundings kept as element-declared (registry had no opinion)"
    );
}

/// Record a completed canonicalization.
pub fn record_canonicalized() {
    metrics::counter!(DESCRIPTORS_CANONICALIZED).increment(1);
}

/// Record a degraded label lookup.
pub fn record_label_degraded() {
    metrics::counter!(LABEL_LOOKUPS_DEGRADED).increment(1);
}

/// Record a grounding overridden by the negotiation context.
pub fn record_grounding_negotiated() {
    metrics::counter!(GROUNDINGS_NEGOTIATED).increment(1);
}

/// Record a grounding kept as element-declared.
pub fn record_grounding_kept() {
    metrics::counter!(GROUNDINGS_KEPT).increment(1);
}
