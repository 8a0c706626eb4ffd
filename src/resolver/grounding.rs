//! Transport grounding negotiation.
//!
//! The registry, not the individual element, is authoritative about
//! transport once it has opinions: when the negotiation context carries both
//! non-empty protocol and format sets, it replaces the element-declared
//! grounding wholesale. Otherwise the element's self-declared capability
//! stands untouched. There is no partial negotiation: protocol and format
//! lists are replaced together or not at all.

use crate::context::NegotiationContext;
use crate::model::EventGrounding;
use crate::observability;

/// Outcome of negotiating one entity's grounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NegotiationOutcome {
    /// The context's protocol/format lists replaced the declared grounding.
    Negotiated,
    /// The registry had no opinion; the declared grounding was kept.
    Skipped,
}

/// Negotiate a consumable entity's grounding against the registry context.
///
/// `entity_id` is only used for logging.
pub(crate) fn negotiate(
    grounding: &mut Option<EventGrounding>,
    context: &NegotiationContext,
    entity_id: &str,
) -> NegotiationOutcome {
    if !context.has_opinion() {
        tracing::debug!(id = %entity_id, "negotiation skipped, registry has no transport opinion");
        observability::record_grounding_kept();
        return NegotiationOutcome::Skipped;
    }

    *grounding = Some(EventGrounding {
        protocols: context.supported_protocols.clone(),
        formats: context.supported_formats.clone(),
    });
    observability::record_grounding_negotiated();
    NegotiationOutcome::Negotiated
}
