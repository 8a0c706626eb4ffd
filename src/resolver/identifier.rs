//! Canonical identifier assignment.
//!
//! New identifiers are pure string composition over a trusted base
//! authority: `base + category segment + original raw identifier`. Nested
//! stream identifiers embed the owning descriptor's original identifier as a
//! path segment, never the rewritten one.

use super::error::ResolveError;
use crate::model::{ElementCategory, ElementDescriptor};

/// URI path segment for each category.
///
/// The `Stream` case scopes the identifier under its owning source, so it
/// needs the owner's raw identifier as context.
fn category_segment(category: ElementCategory, context_segment: &str) -> String {
    match category {
        ElementCategory::Processor => "processor/".to_string(),
        ElementCategory::Source => "source/".to_string(),
        ElementCategory::Sink => "sink/".to_string(),
        ElementCategory::Stream => format!("source/{context_segment}/"),
    }
}

/// Rewrite the descriptor's identifier and those of its nested streams.
///
/// `context_segment` is only consulted for `Stream`-category descriptors;
/// other categories ignore it. The descriptor must still carry its raw
/// identifier: the caller is responsible for saving originals beforehand if
/// it needs them (label resolution does).
pub(crate) fn assign_identifiers(
    descriptor: &mut ElementDescriptor,
    base_uri: &str,
    context_segment: &str,
) -> Result<(), ResolveError> {
    if descriptor.id.is_empty() {
        return Err(ResolveError::EmptyIdentifier);
    }
    if descriptor.category == ElementCategory::Stream && context_segment.is_empty() {
        return Err(ResolveError::MissingContextSegment {
            id: descriptor.id.clone(),
        });
    }

    let segment = category_segment(descriptor.category, context_segment);
    let original_id = descriptor.id.clone();
    descriptor.id = format!("{base_uri}{segment}{original_id}");

    // Stream identifiers hang off the owner's original identifier; streams
    // have no nested entities, so rewriting stops here.
    if descriptor.category == ElementCategory::Source {
        for stream in &mut descriptor.streams {
            if stream.id.is_empty() {
                return Err(ResolveError::EmptyIdentifier);
            }
            stream.id = format!("{base_uri}source/{original_id}/{}", stream.id);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StreamDescriptor;

    const BASE: &str = "https://registry/";

    #[test]
    fn test_processor_segment() {
        let mut d = ElementDescriptor::new("enricher", ElementCategory::Processor);
        assign_identifiers(&mut d, BASE, "").unwrap();
        assert_eq!(d.id, "https://registry/processor/enricher");
    }

    #[test]
    fn test_sink_segment() {
        let mut d = ElementDescriptor::new("dashboard", ElementCategory::Sink);
        assign_identifiers(&mut d, BASE, "").unwrap();
        assert_eq!(d.id, "https://registry/sink/dashboard");
    }

    #[test]
    fn test_stream_segment_uses_context() {
        let mut d = ElementDescriptor::new("pressure", ElementCategory::Stream);
        assign_identifiers(&mut d, BASE, "gearbox").unwrap();
        assert_eq!(d.id, "https://registry/source/gearbox/pressure");
    }

    #[test]
    fn test_stream_without_context_is_rejected() {
        let mut d = ElementDescriptor::new("pressure", ElementCategory::Stream);
        assert!(matches!(
            assign_identifiers(&mut d, BASE, ""),
            Err(ResolveError::MissingContextSegment { .. })
        ));
    }

    #[test]
    fn test_source_streams_embed_original_id() {
        let mut d = ElementDescriptor::new("gearbox", ElementCategory::Source)
            .with_stream(StreamDescriptor::new("pressure"))
            .with_stream(StreamDescriptor::new("torque"));
        assign_identifiers(&mut d, BASE, "").unwrap();

        assert_eq!(d.id, "https://registry/source/gearbox");
        assert_eq!(d.streams[0].id, "https://registry/source/gearbox/pressure");
        assert_eq!(d.streams[1].id, "https://registry/source/gearbox/torque");
    }

    #[test]
    fn test_non_source_streams_untouched() {
        // A processor should never carry streams, but if one does they are
        // not part of the source addressing scheme.
        let mut d = ElementDescriptor::new("enricher", ElementCategory::Processor)
            .with_stream(StreamDescriptor::new("ignored"));
        assign_identifiers(&mut d, BASE, "").unwrap();
        assert_eq!(d.streams[0].id, "ignored");
    }

    #[test]
    fn test_empty_identifier_rejected() {
        let mut d = ElementDescriptor::new("", ElementCategory::Source);
        assert!(matches!(
            assign_identifiers(&mut d, BASE, ""),
            Err(ResolveError::EmptyIdentifier)
        ));

        let mut d = ElementDescriptor::new("gearbox", ElementCategory::Source)
            .with_stream(StreamDescriptor::new(""));
        assert!(matches!(
            assign_identifiers(&mut d, BASE, ""),
            Err(ResolveError::EmptyIdentifier)
        ));
    }
}
