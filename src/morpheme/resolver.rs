use crate::morpheme::tag::{MorphemeTag, TagVariant};
use crate::types::terminology::TerminologySystem;

/// Pick the variant of `tag` that `system` displays.
///
/// `None` only when no tag was found upstream. A defined tag always yields a
/// variant, though an override may have every field empty.
pub fn resolve(tag: Option<&MorphemeTag>, system: TerminologySystem) -> Option<&TagVariant> {
    let tag = tag?;
    let variant = match system {
        TerminologySystem::Base => &tag.base,
        TerminologySystem::Learner => &tag.learner,
        TerminologySystem::Crg => &tag.crg,
    };
    Some(variant)
}

/// Short label to show for a morpheme segment.
///
/// Falls back from the requested variant to the base record, then to the tag
/// id. Without a tag the raw gloss from the segment is shown.
pub fn display_label<'a>(
    tag: Option<&'a MorphemeTag>,
    system: TerminologySystem,
    raw_gloss: &'a str,
) -> &'a str {
    let Some(tag) = tag else {
        return raw_gloss;
    };

    resolve(Some(tag), system)
        .and_then(|v| non_empty(v.short_label.as_deref()))
        .or_else(|| non_empty(tag.base.short_label.as_deref()))
        .unwrap_or(tag.id.as_str())
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}
