//! Field mapping onto the canonical record

use super::flatten::FlatWord;

/// Separator between the coarse tag and the feature string in `tag`
pub const TAG_SEPARATOR: &str = "__";

/// Pipeline-independent fields of one record, before positions are assigned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedFields {
    pub pos: String,
    pub tag: String,
    pub dep: String,
    pub text: String,
    pub idx: usize,
    pub lemma: String,
}

/// Compose the canonical tag: `pos` alone, or `pos__features`
pub fn compose_tag(pos: &str, features: Option<&str>) -> String {
    match features {
        Some(features) => format!("{pos}{TAG_SEPARATOR}{features}"),
        None => pos.to_string(),
    }
}

/// Map one flattened word onto canonical fields.
///
/// `idx` is the resolved offset of the enclosing surface unit; it is shared
/// with every other word of that unit, as is `text`.
pub fn normalize(flat: &FlatWord<'_>, idx: usize) -> NormalizedFields {
    NormalizedFields {
        pos: flat.word.pos.clone(),
        tag: compose_tag(&flat.word.pos, flat.word.features.as_deref()),
        dep: flat.word.dep.to_lowercase(),
        text: flat.unit.text.clone(),
        idx,
        lemma: flat.lemma.to_lowercase(),
    }
}
