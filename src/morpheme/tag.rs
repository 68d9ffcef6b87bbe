use serde::{Deserialize, Serialize};

/// Display fields for one terminology system. Any field may be absent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TagVariant {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
}

impl TagVariant {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.short_label.is_none() && self.definition.is_none()
    }
}

/// Descriptive metadata for a grammatical morpheme.
///
/// The top-level fields are the base system's view; `learner` and `crg`
/// hold the per-system overrides and default to empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MorphemeTag {
    pub id: String,
    #[serde(flatten)]
    pub base: TagVariant,
    #[serde(default, skip_serializing_if = "TagVariant::is_empty")]
    pub learner: TagVariant,
    #[serde(default, skip_serializing_if = "TagVariant::is_empty")]
    pub crg: TagVariant,
}

impl MorphemeTag {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            base: TagVariant::default(),
            learner: TagVariant::default(),
            crg: TagVariant::default(),
        }
    }
}
