use serde::{Deserialize, Serialize};

use crate::timeline::clustering::BinWidth;
use crate::types::identifiers::DocumentId;

/// Where a gloss search looks for matching attestations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "scope", content = "document_id", rename_all = "lowercase")]
pub enum SearchScope {
    Global,
    Document(DocumentId),
}

/// Input to the external "search by gloss" query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlossQuery {
    pub gloss: String,
    pub scope: SearchScope,
}

impl GlossQuery {
    /// Segments tagged for cross-document matching search the whole corpus;
    /// all others stay within their own document.
    pub fn for_segment(
        gloss: impl Into<String>,
        document_id: &DocumentId,
        cross_document: bool,
    ) -> Self {
        let scope = if cross_document {
            SearchScope::Global
        } else {
            SearchScope::Document(document_id.clone())
        };
        Self {
            gloss: gloss.into(),
            scope,
        }
    }
}

/// Input to the external "timeline by gloss" query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineRequest {
    pub gloss: String,
    pub bin_width: BinWidth,
}

impl TimelineRequest {
    pub fn new(gloss: impl Into<String>) -> Self {
        Self {
            gloss: gloss.into(),
            bin_width: BinWidth::default(),
        }
    }

    pub fn with_bin_width(mut self, bin_width: BinWidth) -> Self {
        self.bin_width = bin_width;
        self
    }
}
