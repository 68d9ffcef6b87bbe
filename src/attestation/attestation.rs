use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};

use crate::types::identifiers::DocumentId;

/// Date attached to a source document. Only the year drives clustering.
///
/// A missing, null or non-integer year parses as `None`, so the record still
/// arrives and is treated as undated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceDate {
    #[serde(default, deserialize_with = "lenient_year")]
    pub year: Option<i32>,
}

impl SourceDate {
    pub fn year(year: i32) -> Self {
        Self { year: Some(year) }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self::year(date.year())
    }
}

fn lenient_year<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(serde_json::Value::as_i64)
        .and_then(|y| i32::try_from(y).ok()))
}

fn lenient_date<'de, D>(deserializer: D) -> Result<Option<SourceDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}

/// A single recorded instance of a word form in a source document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attestation {
    pub document_id: DocumentId,
    #[serde(default)]
    pub word_index: Option<u32>,
    pub source_writing: String,
    #[serde(default)]
    pub normalized_writing: Option<String>,
    #[serde(default)]
    pub phonetic_writing: Option<String>,
    #[serde(default)]
    pub romanized_writing: Option<String>,
    #[serde(default)]
    pub english_glosses: Vec<String>,
    #[serde(default, deserialize_with = "lenient_date")]
    pub source_date: Option<SourceDate>,
}

impl Attestation {
    pub fn new(document_id: impl Into<DocumentId>, source_writing: impl Into<String>) -> Self {
        Self {
            document_id: document_id.into(),
            word_index: None,
            source_writing: source_writing.into(),
            normalized_writing: None,
            phonetic_writing: None,
            romanized_writing: None,
            english_glosses: Vec::new(),
            source_date: None,
        }
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.source_date = Some(SourceDate::year(year));
        self
    }

    pub fn with_normalized(mut self, normalized: impl Into<String>) -> Self {
        self.normalized_writing = Some(normalized.into());
        self
    }

    pub fn with_romanized(mut self, romanized: impl Into<String>) -> Self {
        self.romanized_writing = Some(romanized.into());
        self
    }

    pub fn with_glosses<I, S>(mut self, glosses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.english_glosses = glosses.into_iter().map(Into::into).collect();
        self
    }

    pub fn year(&self) -> Option<i32> {
        self.source_date.and_then(|d| d.year)
    }

    /// Written form used to decide whether two attestations are the same word.
    /// The normalized writing wins unless it is missing or empty.
    pub fn dedup_key(&self) -> &str {
        match self.normalized_writing.as_deref() {
            Some(normalized) if !normalized.is_empty() => normalized,
            _ => &self.source_writing,
        }
    }
}
