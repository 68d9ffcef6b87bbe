use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::attestation::Attestation;
use crate::types::identifiers::{DocumentId, RowKey};

/// Several attestations of one written form collapsed into a single row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergedRow {
    pub written_form: String,
    /// Distinct contributing documents, in encounter order.
    pub document_ids: Vec<DocumentId>,
    #[serde(default)]
    pub romanization: Option<String>,
    #[serde(default)]
    pub english_glosses: Vec<String>,
    pub occurrences: usize,
}

impl MergedRow {
    pub fn document_list(&self) -> String {
        self.document_ids
            .iter()
            .map(DocumentId::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DisplayRow {
    Single(Attestation),
    Merged(MergedRow),
}

impl DisplayRow {
    pub fn written_form(&self) -> &str {
        match self {
            DisplayRow::Single(attestation) => attestation.dedup_key(),
            DisplayRow::Merged(row) => &row.written_form,
        }
    }

    pub fn document_ids(&self) -> Vec<&DocumentId> {
        match self {
            DisplayRow::Single(attestation) => vec![&attestation.document_id],
            DisplayRow::Merged(row) => row.document_ids.iter().collect(),
        }
    }

    /// Stable identity for list rendering.
    pub fn key(&self) -> RowKey {
        let docs = self.document_ids();
        RowKey::from_parts(
            std::iter::once(self.written_form()).chain(docs.iter().map(|d| d.as_str())),
        )
    }
}

/// Collapse attestations sharing a dedup key into merged rows.
///
/// Rows come out in first-seen key order. A key seen once passes its
/// attestation through unchanged. Every input document id stays reachable
/// from the output rows.
pub fn dedupe(bin: &[Attestation]) -> Vec<DisplayRow> {
    let mut groups: Vec<Vec<&Attestation>> = Vec::new();
    let mut positions: BTreeMap<&str, usize> = BTreeMap::new();

    for attestation in bin {
        let key = attestation.dedup_key();
        match positions.get(key) {
            Some(&idx) => groups[idx].push(attestation),
            None => {
                positions.insert(key, groups.len());
                groups.push(vec![attestation]);
            }
        }
    }

    groups.into_iter().map(collapse).collect()
}

fn collapse(group: Vec<&Attestation>) -> DisplayRow {
    if let [only] = group.as_slice() {
        return DisplayRow::Single((*only).clone());
    }

    let mut document_ids: Vec<DocumentId> = Vec::new();
    for attestation in &group {
        if !document_ids.contains(&attestation.document_id) {
            document_ids.push(attestation.document_id.clone());
        }
    }

    let romanization = group
        .iter()
        .filter_map(|a| a.romanized_writing.as_deref())
        .find(|r| !r.is_empty())
        .map(str::to_string);

    let english_glosses = group
        .iter()
        .map(|a| &a.english_glosses)
        .find(|g| !g.is_empty())
        .cloned()
        .unwrap_or_default();

    DisplayRow::Merged(MergedRow {
        written_form: group[0].dedup_key().to_string(),
        document_ids,
        romanization,
        english_glosses,
        occurrences: group.len(),
    })
}
