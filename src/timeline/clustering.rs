use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::attestation::Attestation;

pub const DEFAULT_BIN_WIDTH: u32 = 50;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClusterError {
    #[error("Invalid bin width: {0}")]
    InvalidBinWidth(u32),
}

/// Width of a time bin in years. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct BinWidth(u32);

impl BinWidth {
    pub fn new(years: u32) -> Result<Self, ClusterError> {
        if years == 0 {
            return Err(ClusterError::InvalidBinWidth(years));
        }
        Ok(BinWidth(years))
    }

    pub fn years(self) -> u32 {
        self.0
    }
}

impl Default for BinWidth {
    fn default() -> Self {
        BinWidth(DEFAULT_BIN_WIDTH)
    }
}

impl TryFrom<u32> for BinWidth {
    type Error = ClusterError;

    fn try_from(years: u32) -> Result<Self, Self::Error> {
        BinWidth::new(years)
    }
}

impl From<BinWidth> for u32 {
    fn from(width: BinWidth) -> u32 {
        width.0
    }
}

/// The historical period a bin covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Period {
    /// `start == end` when the member years sit exactly on a bin boundary.
    Span { start: i64, end: i64 },
    /// Attestations with no date.
    Unknown,
}

impl Period {
    pub fn key(&self) -> String {
        match self {
            Period::Span { start, end } => format!("{start}-{end}"),
            Period::Unknown => "unknown".to_string(),
        }
    }

    pub fn label(&self) -> String {
        match self {
            Period::Span { start, end } if start == end => start.to_string(),
            Period::Span { start, end } => format!("{start}\u{2013}{end}"),
            Period::Unknown => "Unknown period".to_string(),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeBin {
    pub period: Period,
    pub members: Vec<Attestation>,
}

/// Bounds of the bin holding `year`: floor and ceiling to a multiple of the width.
///
/// The two are computed independently, so a year that is an exact multiple
/// of the width gets a zero-width bin `(year, year)`.
pub fn period_bounds(year: i32, width: BinWidth) -> (i64, i64) {
    let year = i64::from(year);
    let width = i64::from(width.years());

    let start = year.div_euclid(width) * width;
    let end = if year.rem_euclid(width) == 0 {
        start
    } else {
        start + width
    };
    (start, end)
}

/// Bucket attestations into fixed-width periods in a single pass.
///
/// Dated bins appear in the order their first member is encountered.
/// Undated attestations go into one trailing `Unknown` bin, present only
/// when at least one exists. Member order within a bin follows input order.
pub fn build_clusters<I>(attestations: I, width: BinWidth) -> Vec<TimeBin>
where
    I: IntoIterator<Item = Attestation>,
{
    let mut bins: Vec<TimeBin> = Vec::new();
    let mut positions: BTreeMap<(i64, i64), usize> = BTreeMap::new();
    let mut unknown: Vec<Attestation> = Vec::new();

    for attestation in attestations {
        let Some(year) = attestation.year() else {
            unknown.push(attestation);
            continue;
        };

        let (start, end) = period_bounds(year, width);
        match positions.get(&(start, end)) {
            Some(&idx) => bins[idx].members.push(attestation),
            None => {
                positions.insert((start, end), bins.len());
                bins.push(TimeBin {
                    period: Period::Span { start, end },
                    members: vec![attestation],
                });
            }
        }
    }

    debug!(
        dated_bins = bins.len(),
        undated = unknown.len(),
        width = width.years(),
        "clustered attestations"
    );

    if !unknown.is_empty() {
        bins.push(TimeBin {
            period: Period::Unknown,
            members: unknown,
        });
    }

    bins
}
