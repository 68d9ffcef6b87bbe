pub mod clustering;
pub mod dedup;

use serde::{Deserialize, Serialize};

use crate::attestation::Attestation;
pub use clustering::{
    build_clusters, period_bounds, BinWidth, ClusterError, Period, TimeBin, DEFAULT_BIN_WIDTH,
};
pub use dedup::{dedupe, DisplayRow, MergedRow};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimelineConfig {
    pub bin_width: BinWidth,
}

impl TimelineConfig {
    pub fn v0() -> Self {
        Self {
            bin_width: BinWidth::default(),
        }
    }
}

/// One period of a rendered timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelinePeriod {
    pub period: Period,
    pub rows: Vec<DisplayRow>,
}

/// Cluster attestations by period, then collapse duplicates within each period.
pub fn build_timeline<I>(attestations: I, config: &TimelineConfig) -> Vec<TimelinePeriod>
where
    I: IntoIterator<Item = Attestation>,
{
    build_clusters(attestations, config.bin_width)
        .into_iter()
        .map(|bin| TimelinePeriod {
            period: bin.period,
            rows: dedupe(&bin.members),
        })
        .collect()
}
