//! Headline statistics over a projection

use super::YearSnapshot;
use serde::{Deserialize, Serialize};

/// Figures shown under the simulator charts
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionSummary {
    pub final_year: u32,
    pub final_total_supply: f64,
    pub final_circulating_supply: f64,
    pub final_staked_supply: f64,
    pub final_burned_supply: f64,
    pub final_staking_participation: f64,
    /// Mean effective inflation across every snapshot, trailing zero included
    pub average_effective_inflation: f64,
    pub peak_total_supply: f64,
    pub peak_year: u32,
    /// Any snapshot holds a NaN or infinite metric
    pub degenerate: bool,
}

impl ProjectionSummary {
    /// Summarize a projection. Returns `None` for an empty slice.
    pub fn from_snapshots(snapshots: &[YearSnapshot]) -> Option<Self> {
        let last = snapshots.last()?;

        let average_effective_inflation = snapshots
            .iter()
            .map(|s| s.effective_inflation)
            .sum::<f64>()
            / snapshots.len() as f64;

        // First year wins on ties; NaN never displaces a peak
        let mut peak = &snapshots[0];
        for s in &snapshots[1..] {
            if s.total_supply > peak.total_supply {
                peak = s;
            }
        }

        Some(Self {
            final_year: last.year,
            final_total_supply: last.total_supply,
            final_circulating_supply: last.circulating_supply,
            final_staked_supply: last.staked_supply,
            final_burned_supply: last.burned_supply,
            final_staking_participation: last.staking_participation,
            average_effective_inflation,
            peak_total_supply: peak.total_supply,
            peak_year: peak.year,
            degenerate: snapshots.iter().any(|s| s.is_degenerate()),
        })
    }
}
