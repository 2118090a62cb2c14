//! Projection output structures

use super::ProjectionSummary;
use crate::params::SimulationParameters;
use serde::{Deserialize, Serialize};

/// One row of a projection: supply and participation metrics for a year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearSnapshot {
    pub year: u32,
    pub total_supply: f64,
    pub circulating_supply: f64,
    pub staked_supply: f64,
    pub burned_supply: f64,
    /// Realized % growth of total supply from this year into the next.
    /// Zero on the final year.
    pub effective_inflation: f64,
    pub staking_participation: f64,
    pub governance_participation: f64,
}

impl YearSnapshot {
    /// True if any metric is NaN or infinite
    pub fn is_degenerate(&self) -> bool {
        ![
            self.total_supply,
            self.circulating_supply,
            self.staked_supply,
            self.burned_supply,
            self.effective_inflation,
            self.staking_participation,
            self.governance_participation,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}

/// Complete projection result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionResult {
    pub params: SimulationParameters,
    /// One snapshot per year, year 0 through `simulation_years`
    pub snapshots: Vec<YearSnapshot>,
}

impl ProjectionResult {
    pub fn final_snapshot(&self) -> Option<&YearSnapshot> {
        self.snapshots.last()
    }

    /// First year holding a NaN or infinite metric, if any
    pub fn first_degenerate_year(&self) -> Option<u32> {
        self.snapshots
            .iter()
            .find(|s| s.is_degenerate())
            .map(|s| s.year)
    }

    pub fn summary(&self) -> Option<ProjectionSummary> {
        ProjectionSummary::from_snapshots(&self.snapshots)
    }
}
