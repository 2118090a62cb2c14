//! Parameter sensitivity sweeps
//!
//! Each sweep value gets its own independent projection, so the runs are
//! spread across threads with rayon.

use crate::error::SweepError;
use crate::params::SimulationParameters;
use crate::projection::{project, ProjectionSummary};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Parameter varied by a sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "camelCase")]
pub enum SweepField {
    InflationRate,
    BurnRate,
    StakingReward,
    LockupPeriod,
    GovernanceThreshold,
}

impl SweepField {
    /// Copy of `base` with this field set to `value`.
    ///
    /// Lockup is whole days: the value is rounded and floored at zero.
    pub fn apply(self, base: &SimulationParameters, value: f64) -> SimulationParameters {
        let mut params = base.clone();
        match self {
            SweepField::InflationRate => params.inflation_rate = value,
            SweepField::BurnRate => params.burn_rate = value,
            SweepField::StakingReward => params.staking_reward = value,
            SweepField::LockupPeriod => params.lockup_period = value.round().max(0.0) as u32,
            SweepField::GovernanceThreshold => params.governance_threshold = value,
        }
        params
    }
}

/// Outcome of one sweep run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    pub value: f64,
    pub summary: ProjectionSummary,
}

/// Run one projection per value, results in input order
pub fn sweep(base: &SimulationParameters, field: SweepField, values: &[f64]) -> Vec<SweepPoint> {
    log::debug!("Sweeping {:?} over {} values", field, values.len());

    values
        .par_iter()
        .filter_map(|&value| {
            let snapshots = project(&field.apply(base, value));
            ProjectionSummary::from_snapshots(&snapshots).map(|summary| SweepPoint { value, summary })
        })
        .collect()
}

/// Upper bound on the number of values a single sweep may request
pub const MAX_SWEEP_VALUES: usize = 10_000;

/// Evenly stepped values from `from` to `to` inclusive.
///
/// Values are computed as `from + i * step` so rounding does not
/// accumulate. A non-positive step or an inverted range yields `[from]`.
/// Non-finite bounds and ranges longer than [`MAX_SWEEP_VALUES`] are rejected.
pub fn linspace_step(from: f64, to: f64, step: f64) -> Result<Vec<f64>, SweepError> {
    for (field, value) in [("from", from), ("to", to), ("step", step)] {
        if !value.is_finite() {
            return Err(SweepError::NotFinite { field, value });
        }
    }
    if step <= 0.0 || to < from {
        return Ok(vec![from]);
    }

    let count = ((to - from) / step + 1e-9).floor() + 1.0;
    if !count.is_finite() || count > MAX_SWEEP_VALUES as f64 {
        return Err(SweepError::TooManyValues { count, limit: MAX_SWEEP_VALUES });
    }
    let count = count as usize;
    Ok((0..count).map(|i| from + i as f64 * step).collect())
}
