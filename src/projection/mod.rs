//! Projection engine for year-by-year token supply projections

mod state;
mod engine;
mod snapshot;
mod summary;

pub use state::{ProjectionState, Transition};
pub use engine::{project, ProjectionEngine};
pub use snapshot::{ProjectionResult, YearSnapshot};
pub use summary::ProjectionSummary;

// ============================================================================
// Model Constants
// ============================================================================
// Fixed shape of the illustrative model. None of these are user parameters.
// - Genesis splits the initial supply into circulating and staked slices
// - Each year a tenth of the locked remainder vests
// - Staking is capped at a share of circulating supply

/// Share of the initial supply circulating at genesis (20%)
pub const INITIAL_CIRCULATING_FRACTION: f64 = 0.2;

/// Share of the initial supply staked at genesis (5%)
pub const INITIAL_STAKED_FRACTION: f64 = 0.05;

/// Share of the locked remainder that vests each year (10%)
pub const ANNUAL_VESTING_FRACTION: f64 = 0.1;

/// Maximum share of circulating supply that can be staked (80%)
pub const MAX_STAKED_FRACTION: f64 = 0.8;

/// Governance engagement multiplier once staking participation reaches the threshold
pub const GOVERNANCE_ENGAGED_FACTOR: f64 = 0.8;

/// Governance engagement multiplier below the threshold
pub const GOVERNANCE_DISENGAGED_FACTOR: f64 = 0.3;

/// Days per year used when converting the lockup period
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Staked supply as a percentage of circulating supply.
///
/// Unguarded: a zero circulating supply yields NaN or infinity.
pub fn staking_participation(staked: f64, circulating: f64) -> f64 {
    staked / circulating * 100.0
}

/// Governance participation derived from staking participation.
///
/// NaN participation compares false against the threshold and stays NaN.
pub fn governance_participation(staking_participation: f64, threshold: f64) -> f64 {
    let factor = if staking_participation >= threshold {
        GOVERNANCE_ENGAGED_FACTOR
    } else {
        GOVERNANCE_DISENGAGED_FACTOR
    };
    staking_participation * factor
}
