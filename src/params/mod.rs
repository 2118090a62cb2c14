//! Simulation parameters, validation and presets

mod bounds;
mod presets;
pub mod loader;

pub use bounds::{ParameterBounds, Range};
pub use presets::Preset;

use crate::error::ParamError;
use serde::{Deserialize, Serialize};

/// Economic parameters for a single projection run
///
/// Field names serialize in camelCase so a record posted by the simulator
/// page deserializes directly. Missing fields fall back to the simulator
/// defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationParameters {
    /// Token count at genesis
    #[serde(default = "default_initial_supply")]
    pub initial_supply: f64,

    /// Hard ceiling on total supply
    #[serde(default = "default_max_supply")]
    pub max_supply: f64,

    /// Annual % minted relative to total supply
    #[serde(default = "default_inflation_rate")]
    pub inflation_rate: f64,

    /// Annual % of circulating supply destroyed
    #[serde(default = "default_burn_rate")]
    pub burn_rate: f64,

    /// Annual % yield paid to staked tokens
    #[serde(default = "default_staking_reward")]
    pub staking_reward: f64,

    /// Staking lockup in days. Longer lockups damp staking growth.
    #[serde(default = "default_lockup_period")]
    pub lockup_period: u32,

    /// Staking participation % at which governance engagement jumps
    #[serde(default = "default_governance_threshold")]
    pub governance_threshold: f64,

    /// Number of yearly steps to project
    #[serde(default = "default_simulation_years")]
    pub simulation_years: u32,
}

fn default_initial_supply() -> f64 { 100_000_000.0 }
fn default_max_supply() -> f64 { 1_000_000_000.0 }
fn default_inflation_rate() -> f64 { 5.0 }
fn default_burn_rate() -> f64 { 1.0 }
fn default_staking_reward() -> f64 { 8.0 }
fn default_lockup_period() -> u32 { 30 }
fn default_governance_threshold() -> f64 { 5.0 }
fn default_simulation_years() -> u32 { 10 }

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            initial_supply: default_initial_supply(),
            max_supply: default_max_supply(),
            inflation_rate: default_inflation_rate(),
            burn_rate: default_burn_rate(),
            staking_reward: default_staking_reward(),
            lockup_period: default_lockup_period(),
            governance_threshold: default_governance_threshold(),
            simulation_years: default_simulation_years(),
        }
    }
}

impl SimulationParameters {
    /// Check the record against the model's type constraints.
    ///
    /// The engine accepts anything and never calls this; it exists for
    /// callers that want to reject input before projecting.
    pub fn validate(&self) -> Result<(), ParamError> {
        let reals = [
            ("initialSupply", self.initial_supply),
            ("maxSupply", self.max_supply),
            ("inflationRate", self.inflation_rate),
            ("burnRate", self.burn_rate),
            ("stakingReward", self.staking_reward),
            ("governanceThreshold", self.governance_threshold),
        ];
        for (field, value) in reals {
            if !value.is_finite() {
                return Err(ParamError::NotFinite { field, value });
            }
        }

        if self.initial_supply <= 0.0 {
            return Err(ParamError::NonPositiveSupply(self.initial_supply));
        }
        if self.max_supply < self.initial_supply {
            return Err(ParamError::MaxBelowInitial {
                max: self.max_supply,
                initial: self.initial_supply,
            });
        }

        let rates = [
            ("inflationRate", self.inflation_rate),
            ("burnRate", self.burn_rate),
            ("stakingReward", self.staking_reward),
        ];
        for (field, value) in rates {
            if !(0.0..=100.0).contains(&value) {
                return Err(ParamError::RateOutOfRange { field, value });
            }
        }

        if self.simulation_years == 0 {
            return Err(ParamError::NoYears);
        }
        Ok(())
    }

    /// Parse a (possibly partial) JSON parameter record
    pub fn from_json_str(json: &str) -> Result<Self, ParamError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a (possibly partial) JSON parameter record from a file
    pub fn from_json_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, ParamError> {
        loader::load_params(path)
    }
}
