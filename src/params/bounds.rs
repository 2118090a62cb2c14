//! Slider ranges used by the simulator page
//!
//! The engine never enforces these. Callers that let users drag sliders
//! clamp through [`ParameterBounds::clamp`] before projecting.

use super::SimulationParameters;
use serde::{Deserialize, Serialize};

/// Inclusive range with a slider step
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Range {
    pub const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    /// Clamp into [min, max]. NaN collapses to `min`.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min;
        }
        value.clamp(self.min, self.max)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParameterBounds {
    pub inflation_rate: Range,
    pub burn_rate: Range,
    pub staking_reward: Range,
    pub lockup_period: Range,
    pub governance_threshold: Range,
    pub simulation_years: Range,
}

impl Default for ParameterBounds {
    fn default() -> Self {
        Self {
            inflation_rate: Range::new(0.0, 20.0, 0.1),
            burn_rate: Range::new(0.0, 10.0, 0.1),
            staking_reward: Range::new(0.0, 25.0, 0.5),
            lockup_period: Range::new(0.0, 365.0, 1.0),
            governance_threshold: Range::new(0.0, 100.0, 1.0),
            simulation_years: Range::new(1.0, 30.0, 1.0),
        }
    }
}

impl ParameterBounds {
    /// Copy of `params` with every slider-controlled field pulled into range.
    ///
    /// Supplies are free-form number inputs on the page: a non-positive
    /// initial supply is left alone, but max supply is raised to at least
    /// the initial supply.
    pub fn clamp(&self, params: &SimulationParameters) -> SimulationParameters {
        let clamped = SimulationParameters {
            initial_supply: params.initial_supply,
            max_supply: params.max_supply.max(params.initial_supply),
            inflation_rate: self.inflation_rate.clamp(params.inflation_rate),
            burn_rate: self.burn_rate.clamp(params.burn_rate),
            staking_reward: self.staking_reward.clamp(params.staking_reward),
            lockup_period: self.lockup_period.clamp(params.lockup_period as f64) as u32,
            governance_threshold: self.governance_threshold.clamp(params.governance_threshold),
            simulation_years: self.simulation_years.clamp(params.simulation_years as f64) as u32,
        };
        if &clamped != params {
            log::debug!("Clamped parameters into slider ranges: {:?}", clamped);
        }
        clamped
    }

    /// True when every slider-controlled field already sits inside its range
    pub fn contains(&self, params: &SimulationParameters) -> bool {
        self.inflation_rate.contains(params.inflation_rate)
            && self.burn_rate.contains(params.burn_rate)
            && self.staking_reward.contains(params.staking_reward)
            && self.lockup_period.contains(params.lockup_period as f64)
            && self.governance_threshold.contains(params.governance_threshold)
            && self.simulation_years.contains(params.simulation_years as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_within_bounds() {
        let bounds = ParameterBounds::default();
        assert!(bounds.contains(&SimulationParameters::default()));
    }

    #[test]
    fn test_clamp_pulls_into_range() {
        let bounds = ParameterBounds::default();
        let params = SimulationParameters {
            inflation_rate: 45.0,
            burn_rate: -2.0,
            staking_reward: f64::NAN,
            lockup_period: 1000,
            simulation_years: 0,
            max_supply: 1.0,
            ..Default::default()
        };
        let clamped = bounds.clamp(&params);

        assert_eq!(clamped.inflation_rate, 20.0);
        assert_eq!(clamped.burn_rate, 0.0);
        assert_eq!(clamped.staking_reward, 0.0);
        assert_eq!(clamped.lockup_period, 365);
        assert_eq!(clamped.simulation_years, 1);
        assert_eq!(clamped.max_supply, clamped.initial_supply);
        assert!(bounds.contains(&clamped));
    }

    #[test]
    fn test_clamp_leaves_valid_params_alone() {
        let bounds = ParameterBounds::default();
        let params = SimulationParameters::default();
        assert_eq!(bounds.clamp(&params), params);
    }
}
