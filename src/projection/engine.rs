//! Core projection engine

use super::{ProjectionResult, ProjectionState, YearSnapshot};
use crate::params::SimulationParameters;

/// Project token supply year by year.
///
/// Returns `simulation_years + 1` snapshots (year 0 included). The function
/// is total: inputs are not validated and degenerate states (for example a
/// circulating supply that reaches zero) surface as NaN or infinite metrics.
pub fn project(params: &SimulationParameters) -> Vec<YearSnapshot> {
    let mut state = ProjectionState::genesis(params);
    let mut snapshots = Vec::with_capacity(params.simulation_years as usize + 1);
    snapshots.push(state.snapshot(params.governance_threshold));

    for _ in 0..params.simulation_years {
        state.advance(params);
        snapshots.push(state.snapshot(params.governance_threshold));
    }

    fill_effective_inflation(&mut snapshots);
    snapshots
}

/// Assign each snapshot the realized growth of total supply into the
/// following year. The last snapshot has no following year and keeps zero.
fn fill_effective_inflation(snapshots: &mut [YearSnapshot]) {
    for i in 1..snapshots.len() {
        let previous = snapshots[i - 1].total_supply;
        let next = snapshots[i].total_supply;
        snapshots[i - 1].effective_inflation = (next - previous) / previous * 100.0;
    }
}

/// Projection engine bound to one parameter set
#[derive(Debug, Clone)]
pub struct ProjectionEngine {
    params: SimulationParameters,
}

impl ProjectionEngine {
    pub fn new(params: SimulationParameters) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &SimulationParameters {
        &self.params
    }

    /// Run the projection, keeping the inputs alongside the snapshots
    pub fn run(&self) -> ProjectionResult {
        log::debug!(
            "Projecting {} years from initial supply {:.0}",
            self.params.simulation_years,
            self.params.initial_supply
        );

        let result = ProjectionResult {
            params: self.params.clone(),
            snapshots: project(&self.params),
        };

        if let Some(year) = result.first_degenerate_year() {
            log::warn!("Projection produced non-finite metrics from year {}", year);
        }
        if let Some(last) = result.final_snapshot() {
            log::debug!(
                "Projection complete: year {} total supply {:.0}",
                last.year,
                last.total_supply
            );
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_years_single_snapshot() {
        let params = SimulationParameters { simulation_years: 0, ..Default::default() };
        let snapshots = project(&params);
        assert_eq!(snapshots.len(), 1);
        assert_eq!(snapshots[0].year, 0);
        assert_eq!(snapshots[0].effective_inflation, 0.0);
    }

    #[test]
    fn test_effective_inflation_looks_forward() {
        let params = SimulationParameters::default();
        let snapshots = project(&params);

        for pair in snapshots.windows(2) {
            let expected = (pair[1].total_supply - pair[0].total_supply) / pair[0].total_supply * 100.0;
            assert_eq!(pair[0].effective_inflation, expected);
        }
        // Year 0 -> 1: +5M minted, -0.2M burned on 100M
        assert!((snapshots[0].effective_inflation - 4.8).abs() < 1e-9);
        assert_eq!(snapshots.last().map(|s| s.effective_inflation), Some(0.0));
    }

    #[test]
    fn test_engine_run_keeps_params() {
        let params = SimulationParameters { simulation_years: 5, ..Default::default() };
        let result = ProjectionEngine::new(params.clone()).run();
        assert_eq!(result.params, params);
        assert_eq!(result.snapshots.len(), 6);
        assert_eq!(result.first_degenerate_year(), None);
        assert_eq!(result.final_snapshot().map(|s| s.year), Some(5));
    }

    #[test]
    fn test_degenerate_run_is_reported_not_rejected() {
        // Zero genesis supply leaves nothing circulating: 0 / 0 participation
        let params = SimulationParameters {
            initial_supply: 0.0,
            simulation_years: 3,
            ..Default::default()
        };
        let result = ProjectionEngine::new(params).run();
        assert_eq!(result.snapshots.len(), 4);
        assert!(result.snapshots[0].staking_participation.is_nan());
        assert_eq!(result.first_degenerate_year(), Some(0));
    }
}
