//! Tokenomics simulator - year-by-year token supply projection model
//!
//! This library provides:
//! - Simulation parameters with defaults, validation and slider-range clamping
//! - The projection engine producing one snapshot per simulated year
//! - Summary statistics over a projection (final supplies, average inflation)
//! - Parallel parameter sweeps
//! - CSV / JSON / table output

pub mod error;
pub mod params;
pub mod projection;
pub mod sweep;
pub mod output;

// Re-export commonly used types
pub use error::{OutputError, ParamError, SweepError};
pub use params::{ParameterBounds, Preset, SimulationParameters};
pub use projection::{
    project, ProjectionEngine, ProjectionResult, ProjectionState, ProjectionSummary, Transition,
    YearSnapshot,
};
pub use sweep::{sweep, SweepField, SweepPoint};
