//! Errors raised by the outer surfaces (parameter loading, validation, output).
//!
//! The projection engine is total and has no error type of its own.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParamError {
    #[error("failed to read parameter file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed parameter record: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{field} must be finite, got {value}")]
    NotFinite { field: &'static str, value: f64 },

    #[error("initialSupply must be positive, got {0}")]
    NonPositiveSupply(f64),

    #[error("maxSupply {max} is below initialSupply {initial}")]
    MaxBelowInitial { max: f64, initial: f64 },

    #[error("{field} must be a percentage in [0, 100], got {value}")]
    RateOutOfRange { field: &'static str, value: f64 },

    #[error("simulationYears must be at least 1")]
    NoYears,
}

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug, PartialEq)]
pub enum SweepError {
    #[error("sweep {field} must be finite, got {value}")]
    NotFinite { field: &'static str, value: f64 },

    #[error("sweep range yields {count} values, limit is {limit}")]
    TooManyValues { count: f64, limit: usize },
}
