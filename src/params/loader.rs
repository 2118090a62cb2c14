//! Load parameter records from disk

use super::SimulationParameters;
use crate::error::ParamError;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Load a JSON parameter record from a file
pub fn load_params<P: AsRef<Path>>(path: P) -> Result<SimulationParameters, ParamError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ParamError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let params = load_params_from_reader(BufReader::new(file))?;
    log::debug!("Loaded parameters from {}", path.display());
    Ok(params)
}

/// Load a JSON parameter record from any reader
pub fn load_params_from_reader<R: Read>(reader: R) -> Result<SimulationParameters, ParamError> {
    Ok(serde_json::from_reader(reader)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_from_reader() {
        let json = br#"{
            "initialSupply": 21000000,
            "maxSupply": 21000000,
            "inflationRate": 0,
            "lockupPeriod": 0
        }"#;
        let p = load_params_from_reader(&json[..]).expect("valid record");
        assert_eq!(p.initial_supply, 21_000_000.0);
        assert_eq!(p.max_supply, 21_000_000.0);
        assert_eq!(p.inflation_rate, 0.0);
        assert_eq!(p.lockup_period, 0);
        assert_eq!(p.burn_rate, 1.0);
    }

    #[test]
    fn test_missing_file() {
        let err = load_params("does/not/exist.json").unwrap_err();
        assert!(matches!(err, ParamError::Io { .. }));
    }
}
