//! Calculator configuration file loading

use std::fs;
use std::path::{Path, PathBuf};

use snow_load_core::CalculatorConfig;
use thiserror::Error;

/// Errors raised by the command-line front end
#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Calculation(#[from] snow_load_core::CalculationError),

    #[error("cannot encode result: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Load a JSON calculator config; missing fields take their defaults
///
/// ```json
/// { "altitude_term": "legacy-xor" }
/// ```
pub fn load_config(path: &Path) -> Result<CalculatorConfig, CliError> {
    let text = fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| CliError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}
