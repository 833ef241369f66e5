//! Settings file loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::ProbeSettings;
use crate::config::validation::ValidationError;

/// Settings file and configuration failures. All of them end the run as UNKNOWN.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read settings file: {0}")]
    Io(#[source] std::io::Error),

    #[error("invalid settings file: {0}")]
    Parse(#[source] toml::de::Error),

    #[error("invalid configuration: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load settings from a TOML file.
pub fn load_settings(path: &Path) -> Result<ProbeSettings, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    toml::from_str(&content).map_err(ConfigError::Parse)
}
