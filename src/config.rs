//! Navigator configuration.
//!
//! Loads the tunable parameters shared by both navigators from JSON. Every
//! field is optional in the document and falls back to its default.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::navigate::DEFAULT_CREW_WEIGHT;

/// Errors that can occur while loading a configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse navigator config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("crew_weight must be finite and non-negative, got {0}")]
    InvalidCrewWeight(f64),
}

/// Parameters for the batch and dispatch navigators.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavigatorConfig {
    /// Crew budget used by `BatchNavigator::allocate_once`.
    pub default_crew: u64,
    /// Number of independent crew-units dispatched per round.
    pub unit_count: usize,
    /// Score points per crew member left unused by a dispatch.
    pub crew_weight: f64,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        NavigatorConfig {
            default_crew: 0,
            unit_count: 1,
            crew_weight: DEFAULT_CREW_WEIGHT,
        }
    }
}

impl NavigatorConfig {
    /// Rejects values the navigators cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.crew_weight.is_finite() || self.crew_weight < 0.0 {
            return Err(ConfigError::InvalidCrewWeight(self.crew_weight));
        }
        Ok(())
    }
}

/// Loads and validates a configuration from a JSON file.
pub fn load_config(path: &Path) -> Result<NavigatorConfig, ConfigError> {
    let data = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    load_config_from_str(&data)
}

/// Loads and validates a configuration from a JSON string.
pub fn load_config_from_str(json: &str) -> Result<NavigatorConfig, ConfigError> {
    let config: NavigatorConfig = serde_json::from_str(json)?;
    config.validate()?;
    Ok(config)
}
