//! Application configuration
//!
//! Loaded from a TOML file (default `~/.config/parking-system/config.toml`).
//! Every section and field is optional; a missing file yields the defaults.
//!
//! ```toml
//! [fares]
//! car_per_hour = 1.5
//! bike_per_hour = 1.0
//!
//! [lot]
//! car_spots = 3
//! bike_spots = 2
//!
//! [logging]
//! level = "info"
//! format = "pretty"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::RateCard;
use crate::shared::errors::InfraError;

/// Default location of the configuration file.
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("parking-system")
        .join("config.toml")
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub fares: RateCard,
    pub lot: LotConfig,
    pub logging: LoggingConfig,
}

/// Spots the in-memory registry is seeded with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LotConfig {
    pub car_spots: u32,
    pub bike_spots: u32,
}

impl Default for LotConfig {
    fn default() -> Self {
        Self {
            car_spots: 3,
            bike_spots: 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, overridden by `RUST_LOG`
    pub level: String,
    /// `pretty` or `json`
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl AppConfig {
    /// Load from `path`, falling back to defaults when the file does not exist.
    pub fn load(path: &Path) -> Result<Self, InfraError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml(&raw)
    }

    /// Parse and validate; non-positive fares are rejected.
    pub fn from_toml(raw: &str) -> Result<Self, InfraError> {
        let config: Self = toml::from_str(raw)?;
        config.fares.validate().map_err(InfraError::InvalidConfig)?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String, InfraError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
