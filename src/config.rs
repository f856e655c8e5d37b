//! Configuration loader and validator
//!
//! Loads settings and key aliases from TOML files in the configs/ directory.

use crate::backend::KeyId;
use crate::keys::table;
use crate::script::DIRECTIVES;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::Path;
use thiserror::Error;

pub const DEFAULT_CONFIG_PATH: &str = "configs/default.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// General settings
    #[serde(default)]
    pub settings: Settings,

    /// Extra key names, mapped to virtual-key codes
    #[serde(default)]
    pub keys: BTreeMap<String, KeyId>,
}

/// General settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Speed used when a move does not give one
    #[serde(default = "default_speed")]
    pub default_speed: f64,

    /// Fixed seed for trajectory randomness
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_speed: default_speed(),
            seed: None,
        }
    }
}

fn default_speed() -> f64 { 1.0 }

impl Config {
    /// Load configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path_ref = path.as_ref();
        info!("Loading configuration from: {}", path_ref.display());

        let content = std::fs::read_to_string(path_ref)?;
        let config = Self::from_toml(&content)?;

        info!("✓ Config validation passed");
        Ok(config)
    }

    /// Parse and validate configuration text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;

        debug!("  - Default speed: {}", config.settings.default_speed);
        debug!("  - Seed: {:?}", config.settings.seed);
        debug!("  - Key aliases: {}", config.keys.len());

        config.validate()?;
        Ok(config)
    }

    /// Load configs/default.toml
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::load(DEFAULT_CONFIG_PATH)
    }

    /// Load configs/default.toml if present, otherwise built-in defaults
    pub fn load_default_or_builtin() -> Result<Self, ConfigError> {
        if Path::new(DEFAULT_CONFIG_PATH).exists() {
            Self::load_default()
        } else {
            debug!("{} not found, using built-in defaults", DEFAULT_CONFIG_PATH);
            Ok(Self::default())
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let speed = self.settings.default_speed;
        if !speed.is_finite() || speed <= 0.0 {
            return Err(ConfigError::Invalid(
                "default_speed must be a positive number".into()
            ));
        }

        let mut seen = HashSet::new();
        for (name, id) in &self.keys {
            self.validate_alias(name, *id)?;
            if !seen.insert(name.to_lowercase()) {
                return Err(ConfigError::Invalid(
                    format!("Key alias '{}' is defined more than once (names are case-insensitive)", name)
                ));
            }
        }

        Ok(())
    }

    fn validate_alias(&self, name: &str, id: KeyId) -> Result<(), ConfigError> {
        if name.is_empty() || name.chars().any(char::is_whitespace) {
            return Err(ConfigError::Invalid(
                format!("Invalid key alias '{}': names must be non-empty without whitespace", name)
            ));
        }
        if DIRECTIVES.iter().any(|d| d.eq_ignore_ascii_case(name)) {
            return Err(ConfigError::Invalid(
                format!("Key alias '{}' collides with a script directive", name)
            ));
        }
        if id == 0 {
            return Err(ConfigError::Invalid(
                format!("Key alias '{}' maps to 0, which is not a key", name)
            ));
        }
        if table::lookup(name).is_some() {
            warn!("Key alias '{}' is a built-in key name and will be ignored", name);
        }
        Ok(())
    }
}
