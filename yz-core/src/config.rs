//! Point values for the fixed-score categories.
//!
//! Defaults are the standard Yatzy values. Config files are YAML; every field
//! is optional and falls back to its default.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration loading errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Invalid config: {0}")]
    Invalid(&'static str),
}

/// Fixed point values awarded by the all-or-nothing categories.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ScoringConfig {
    /// Awarded when all five dice show the same face.
    #[serde(default = "default_yatzy_points")]
    pub yatzy_points: u32,
    /// Awarded for exactly 1-2-3-4-5.
    #[serde(default = "default_small_straight_points")]
    pub small_straight_points: u32,
    /// Awarded for exactly 2-3-4-5-6.
    #[serde(default = "default_large_straight_points")]
    pub large_straight_points: u32,
}

fn default_yatzy_points() -> u32 {
    50
}

fn default_small_straight_points() -> u32 {
    15
}

fn default_large_straight_points() -> u32 {
    20
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            yatzy_points: default_yatzy_points(),
            small_straight_points: default_small_straight_points(),
            large_straight_points: default_large_straight_points(),
        }
    }
}

impl ScoringConfig {
    /// Load configuration from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Load configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: ScoringConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject point values that would make a category unscorable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.yatzy_points == 0 {
            return Err(ConfigError::Invalid("yatzy_points must be > 0"));
        }
        if self.small_straight_points == 0 {
            return Err(ConfigError::Invalid("small_straight_points must be > 0"));
        }
        if self.large_straight_points == 0 {
            return Err(ConfigError::Invalid("large_straight_points must be > 0"));
        }
        Ok(())
    }
}
