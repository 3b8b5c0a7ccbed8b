//! Configuration file support for the GPA analyzer.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/gpa/config.toml`.
//! Every field is optional; a missing file means defaults.

use crate::{GradeSymbol, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub projection: ProjectionConfig,
}

/// Console output configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Cap on the number of printed retake recommendations
    #[serde(default = "default_max_recommendations")]
    pub max_recommendations: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            max_recommendations: default_max_recommendations(),
        }
    }
}

/// Retake projection configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProjectionConfig {
    /// Grade assumed for a retaken course; must be scoring-eligible
    #[serde(default = "default_retake_grade")]
    pub retake_grade: GradeSymbol,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            retake_grade: default_retake_grade(),
        }
    }
}

// Default value functions
fn default_max_recommendations() -> usize {
    10
}

fn default_retake_grade() -> GradeSymbol {
    GradeSymbol::A
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::debug!("No config file found at {:?}, using defaults", config_path);
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| {
            let home = std::env::var("HOME").expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
        base.join("gpa").join("config.toml")
    }
}
