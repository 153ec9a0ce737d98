//! Configuration management

use crate::core::{ChartPeriod, Error, Result, Theme};
use crate::pricing::CountryInfo;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub pricing: PricingConfig,
    /// Extra countries, or overrides of built-in ones by code
    #[serde(default)]
    pub countries: Vec<CountryInfo>,
}

impl Config {
    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("appliance-cost").join("config.toml"))
    }

    /// Load configuration from the default location, falling back to defaults
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Load configuration from a specific file, falling back to defaults if it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))?;

        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Language: "auto", "es", "en"
    #[serde(default = "default_language")]
    pub language: String,
    /// Theme: "light", "dark"
    #[serde(default)]
    pub theme: Theme,
    /// Country selected at startup
    #[serde(default = "default_country")]
    pub country: String,
    /// Chart period selected at startup
    #[serde(default)]
    pub chart_period: ChartPeriod,
}

fn default_language() -> String { "auto".to_string() }
fn default_country() -> String { "ES".to_string() }

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            theme: Theme::default(),
            country: default_country(),
            chart_period: ChartPeriod::default(),
        }
    }
}

/// Pricing configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Tariff applied at startup instead of the country default
    #[serde(default)]
    pub tariff_override: Option<f64>,
}
