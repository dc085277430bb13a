use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

use crate::core::currency::DEFAULT_COUNTRIES;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PricingProviderConfig {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProvidersConfig {
    pub pricing: Option<PricingProviderConfig>,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        ProvidersConfig {
            pricing: Some(PricingProviderConfig {
                base_url: "http://localhost:8000".to_string(),
            }),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    /// Countries priced by `compare` when none are given on the command line
    #[serde(default = "default_countries")]
    pub countries: Vec<String>,
    #[serde(default = "default_notional")]
    pub notional: f64,
    #[serde(default = "default_years")]
    pub years: u32,
    #[serde(default)]
    pub providers: ProvidersConfig,
}

fn default_countries() -> Vec<String> {
    DEFAULT_COUNTRIES.iter().map(|c| c.to_string()).collect()
}

fn default_notional() -> f64 {
    1000.0
}

fn default_years() -> u32 {
    5
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            countries: default_countries(),
            notional: default_notional(),
            years: default_years(),
            providers: ProvidersConfig::default(),
        }
    }
}

impl AppConfig {
    /// Loads config from the default location, falling back to built-in
    /// defaults when no config file exists yet.
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!("No config file found, using defaults");
            return Ok(AppConfig::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("in", "codito", "rpx")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }

    pub fn pricing_base_url(&self) -> &str {
        self.providers
            .pricing
            .as_ref()
            .map_or("http://localhost:8000", |p| &p.base_url)
    }
}
