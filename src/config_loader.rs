use anyhow::{anyhow, Result};
use log::{debug, info, LevelFilter};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::domain::constants::{BINANCE_SPOT_LAYOUT_VERSION, EXCHANGE_BINANCE};
use crate::infrastructure::exchange::ExchangeProfile;

/// Top-level configuration structure containing all config sections
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppInfo,

    #[serde(default)]
    pub exchange: ExchangeConfig,
}

/// Application information
#[derive(Debug, Clone, Deserialize)]
pub struct AppInfo {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AppInfo {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Which exchange profile payloads are decoded with
#[derive(Debug, Clone, Deserialize)]
pub struct ExchangeConfig {
    #[serde(default = "default_exchange_name")]
    pub name: String,

    #[serde(default = "default_layout_version")]
    pub layout_version: u32,
}

impl Default for ExchangeConfig {
    fn default() -> Self {
        Self {
            name: default_exchange_name(),
            layout_version: default_layout_version(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_exchange_name() -> String {
    EXCHANGE_BINANCE.to_string()
}

fn default_layout_version() -> u32 {
    BINANCE_SPOT_LAYOUT_VERSION
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let config_str = fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read config file '{}': {}", path.display(), e))?;

        let config = Self::from_toml(&config_str)
            .map_err(|e| anyhow!("Failed to parse config file '{}': {}", path.display(), e))?;

        info!("Loaded configuration from {}", path.display());
        debug!(
            "Exchange profile: {} v{}",
            config.exchange.name, config.exchange.layout_version
        );

        Ok(config)
    }

    pub fn from_toml(config_str: &str) -> Result<Self> {
        Ok(toml::from_str(config_str)?)
    }

    /// Log level from the `[app]` section
    pub fn log_level_filter(&self) -> Result<LevelFilter> {
        self.app
            .log_level
            .parse::<LevelFilter>()
            .map_err(|_| anyhow!("Invalid log level '{}'", self.app.log_level))
    }

    /// Builds the exchange profile named in the `[exchange]` section
    pub fn exchange_profile(&self) -> Result<ExchangeProfile> {
        Ok(ExchangeProfile::by_name(
            &self.exchange.name,
            self.exchange.layout_version,
        )?)
    }
}
