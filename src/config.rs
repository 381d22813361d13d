//! Configuration management
//!
//! Display settings read from a TOML file. Every field has a default, so an
//! empty file (or no file at all) yields the stock MagicSwap behaviour.
//!
//! ```toml
//! [apr]
//! volume_window_days = 7.0
//! days_per_year = 365.0
//! fee_rate = 0.0025
//!
//! [format]
//! max_fraction_digits = 5
//!
//! [explorer]
//! url = "https://arbiscan.io"
//! ```
//!
//! The file path comes from the caller or the `MAGICSWAP_CONFIG` env var
//! (a `.env` file is honoured).

use crate::apr::AprParams;
use crate::format::FractionDigits;
use crate::types::Token;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Env var naming the config file
pub const CONFIG_ENV_VAR: &str = "MAGICSWAP_CONFIG";

/// Top-level TOML configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub apr: AprSection,
    #[serde(default)]
    pub format: FormatSection,
    #[serde(default)]
    pub explorer: ExplorerSection,
}

/// APR estimate settings
#[derive(Debug, Clone, Deserialize)]
pub struct AprSection {
    #[serde(default = "default_volume_window_days")]
    pub volume_window_days: f64,
    #[serde(default = "default_days_per_year")]
    pub days_per_year: f64,
    #[serde(default = "default_fee_rate")]
    pub fee_rate: f64,
}

/// Number formatting settings
#[derive(Debug, Clone, Deserialize)]
pub struct FormatSection {
    #[serde(default = "default_max_fraction_digits")]
    pub max_fraction_digits: u32,
}

/// Block explorer settings
#[derive(Debug, Clone, Deserialize)]
pub struct ExplorerSection {
    #[serde(default = "default_explorer_url")]
    pub url: String,
}

fn default_volume_window_days() -> f64 { 7.0 }
fn default_days_per_year() -> f64 { 365.0 }
fn default_fee_rate() -> f64 { 0.0025 }
fn default_max_fraction_digits() -> u32 { 5 }
fn default_explorer_url() -> String { "https://arbiscan.io".to_string() }

impl Default for AprSection {
    fn default() -> Self {
        Self {
            volume_window_days: default_volume_window_days(),
            days_per_year: default_days_per_year(),
            fee_rate: default_fee_rate(),
        }
    }
}

impl Default for FormatSection {
    fn default() -> Self {
        Self {
            max_fraction_digits: default_max_fraction_digits(),
        }
    }
}

impl Default for ExplorerSection {
    fn default() -> Self {
        Self {
            url: default_explorer_url(),
        }
    }
}

impl DisplayConfig {
    /// Load configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config = Self::from_toml(&content)?;
        info!("Display config loaded from {}", path.as_ref().display());
        Ok(config)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).with_context(|| "Failed to parse TOML configuration")?;

        // Surface bad values at load time rather than on first use
        config.apr_params()?;
        config.max_fraction_digits()?;

        Ok(config)
    }

    /// Validated APR parameters
    pub fn apr_params(&self) -> Result<AprParams> {
        let params = AprParams::new(
            self.apr.volume_window_days,
            self.apr.days_per_year,
            self.apr.fee_rate,
        )
        .context("Invalid [apr] section")?;
        Ok(params)
    }

    /// Validated default fraction digits for plain numbers
    pub fn max_fraction_digits(&self) -> Result<FractionDigits> {
        let digits = FractionDigits::new(self.format.max_fraction_digits)
            .context("Invalid [format] section")?;
        Ok(digits)
    }

    /// Explorer page of `token` on the configured explorer
    pub fn token_explorer_url(&self, token: &Token) -> String {
        token.explorer_url(&self.explorer.url)
    }
}

/// Resolve and load the display config.
///
/// `path` wins over `MAGICSWAP_CONFIG`; with neither set the defaults are used.
pub fn load_config(path: Option<&Path>) -> Result<DisplayConfig> {
    dotenv::dotenv().ok();

    let path: Option<PathBuf> = match path {
        Some(p) => Some(p.to_path_buf()),
        None => std::env::var(CONFIG_ENV_VAR).ok().map(PathBuf::from),
    };

    match path {
        Some(p) => DisplayConfig::load(p),
        None => {
            debug!("No config file given, using defaults");
            Ok(DisplayConfig::default())
        }
    }
}
