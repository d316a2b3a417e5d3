use crate::core::exchange::CurrencyExchange;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

/// A manually configured rate for one cross.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RateConfig {
    pub cross: String,
    pub rate: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    /// Currency codes in cross order. Left optional so a missing list is
    /// reported by the exchange itself.
    pub currencies: Option<Vec<String>>,
    /// Rates applied in file order.
    #[serde(default)]
    pub rates: Vec<RateConfig>,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("org", "crossrate", "crossrate")
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

    /// Builds the exchange table and applies every configured rate.
    pub fn build_exchange(&self) -> Result<CurrencyExchange> {
        let mut exchange = CurrencyExchange::from_optional(self.currencies.as_deref())
            .context("Invalid currency list in config")?;

        for (index, entry) in self.rates.iter().enumerate() {
            exchange
                .specify_exchange_rate(&entry.cross, entry.rate)
                .with_context(|| {
                    format!("Invalid rate entry #{} ({}: {})", index + 1, entry.cross, entry.rate)
                })?;
        }
        debug!(
            currencies = exchange.currencies().len(),
            rates = exchange.exchange_rates().len(),
            "Built exchange from config"
        );
        Ok(exchange)
    }
}
