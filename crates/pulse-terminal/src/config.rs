// crates/pulse-terminal/src/config.rs

//! Terminal configuration.
//!
//! Values come from, in increasing priority:
//!
//! - built-in defaults (two presets, four companies, a small watchlist),
//! - an optional TOML file (`--config`),
//! - the `PULSE_API_URL` environment variable (only if the file has no URL),
//! - command-line flags.
//!
//! ```toml
//! user_id = "trader-7"
//! api_base_url = "http://localhost:4000"
//!
//! [presets.preset-1]
//! action = "buy"
//! quantity = 10
//! price = 10
//!
//! [symbols]
//! apple = "AAPL"
//!
//! [[watchlist]]
//! id = "aapl"
//! symbol = "AAPL"
//! last_price = 187.2
//! ```

use std::env;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use pulse_core::{PresetBook, Stock, SymbolMap, VoiceInterpreter};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub const API_URL_ENV: &str = "PULSE_API_URL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Account the orders are placed for.
    pub user_id: String,

    /// Base URL of the order API. No URL means orders are only
    /// acknowledged locally.
    pub api_base_url: Option<String>,

    /// Acknowledge orders locally even when a URL is configured.
    pub dry_run: bool,

    pub presets: PresetBook,
    pub symbols: SymbolMap,
    pub watchlist: Vec<Stock>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            user_id: "1".to_string(),
            api_base_url: None,
            dry_run: false,
            presets: PresetBook::default(),
            symbols: SymbolMap::default(),
            watchlist: default_watchlist(),
        }
    }
}

fn default_watchlist() -> Vec<Stock> {
    [
        ("aapl", "AAPL", Decimal::new(18720, 2)),
        ("tsla", "TSLA", Decimal::new(24115, 2)),
        ("googl", "GOOGL", Decimal::new(14190, 2)),
        ("msft", "MSFT", Decimal::new(41530, 2)),
    ]
    .into_iter()
    .map(|(id, symbol, last_price)| Stock {
        id: id.to_string(),
        symbol: symbol.to_string(),
        last_price,
    })
    .collect()
}

impl ClientConfig {
    /// Load from `path` if given, otherwise start from defaults; then
    /// fill the API URL from the environment when still unset.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("reading config file {}", path.display()))?;
                Self::from_toml_str(&text)
                    .with_context(|| format!("parsing config file {}", path.display()))?
            }
            None => Self::default(),
        };

        if config.api_base_url.is_none() {
            config.api_base_url = env::var(API_URL_ENV).ok().filter(|v| !v.trim().is_empty());
        }

        Ok(config)
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// URL orders are posted to, or `None` in dry-run mode.
    pub fn submission_url(&self) -> Option<&str> {
        if self.dry_run {
            return None;
        }
        self.api_base_url.as_deref()
    }

    pub fn interpreter(&self) -> VoiceInterpreter {
        VoiceInterpreter::new(self.presets.clone(), self.symbols.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = ClientConfig::from_toml_str("").unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.watchlist.len(), 4);
        assert!(config.submission_url().is_none());
    }

    #[test]
    fn file_overrides_tables() {
        let config = ClientConfig::from_toml_str(
            r#"
            user_id = "trader-7"
            api_base_url = "http://localhost:4000"

            [presets.preset-3]
            action = "sell"
            quantity = 4
            price = 99.5

            [symbols]
            Amazon = "AMZN"

            [[watchlist]]
            id = "amzn-1"
            symbol = "AMZN"
            last_price = 178.25
            "#,
        )
        .unwrap();

        assert_eq!(config.user_id, "trader-7");
        assert_eq!(config.submission_url(), Some("http://localhost:4000"));
        assert_eq!(config.presets.len(), 1);
        assert_eq!(config.symbols.ticker_for("amazon"), Some("AMZN"));
        assert_eq!(config.watchlist[0].last_price, Decimal::new(17825, 2));

        let order = config
            .interpreter()
            .interpret("place order preset 3 for amazon")
            .into_result()
            .unwrap();
        assert_eq!(order.quantity, 4);
    }

    #[test]
    fn dry_run_hides_url() {
        let config = ClientConfig::from_toml_str(
            r#"
            api_base_url = "http://localhost:4000"
            dry_run = true
            "#,
        )
        .unwrap();
        assert!(config.submission_url().is_none());
    }

    #[test]
    fn invalid_preset_is_an_error() {
        let err = ClientConfig::from_toml_str(
            r#"
            [presets.preset-1]
            action = "hold"
            quantity = 1
            price = 1
            "#,
        );
        assert!(err.is_err());
    }
}
