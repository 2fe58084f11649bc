//! Company name → exchange ticker lookup.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Immutable map from lower-cased company name to ticker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, String>", into = "BTreeMap<String, String>")]
pub struct SymbolMap {
    tickers: BTreeMap<String, String>,
}

impl SymbolMap {
    /// Build a map from `(company, ticker)` pairs. Company names are
    /// lower-cased; tickers are trimmed and must not be blank.
    pub fn new<I, K, V>(entries: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut tickers = BTreeMap::new();
        for (company, ticker) in entries {
            let company = company.into().trim().to_lowercase();
            let ticker = ticker.into().trim().to_string();
            if ticker.is_empty() {
                return Err(ConfigError::BlankTicker(company));
            }
            tickers.insert(company, ticker);
        }
        Ok(SymbolMap { tickers })
    }

    /// Exact, case-insensitive lookup. No partial matching.
    pub fn ticker_for(&self, company: &str) -> Option<&str> {
        self.tickers.get(&company.to_lowercase()).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.tickers.iter().map(|(c, t)| (c.as_str(), t.as_str()))
    }

    pub fn len(&self) -> usize {
        self.tickers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickers.is_empty()
    }
}

impl Default for SymbolMap {
    fn default() -> Self {
        let tickers = [
            ("apple", "AAPL"),
            ("tesla", "TSLA"),
            ("google", "GOOGL"),
            ("microsoft", "MSFT"),
        ]
        .into_iter()
        .map(|(c, t)| (c.to_string(), t.to_string()))
        .collect();
        SymbolMap { tickers }
    }
}

impl TryFrom<BTreeMap<String, String>> for SymbolMap {
    type Error = ConfigError;

    fn try_from(map: BTreeMap<String, String>) -> Result<Self, Self::Error> {
        SymbolMap::new(map)
    }
}

impl From<SymbolMap> for BTreeMap<String, String> {
    fn from(map: SymbolMap) -> Self {
        map.tickers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_ignores_case() {
        let map = SymbolMap::default();
        assert_eq!(map.ticker_for("Apple"), Some("AAPL"));
        assert_eq!(map.ticker_for("MICROSOFT"), Some("MSFT"));
        assert_eq!(map.ticker_for("amazon"), None);
        assert_eq!(map.ticker_for("app"), None);
    }

    #[test]
    fn blank_ticker_is_rejected() {
        let err = SymbolMap::new([("Acme", "  ")]).unwrap_err();
        assert_eq!(err, ConfigError::BlankTicker("acme".into()));
    }
}
