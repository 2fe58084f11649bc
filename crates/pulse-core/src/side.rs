//! Side (Buy / Sell) for presets and order requests.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Trade action carried by a preset: Buy or Sell.
///
/// Serialized as `"Buy"` / `"Sell"` (the order API's `orderType`);
/// deserialized case-insensitively so configuration may say `buy`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    /// Upper-case label used in confirmations (`BUY` / `SELL`).
    pub fn as_upper(self) -> &'static str {
        match self {
            Side::Buy => "BUY",
            Side::Sell => "SELL",
        }
    }

    /// Title-case label used as the order type on the wire (`Buy` / `Sell`).
    pub fn as_title(self) -> &'static str {
        match self {
            Side::Buy => "Buy",
            Side::Sell => "Sell",
        }
    }

    /// Lower-case path segment of the submission endpoint (`buy` / `sell`).
    pub fn as_path(self) -> &'static str {
        match self {
            Side::Buy => "buy",
            Side::Sell => "sell",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_title())
    }
}

/// Text that is neither "buy" nor "sell".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown side {0:?}, expected Buy or Sell")]
pub struct ParseSideError(pub String);

impl FromStr for Side {
    type Err = ParseSideError;

    /// Case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "buy" => Ok(Side::Buy),
            "sell" => Ok(Side::Sell),
            _ => Err(ParseSideError(s.to_string())),
        }
    }
}

impl TryFrom<String> for Side {
    type Error = ParseSideError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Side> for &'static str {
    fn from(side: Side) -> Self {
        side.as_title()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_any_case() {
        assert_eq!(" BUY ".parse::<Side>(), Ok(Side::Buy));
        assert_eq!("Sell".parse::<Side>(), Ok(Side::Sell));
        assert!("hold".parse::<Side>().is_err());
    }

    #[test]
    fn labels() {
        assert_eq!(Side::Buy.as_upper(), "BUY");
        assert_eq!(Side::Sell.as_path(), "sell");
        assert_eq!(Side::Sell.to_string(), "Sell");
    }
}
