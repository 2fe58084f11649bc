//! Order presets: named templates of action, quantity and price.
//!
//! A [`PresetBook`] is built once at startup (defaults or configuration)
//! and never mutated afterwards. Construction validates every entry so
//! the interpreter can rely on positive quantities and prices.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::side::Side;

/// A single preset definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    pub action: Side,
    pub quantity: u32,
    pub price: Decimal,
}

impl Preset {
    pub fn new(action: Side, quantity: u32, price: Decimal) -> Self {
        Preset {
            action,
            quantity,
            price,
        }
    }
}

/// Immutable lookup table: preset identifier (e.g. `"preset-1"`) → [`Preset`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, Preset>", into = "BTreeMap<String, Preset>")]
pub struct PresetBook {
    entries: BTreeMap<String, Preset>,
}

impl PresetBook {
    /// Build a book from `(id, preset)` pairs.
    ///
    /// Identifiers are trimmed and lower-cased, since the interpreter
    /// looks them up from a normalized transcript.
    pub fn new<I, S>(entries: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (S, Preset)>,
        S: Into<String>,
    {
        let mut map = BTreeMap::new();
        for (id, preset) in entries {
            let id = id.into().trim().to_lowercase();
            if id.is_empty() {
                return Err(ConfigError::BlankPresetId);
            }
            if preset.quantity == 0 {
                return Err(ConfigError::ZeroQuantity(id));
            }
            if preset.price <= Decimal::ZERO {
                return Err(ConfigError::NonPositivePrice {
                    id,
                    price: preset.price.to_string(),
                });
            }
            map.insert(id, preset);
        }
        Ok(PresetBook { entries: map })
    }

    pub fn get(&self, id: &str) -> Option<&Preset> {
        self.entries.get(id)
    }

    /// Presets in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Preset)> {
        self.entries.iter().map(|(id, p)| (id.as_str(), p))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for PresetBook {
    fn default() -> Self {
        PresetBook {
            entries: BTreeMap::from([
                (
                    "preset-1".to_string(),
                    Preset::new(Side::Buy, 10, Decimal::from(10)),
                ),
                (
                    "preset-2".to_string(),
                    Preset::new(Side::Sell, 10, Decimal::from(5)),
                ),
            ]),
        }
    }
}

impl TryFrom<BTreeMap<String, Preset>> for PresetBook {
    type Error = ConfigError;

    fn try_from(map: BTreeMap<String, Preset>) -> Result<Self, Self::Error> {
        PresetBook::new(map)
    }
}

impl From<PresetBook> for BTreeMap<String, Preset> {
    fn from(book: PresetBook) -> Self {
        book.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_book_has_two_presets() {
        let book = PresetBook::default();
        assert_eq!(book.len(), 2);
        assert_eq!(book.get("preset-1").map(|p| p.action), Some(Side::Buy));
        assert_eq!(book.get("preset-2").map(|p| p.price), Some(Decimal::from(5)));
        assert!(book.get("preset-3").is_none());
    }

    #[test]
    fn ids_are_normalized() {
        let book = PresetBook::new([(" Preset-7 ", Preset::new(Side::Buy, 1, Decimal::ONE))]).unwrap();
        assert!(book.get("preset-7").is_some());
    }

    #[test]
    fn rejects_invalid_entries() {
        let zero_qty = PresetBook::new([("p", Preset::new(Side::Buy, 0, Decimal::ONE))]);
        assert_eq!(zero_qty, Err(ConfigError::ZeroQuantity("p".into())));

        let free = PresetBook::new([("p", Preset::new(Side::Sell, 1, Decimal::ZERO))]);
        assert!(matches!(free, Err(ConfigError::NonPositivePrice { .. })));

        let blank = PresetBook::new([("  ", Preset::new(Side::Sell, 1, Decimal::ONE))]);
        assert_eq!(blank, Err(ConfigError::BlankPresetId));
    }
}
