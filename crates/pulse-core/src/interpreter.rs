//! Voice command interpreter.
//!
//! Turns one finalized transcript into exactly one [`Interpretation`]:
//! normalize → match grammar → resolve preset → resolve company.
//!
//! The interpreter owns its preset and symbol tables, so callers (and
//! tests) choose which tables are in force. It has no side effects
//! beyond `tracing` events; surfacing the outcome and submitting orders
//! belong to the caller.

use std::fmt;

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::Rejection;
use crate::grammar::match_order_command;
use crate::normalize::normalize;
use crate::preset::PresetBook;
use crate::side::Side;
use crate::symbols::SymbolMap;

/// A fully resolved voice order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutedOrder {
    /// Identifier of the preset that produced this order.
    pub preset_id: String,
    pub action: Side,
    pub quantity: u32,
    pub price: Decimal,
    pub symbol: String,
}

impl fmt::Display for ExecutedOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Executing {} {} shares of {} at ${} each.",
            self.action.as_upper(),
            self.quantity,
            self.symbol,
            self.price.normalize()
        )
    }
}

/// Outcome of interpreting one transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interpretation {
    Executed(ExecutedOrder),
    Rejected(Rejection),
}

impl Interpretation {
    /// Human-readable confirmation or rejection text.
    pub fn message(&self) -> String {
        match self {
            Interpretation::Executed(order) => order.to_string(),
            Interpretation::Rejected(reason) => reason.to_string(),
        }
    }

    pub fn is_executed(&self) -> bool {
        matches!(self, Interpretation::Executed(_))
    }

    pub fn into_result(self) -> Result<ExecutedOrder, Rejection> {
        match self {
            Interpretation::Executed(order) => Ok(order),
            Interpretation::Rejected(reason) => Err(reason),
        }
    }
}

impl From<Result<ExecutedOrder, Rejection>> for Interpretation {
    fn from(result: Result<ExecutedOrder, Rejection>) -> Self {
        match result {
            Ok(order) => Interpretation::Executed(order),
            Err(reason) => Interpretation::Rejected(reason),
        }
    }
}

/// Interpreter bound to a preset book and a symbol map.
#[derive(Debug, Clone, Default)]
pub struct VoiceInterpreter {
    presets: PresetBook,
    symbols: SymbolMap,
}

impl VoiceInterpreter {
    pub fn new(presets: PresetBook, symbols: SymbolMap) -> Self {
        VoiceInterpreter { presets, symbols }
    }

    pub fn presets(&self) -> &PresetBook {
        &self.presets
    }

    pub fn symbols(&self) -> &SymbolMap {
        &self.symbols
    }

    /// Interpret a raw transcript. Never fails: unrecognized input comes
    /// back as [`Interpretation::Rejected`].
    pub fn interpret(&self, raw_transcript: &str) -> Interpretation {
        debug!(raw = raw_transcript, "interpreting voice command");
        self.resolve(raw_transcript).into()
    }

    fn resolve(&self, raw_transcript: &str) -> Result<ExecutedOrder, Rejection> {
        let normalized = normalize(raw_transcript);
        debug!(normalized = %normalized, "normalized voice command");

        let command = match_order_command(&normalized).ok_or(Rejection::NoMatch)?;

        let preset = self
            .presets
            .get(&command.preset.to_lowercase())
            .ok_or_else(|| Rejection::UnknownPreset(command.preset.to_string()))?;

        let symbol = self
            .symbols
            .ticker_for(command.company)
            .ok_or_else(|| Rejection::UnknownCompany(command.company.to_string()))?;

        Ok(ExecutedOrder {
            preset_id: command.preset.to_lowercase(),
            action: preset.action,
            quantity: preset.quantity,
            price: preset.price,
            symbol: symbol.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preset::Preset;

    #[test]
    fn spelled_preset_resolves() {
        let interp = VoiceInterpreter::default();
        let order = interp
            .interpret("Place order preset one for Apple")
            .into_result()
            .unwrap();
        assert_eq!(order.action, Side::Buy);
        assert_eq!(order.symbol, "AAPL");
        assert_eq!(order.preset_id, "preset-1");
    }

    #[test]
    fn confirmation_text() {
        let interp = VoiceInterpreter::default();
        let result = interp.interpret("place order preset two for tesla");
        assert_eq!(result.message(), "Executing SELL 10 shares of TSLA at $5 each.");
    }

    #[test]
    fn custom_tables_are_honoured() {
        let presets = PresetBook::new([(
            "preset-9",
            Preset::new(Side::Sell, 3, Decimal::new(1250, 2)),
        )])
        .unwrap();
        let symbols = SymbolMap::new([("Nvidia", "NVDA")]).unwrap();
        let interp = VoiceInterpreter::new(presets, symbols);

        let result = interp.interpret("place order preset 9 for nvidia");
        assert_eq!(result.message(), "Executing SELL 3 shares of NVDA at $12.5 each.");

        // Default entries are not implied by custom tables.
        assert_eq!(
            interp.interpret("place order preset one for nvidia"),
            Interpretation::Rejected(Rejection::UnknownPreset("preset-1".into()))
        );
    }
}
