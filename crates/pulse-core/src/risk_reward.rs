//! Stop-loss / take-profit derivation for the preset form.
//!
//! ```text
//! stop_loss   = round2(total_risk / quantity)
//! take_profit = round2(stop_loss * risk_reward_ratio)
//! ```
//!
//! `take_profit` is computed from the already rounded stop loss. Inputs
//! that are not numbers, or a quantity that is not strictly positive,
//! make the pair "not computable": [`calculate_risk_reward`] returns
//! `None` and the form shows two blank fields.
//!
//! Values are `Decimal`s: magnitudes up to about 7.9e28 with at most 28
//! fractional digits. Inputs or results outside that range (`1e30`,
//! `1e-30`) are not computable either.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Derived exit levels, both rounded to cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskReward {
    pub stop_loss: Decimal,
    pub take_profit: Decimal,
}

impl RiskReward {
    /// Compute from already-parsed values. `None` when quantity ≤ 0 or
    /// the arithmetic overflows.
    pub fn compute(total_risk: Decimal, quantity: Decimal, ratio: Decimal) -> Option<Self> {
        if quantity <= Decimal::ZERO {
            return None;
        }
        let stop_loss = round2(total_risk.checked_div(quantity)?);
        let take_profit = round2(stop_loss.checked_mul(ratio)?);
        Some(RiskReward {
            stop_loss,
            take_profit,
        })
    }

    /// Both levels as two-decimal strings, e.g. `("10.00", "20.00")`.
    pub fn formatted(&self) -> (String, String) {
        (
            format!("{:.2}", self.stop_loss),
            format!("{:.2}", self.take_profit),
        )
    }
}

/// Compute from form text. `None` means "not computable".
pub fn calculate_risk_reward(total_risk: &str, quantity: &str, ratio: &str) -> Option<RiskReward> {
    RiskReward::compute(
        parse_decimal(total_risk)?,
        parse_decimal(quantity)?,
        parse_decimal(ratio)?,
    )
}

/// Form rendering of an optional result: blanks when not computable.
pub fn risk_reward_fields(levels: Option<&RiskReward>) -> (String, String) {
    levels
        .map(RiskReward::formatted)
        .unwrap_or_else(|| (String::new(), String::new()))
}

/// Parse a finite decimal from user text. Plain (`12.5`) and scientific
/// (`1.25e1`) notation are accepted; anything else is rejected.
pub fn parse_decimal(text: &str) -> Option<Decimal> {
    let text = text.trim();
    if !text.bytes().any(|b| b.is_ascii_digit()) || !text.bytes().all(is_numeric_byte) {
        return None;
    }
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}

fn is_numeric_byte(b: u8) -> bool {
    b.is_ascii_digit() || matches!(b, b'.' | b'+' | b'-' | b'e' | b'E')
}

fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_half_away_from_zero() {
        let levels = calculate_risk_reward("1", "8", "1").unwrap();
        // 0.125 → 0.13
        assert_eq!(levels.formatted().0, "0.13");
    }

    #[test]
    fn take_profit_uses_rounded_stop_loss() {
        // 10 / 3 = 3.333.. → 3.33; 3.33 * 3 = 9.99 (not 10.00)
        let levels = calculate_risk_reward("10", "3", "3").unwrap();
        assert_eq!(levels.formatted(), ("3.33".to_string(), "9.99".to_string()));
    }

    #[test]
    fn parses_loosely_formatted_numbers() {
        assert_eq!(parse_decimal(" 12.5 "), Some(Decimal::new(125, 1)));
        assert_eq!(parse_decimal("1.25e1"), Some(Decimal::new(125, 1)));
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal("NaN"), None);
        assert_eq!(parse_decimal("12abc"), None);
    }

    #[test]
    fn digit_separators_are_not_numbers() {
        assert_eq!(parse_decimal("1_000"), None);
        assert_eq!(parse_decimal("1,000"), None);
        assert_eq!(calculate_risk_reward("1_000", "10", "2"), None);
        assert_eq!(calculate_risk_reward("100", "1_0", "2"), None);
    }

    #[test]
    fn values_beyond_decimal_range_are_not_computable() {
        assert_eq!(calculate_risk_reward("1e30", "10", "2"), None);
        assert_eq!(calculate_risk_reward("100", "1e-30", "2"), None);
        // Largest inputs still inside the range compute.
        let levels = calculate_risk_reward("1e27", "10", "2").unwrap();
        assert_eq!(levels.stop_loss, Decimal::from_scientific("1e26").unwrap());
    }

    #[test]
    fn negative_quantity_is_not_computable() {
        assert_eq!(calculate_risk_reward("100", "-5", "2"), None);
    }

    #[test]
    fn blank_fields_when_not_computable() {
        assert_eq!(risk_reward_fields(None), (String::new(), String::new()));
    }
}
