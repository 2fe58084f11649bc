//! Preset configuration form and the list of user-defined presets.
//!
//! Every field is kept exactly as typed; only stop loss and take profit
//! are derived (see [`crate::risk_reward`]).

use serde::{Deserialize, Serialize};

use crate::risk_reward::{calculate_risk_reward, risk_reward_fields, RiskReward};

/// Editable fields of the form, in display order.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PresetField {
    PresetName,
    ScriptName,
    Action,
    OrderType,
    Quantity,
    TotalRiskOnCapital,
    TotalRisk,
    RiskRewardRatio,
}

impl PresetField {
    pub const ALL: [PresetField; 8] = [
        PresetField::PresetName,
        PresetField::ScriptName,
        PresetField::Action,
        PresetField::OrderType,
        PresetField::Quantity,
        PresetField::TotalRiskOnCapital,
        PresetField::TotalRisk,
        PresetField::RiskRewardRatio,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PresetField::PresetName => "Preset Name",
            PresetField::ScriptName => "Script Name",
            PresetField::Action => "Action (Buy/Sell)",
            PresetField::OrderType => "Order Type (Market/Limit)",
            PresetField::Quantity => "Quantity",
            PresetField::TotalRiskOnCapital => "Total Risk on Capital",
            PresetField::TotalRisk => "Total Risk",
            PresetField::RiskRewardRatio => "Risk Reward Ratio",
        }
    }

    /// Next field, wrapping around.
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous field, wrapping around.
    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Form state before "Add Preset".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresetDraft {
    pub preset_name: String,
    pub script_name: String,
    pub action: String,
    pub order_type: String,
    pub quantity: String,
    pub total_risk_on_capital: String,
    pub total_risk: String,
    pub risk_reward_ratio: String,
}

impl PresetDraft {
    pub fn field(&self, field: PresetField) -> &str {
        match field {
            PresetField::PresetName => &self.preset_name,
            PresetField::ScriptName => &self.script_name,
            PresetField::Action => &self.action,
            PresetField::OrderType => &self.order_type,
            PresetField::Quantity => &self.quantity,
            PresetField::TotalRiskOnCapital => &self.total_risk_on_capital,
            PresetField::TotalRisk => &self.total_risk,
            PresetField::RiskRewardRatio => &self.risk_reward_ratio,
        }
    }

    pub fn field_mut(&mut self, field: PresetField) -> &mut String {
        match field {
            PresetField::PresetName => &mut self.preset_name,
            PresetField::ScriptName => &mut self.script_name,
            PresetField::Action => &mut self.action,
            PresetField::OrderType => &mut self.order_type,
            PresetField::Quantity => &mut self.quantity,
            PresetField::TotalRiskOnCapital => &mut self.total_risk_on_capital,
            PresetField::TotalRisk => &mut self.total_risk,
            PresetField::RiskRewardRatio => &mut self.risk_reward_ratio,
        }
    }

    /// Live preview of the derived levels for the current input.
    pub fn levels(&self) -> Option<RiskReward> {
        calculate_risk_reward(&self.total_risk, &self.quantity, &self.risk_reward_ratio)
    }

    pub fn build(self) -> TradingPreset {
        let levels = self.levels();
        let (stop_loss, take_profit) = risk_reward_fields(levels.as_ref());
        TradingPreset {
            preset_name: self.preset_name,
            script_name: self.script_name,
            action: self.action,
            order_type: self.order_type,
            stop_loss,
            take_profit,
            quantity: self.quantity,
            total_risk_on_capital: self.total_risk_on_capital,
            total_risk: self.total_risk,
            risk_reward_ratio: self.risk_reward_ratio,
        }
    }
}

/// A saved user preset. Stop loss and take profit are blank when the
/// inputs did not allow computing them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradingPreset {
    pub preset_name: String,
    pub script_name: String,
    pub action: String,
    pub order_type: String,
    pub stop_loss: String,
    pub take_profit: String,
    pub quantity: String,
    pub total_risk_on_capital: String,
    pub total_risk: String,
    pub risk_reward_ratio: String,
}

/// User-defined presets, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct PresetList {
    items: Vec<TradingPreset>,
}

impl PresetList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a preset from the draft, append it, and clear the draft.
    pub fn add(&mut self, draft: &mut PresetDraft) -> &TradingPreset {
        let preset = std::mem::take(draft).build();
        self.items.push(preset);
        &self.items[self.items.len() - 1]
    }

    /// Remove by position. Out-of-range indices are ignored.
    pub fn remove(&mut self, index: usize) -> Option<TradingPreset> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TradingPreset> {
        self.items.iter()
    }

    pub fn get(&self, index: usize) -> Option<&TradingPreset> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
