//! pulse-core
//!
//! Pure trading logic behind the Trade Pulse terminal:
//! - presets and company → ticker lookup
//! - voice command normalization, grammar and interpretation
//! - risk/reward derivation for user presets
//! - order submission payloads

pub mod side;
pub mod error;
pub mod preset;
pub mod symbols;
pub mod normalize;
pub mod grammar;
pub mod interpreter;
pub mod risk_reward;
pub mod order_request;
pub mod preset_config;

pub use side::{ParseSideError, Side};
pub use error::{ConfigError, Rejection};

pub use preset::{Preset, PresetBook};
pub use symbols::SymbolMap;

pub use normalize::normalize;
pub use grammar::{match_order_command, OrderCommand};
pub use interpreter::{ExecutedOrder, Interpretation, VoiceInterpreter};

pub use risk_reward::{calculate_risk_reward, risk_reward_fields, RiskReward};
pub use order_request::{OrderRequest, PriceType, ProductType, Stock};
pub use preset_config::{PresetDraft, PresetField, PresetList, TradingPreset};
