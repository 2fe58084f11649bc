// crates/pulse-terminal/src/components/mod.rs

pub mod header;
pub mod watchlist;
pub mod trade_dialog;
pub mod order_list;
pub mod positions;
pub mod account;
pub mod tools;
pub mod preset_form;
pub mod status_bar;
pub mod help;
