// crates/pulse-core/tests/risk_reward.rs
use pulse_core::{calculate_risk_reward, risk_reward_fields};

fn fields(total_risk: &str, quantity: &str, ratio: &str) -> (String, String) {
    risk_reward_fields(calculate_risk_reward(total_risk, quantity, ratio).as_ref())
}

#[test]
fn computes_stop_loss_and_take_profit() {
    assert_eq!(fields("100", "10", "2"), ("10.00".into(), "20.00".into()));
    assert_eq!(fields("250", "4", "1.5"), ("62.50".into(), "93.75".into()));
}

#[test]
fn zero_quantity_is_not_computable() {
    assert_eq!(fields("100", "0", "2"), (String::new(), String::new()));
}

#[test]
fn non_numeric_input_is_not_computable() {
    assert_eq!(fields("abc", "10", "2"), (String::new(), String::new()));
    assert_eq!(fields("100", "ten", "2"), (String::new(), String::new()));
    assert_eq!(fields("100", "10", ""), (String::new(), String::new()));
}

#[test]
fn fractional_quantity_is_allowed() {
    assert_eq!(fields("10", "0.5", "3"), ("20.00".into(), "60.00".into()));
}
