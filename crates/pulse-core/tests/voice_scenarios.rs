// crates/pulse-core/tests/voice_scenarios.rs
use pulse_core::{
    normalize, Interpretation, PresetBook, Rejection, Side, SymbolMap, VoiceInterpreter,
};
use rust_decimal::Decimal;

const SCENARIOS: &str = include_str!("data/voice_commands.txt");

fn expected(outcome: &str) -> Interpretation {
    let fields: Vec<&str> = outcome.split(',').map(str::trim).collect();
    match fields[0] {
        "EXEC" => {
            let action = match fields[1] {
                "BUY" => Side::Buy,
                "SELL" => Side::Sell,
                other => panic!("bad side {other}"),
            };
            Interpretation::Executed(pulse_core::ExecutedOrder {
                preset_id: String::new(),
                action,
                quantity: fields[2].parse().unwrap(),
                price: fields[3].parse::<Decimal>().unwrap(),
                symbol: fields[4].to_string(),
            })
        }
        "UNKNOWN_PRESET" => Interpretation::Rejected(Rejection::UnknownPreset(fields[1].into())),
        "UNKNOWN_COMPANY" => Interpretation::Rejected(Rejection::UnknownCompany(fields[1].into())),
        "NO_MATCH" => Interpretation::Rejected(Rejection::NoMatch),
        other => panic!("bad expectation {other}"),
    }
}

/// Compare ignoring the preset id, which the scenario file does not spell out.
fn same_outcome(actual: &Interpretation, wanted: &Interpretation) -> bool {
    match (actual, wanted) {
        (Interpretation::Executed(a), Interpretation::Executed(w)) => {
            a.action == w.action
                && a.quantity == w.quantity
                && a.price == w.price
                && a.symbol == w.symbol
        }
        _ => actual == wanted,
    }
}

#[test]
fn scenario_file_matches_interpreter() {
    let interpreter = VoiceInterpreter::default();
    let mut current = String::from("(unnamed)");
    let mut checked = 0;

    for line in SCENARIOS.lines() {
        if let Some(name) = line.strip_prefix("#name:") {
            current = name.trim().to_string();
            continue;
        }
        if line.starts_with('#') || line.trim().is_empty() {
            continue;
        }

        let (transcript, outcome) = line.split_once('|').expect("scenario needs a '|'");
        let actual = interpreter.interpret(transcript.trim());
        let wanted = expected(outcome);
        assert!(
            same_outcome(&actual, &wanted),
            "scenario {current:?}: {transcript:?} gave {actual:?}, wanted {wanted:?}"
        );
        checked += 1;
    }

    assert!(checked >= 15, "only {checked} scenarios ran");
}

#[test]
fn every_preset_and_company_pair_executes() {
    let interpreter = VoiceInterpreter::default();
    let presets = PresetBook::default();
    let symbols = SymbolMap::default();

    for (preset_id, preset) in presets.iter() {
        for (company, ticker) in symbols.iter() {
            let transcript = format!("place order {preset_id} for {company}");
            match interpreter.interpret(&transcript) {
                Interpretation::Executed(order) => {
                    assert_eq!(order.preset_id, preset_id);
                    assert_eq!(order.action, preset.action);
                    assert_eq!(order.quantity, preset.quantity);
                    assert_eq!(order.price, preset.price);
                    assert_eq!(order.symbol, ticker);
                }
                other => panic!("{transcript:?} was rejected: {other:?}"),
            }
        }
    }
}

#[test]
fn rejection_messages_quote_the_input() {
    let interpreter = VoiceInterpreter::default();

    let msg = interpreter.interpret("place order preset-3 for apple").message();
    assert_eq!(msg, "Preset preset-3 is not defined. Please try again.");

    let msg = interpreter.interpret("place order preset one for amazon").message();
    assert_eq!(
        msg,
        "Company \"amazon\" is not recognized. Please try a valid company name."
    );
}

#[test]
fn normalize_is_idempotent() {
    let samples = [
        "",
        "Place order PRESET ONE for Apple",
        "preset two preset 3 preset four",
        "preset\t\t17 and preset-2",
        "presets one two 3",
        "PLACE ORDER PRESET 1 FOR ÄPFEL",
    ];
    for s in samples {
        let once = normalize(s);
        assert_eq!(normalize(&once), once, "not idempotent for {s:?}");
    }
}

#[test]
fn tables_load_from_toml() {
    #[derive(serde::Deserialize)]
    struct Tables {
        presets: PresetBook,
        symbols: SymbolMap,
    }

    let tables: Tables = toml::from_str(
        r#"
        [presets.preset-5]
        action = "sell"
        quantity = 25
        price = 101.25

        [symbols]
        Amazon = "AMZN"
        "#,
    )
    .unwrap();

    let interpreter = VoiceInterpreter::new(tables.presets, tables.symbols);
    let order = interpreter
        .interpret("Place order preset five for Amazon")
        .into_result();
    assert_eq!(order, Err(Rejection::NoMatch));

    let order = interpreter
        .interpret("place order preset 5 for amazon")
        .into_result()
        .unwrap();
    assert_eq!(order.action, Side::Sell);
    assert_eq!(order.symbol, "AMZN");
    assert_eq!(order.price, Decimal::new(10125, 2));
}

#[test]
fn invalid_toml_table_is_refused() {
    let parsed: Result<PresetBook, _> = toml::from_str(
        r#"
        [preset-1]
        action = "buy"
        quantity = 0
        price = 10
        "#,
    );
    assert!(parsed.is_err());
}
