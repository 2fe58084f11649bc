//! Order-placement grammar.
//!
//! The only recognized sentence is
//!
//! ```text
//! place order <preset-token> for <company>
//! ```
//!
//! where `<preset-token>` is `preset-<digits>` and `<company>` is a run of
//! ASCII letters. Matching is case-insensitive and unanchored, so filler
//! words before or after the command are ignored. Case folding is ASCII
//! only: `ſ` does not stand in for `s`. Input is expected to be
//! normalized first (see [`crate::normalize`]).

use std::sync::OnceLock;

use regex::Regex;

static ORDER_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Entities extracted from a matching transcript, borrowed from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderCommand<'a> {
    pub preset: &'a str,
    pub company: &'a str,
}

fn order_pattern() -> &'static Regex {
    ORDER_PATTERN.get_or_init(|| {
        Regex::new(r"(?i)(?-u:place)\s+(?-u:order)\s+((?-u:preset)-[0-9]+)\s+(?-u:for)\s+((?-u:[a-z])+)")
            .expect("order pattern is valid")
    })
}

/// Extract the preset token and company word, or `None` if the text does
/// not contain an order command.
pub fn match_order_command(normalized: &str) -> Option<OrderCommand<'_>> {
    let caps = order_pattern().captures(normalized)?;
    Some(OrderCommand {
        preset: caps.get(1)?.as_str(),
        company: caps.get(2)?.as_str(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_entities() {
        let cmd = match_order_command("please place order preset-2 for tesla now").unwrap();
        assert_eq!(cmd.preset, "preset-2");
        assert_eq!(cmd.company, "tesla");
    }

    #[test]
    fn ignores_case() {
        let cmd = match_order_command("PLACE ORDER PRESET-1 FOR Apple").unwrap();
        assert_eq!(cmd.preset, "PRESET-1");
        assert_eq!(cmd.company, "Apple");
    }

    #[test]
    fn company_stops_at_non_letters() {
        let cmd = match_order_command("place order preset-1 for apple's").unwrap();
        assert_eq!(cmd.company, "apple");
    }

    #[test]
    fn case_folding_is_ascii_only() {
        assert!(match_order_command("place order pre\u{17f}et-1 for apple").is_none());
        assert!(match_order_command("place order preset-1 for \u{17f}ony").is_none());
        assert!(match_order_command("place order preset-1 for \u{212a}odak").is_none());
    }

    #[test]
    fn requires_normalized_token() {
        assert!(match_order_command("place order preset 1 for apple").is_none());
        assert!(match_order_command("place order preset-1 for").is_none());
        assert!(match_order_command("buy some apple stock").is_none());
    }
}
