//! Transcript normalization.
//!
//! Speech recognizers spell small numbers out ("preset one") or leave a
//! space before digits ("preset 12"). Normalization folds both shapes
//! into the `preset-<digits>` token the grammar expects:
//!
//! 1. lower-case everything,
//! 2. `preset one` → `preset-1`, `preset two` → `preset-2`,
//! 3. `preset <digits>` → `preset-<digits>`.
//!
//! Only "one" and "two" are recognized as words. "preset three" is left
//! untouched and will not resolve.
//!
//! The spelled forms accept any whitespace run between the words. The
//! digit form only swaps the first literal space for a hyphen, so
//! `preset  1` becomes `preset- 1` and `preset\t1` stays as it is.

use std::sync::OnceLock;

use regex::{Captures, Regex};

static PRESET_ONE: OnceLock<Regex> = OnceLock::new();
static PRESET_TWO: OnceLock<Regex> = OnceLock::new();
static PRESET_DIGITS: OnceLock<Regex> = OnceLock::new();

fn compiled(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("normalization pattern is valid"))
}

/// Normalize a raw transcript. Idempotent: `normalize(normalize(s)) == normalize(s)`.
pub fn normalize(raw: &str) -> String {
    let lowered = raw.to_lowercase();

    let one = compiled(&PRESET_ONE, r"\bpreset\s+one\b");
    let two = compiled(&PRESET_TWO, r"\bpreset\s+two\b");
    let digits = compiled(&PRESET_DIGITS, r"\bpreset\s+[0-9]+");

    let text = one.replace_all(&lowered, "preset-1").into_owned();
    let text = two.replace_all(&text, "preset-2").into_owned();
    digits
        .replace_all(&text, |caps: &Captures| caps[0].replacen(' ', "-", 1))
        .into_owned()
}
