//! Error types for the core crate.
//!
//! Interpreter rejections are ordinary values: the interpreter never
//! fails, it returns a [`Rejection`] inside its result. The `Display`
//! text of each rejection is the message shown to the trader.
//!
//! [`ConfigError`] covers tables that cannot be turned into a valid
//! [`PresetBook`](crate::PresetBook) or [`SymbolMap`](crate::SymbolMap).

use thiserror::Error;

/// Why a transcript did not produce an order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    /// The grammar matched but the preset token has no definition.
    #[error("Preset {0} is not defined. Please try again.")]
    UnknownPreset(String),

    /// The grammar matched but the company has no ticker mapping.
    #[error("Company \"{0}\" is not recognized. Please try a valid company name.")]
    UnknownCompany(String),

    /// The transcript does not fit the order grammar at all.
    #[error(
        "Sorry, I couldn't understand the command. Please use the format \
         'Place order preset one for Apple' or 'Place order preset two for Tesla'."
    )]
    NoMatch,
}

/// Invalid preset or symbol table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("preset {0}: quantity must be positive")]
    ZeroQuantity(String),

    #[error("preset {id}: price must be positive, got {price}")]
    NonPositivePrice { id: String, price: String },

    #[error("preset id must not be blank")]
    BlankPresetId,

    #[error("company {0}: ticker must not be blank")]
    BlankTicker(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_messages_carry_the_token() {
        let err = Rejection::UnknownPreset("preset-3".into());
        assert_eq!(err.to_string(), "Preset preset-3 is not defined. Please try again.");

        let err = Rejection::UnknownCompany("amazon".into());
        assert!(err.to_string().contains("\"amazon\""));
    }

    #[test]
    fn no_match_explains_format() {
        assert!(Rejection::NoMatch
            .to_string()
            .contains("'Place order preset one for Apple'"));
    }
}
