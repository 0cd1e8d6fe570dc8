//! Locale descriptions for currency display.

use log::debug;
use serde::{Deserialize, Serialize};

/// Formatting preferences for one currency/locale pairing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyLocale {
    /// BCP 47 language tag, e.g. "pt-BR".
    pub tag: String,
    pub symbol: String,
    pub decimal_separator: char,
    pub grouping_separator: char,
    /// Whether the symbol precedes the amount.
    pub symbol_first: bool,
    /// Whether a space separates symbol and amount.
    pub symbol_spaced: bool,
}

impl CurrencyLocale {
    /// Brazilian Portuguese / real: `R$ 1.234,56`.
    pub fn pt_br() -> Self {
        Self {
            tag: "pt-BR".to_string(),
            symbol: "R$".to_string(),
            decimal_separator: ',',
            grouping_separator: '.',
            symbol_first: true,
            symbol_spaced: true,
        }
    }

    /// US English / dollar: `$1,234.56`.
    pub fn en_us() -> Self {
        Self {
            tag: "en-US".to_string(),
            symbol: "$".to_string(),
            decimal_separator: '.',
            grouping_separator: ',',
            symbol_first: true,
            symbol_spaced: false,
        }
    }

    /// German / euro: `1.234,56 €`.
    pub fn de_de() -> Self {
        Self {
            tag: "de-DE".to_string(),
            symbol: "€".to_string(),
            decimal_separator: ',',
            grouping_separator: '.',
            symbol_first: false,
            symbol_spaced: true,
        }
    }

    /// Looks a locale up by its language tag, falling back to `en-US` for
    /// tags without a preset.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "pt-BR" | "pt" => Self::pt_br(),
            "de-DE" | "de" => Self::de_de(),
            "en-US" | "en" => Self::en_us(),
            other => {
                debug!("No currency locale preset for '{}', using en-US", other);
                Self::en_us()
            }
        }
    }
}
