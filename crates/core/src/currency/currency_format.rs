//! Locale-aware currency formatting.
//!
//! Formatting is a pure function over an amount and a locale description;
//! the numeric view models never carry formatted strings.

use rust_decimal::Decimal;

use super::currency_model::CurrencyLocale;
use crate::constants::DISPLAY_DECIMAL_PRECISION;

/// Renders `amount` for display in `locale`, rounded to display precision.
///
/// The sign precedes the symbol for prefix symbols: `-R$ 40,00`.
pub fn format_currency(amount: Decimal, locale: &CurrencyLocale) -> String {
    let rounded = amount.round_dp(DISPLAY_DECIMAL_PRECISION);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let body = format_amount(rounded.abs(), locale);

    let with_symbol = match (locale.symbol_first, locale.symbol_spaced) {
        (true, true) => format!("{} {}", locale.symbol, body),
        (true, false) => format!("{}{}", locale.symbol, body),
        (false, true) => format!("{} {}", body, locale.symbol),
        (false, false) => format!("{}{}", body, locale.symbol),
    };

    if negative {
        format!("-{}", with_symbol)
    } else {
        with_symbol
    }
}

/// Digit grouping and separator substitution for a non-negative amount.
fn format_amount(amount: Decimal, locale: &CurrencyLocale) -> String {
    let fixed = format!("{:.prec$}", amount, prec = DISPLAY_DECIMAL_PRECISION as usize);
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

    let grouped = group_digits(int_part, locale.grouping_separator);
    if frac_part.is_empty() {
        grouped
    } else {
        format!("{}{}{}", grouped, locale.decimal_separator, frac_part)
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index != 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}
