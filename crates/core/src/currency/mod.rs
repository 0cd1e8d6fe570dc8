//! Currency module - locale descriptions and display formatting.

mod currency_format;
mod currency_model;


pub use currency_format::format_currency;
pub use currency_model::CurrencyLocale;
