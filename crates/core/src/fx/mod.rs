//! FX module - static-rate conversion and money formatting.

pub mod currency_converter;
mod fx_model;
pub mod number_format;

pub use currency_converter::CurrencyConverter;
pub use fx_model::{FormatPath, FormattedAmount};
pub use number_format::LocaleFormattingError;
