//! Currencies module - static currency and country tables.

mod currencies_constants;
mod currencies_model;
mod rate_table;

pub use currencies_constants::{builtin_countries, builtin_currencies};
pub use currencies_model::{normalize_code, BankingMetadata, CountryProfile, CurrencyDescriptor};
pub use rate_table::RateTable;
