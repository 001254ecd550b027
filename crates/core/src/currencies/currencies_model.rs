use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One supported currency.
///
/// `rate_to_base` is the number of units of this currency per one unit of the
/// base currency, so the base itself carries exactly `1`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyDescriptor {
    pub code: String,
    pub symbol: String,
    pub display_name: String,
    pub locale_tag: String,
    pub rate_to_base: Decimal,
}

impl CurrencyDescriptor {
    pub fn new(
        code: &str,
        symbol: &str,
        display_name: &str,
        locale_tag: &str,
        rate_to_base: Decimal,
    ) -> Self {
        Self {
            code: normalize_code(code),
            symbol: symbol.to_string(),
            display_name: display_name.to_string(),
            locale_tag: locale_tag.to_string(),
            rate_to_base,
        }
    }
}

/// Informational banking details of a market. Not read by the formatter.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct BankingMetadata {
    /// Display template such as `FR76 XXXX XXXX XXXX XXXX XXXX XXX`
    pub account_number_format: String,
    pub transfer_rails: Vec<String>,
    pub payment_apps: Vec<String>,
    pub regulator: String,
    pub card_network: String,
}

/// One supported country/market.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CountryProfile {
    pub code: String,
    pub display_name: String,
    pub flag_glyph: String,
    pub default_language: String,
    /// Other supported languages residents commonly pick
    pub alternate_languages: Vec<String>,
    pub default_currency_code: String,
    pub banking_metadata: BankingMetadata,
}

/// Canonical form of a currency or country code: trimmed, ASCII upper-case.
pub fn normalize_code(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}
