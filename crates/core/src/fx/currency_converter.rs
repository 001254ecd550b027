use std::sync::Arc;

use log::warn;
use rust_decimal::Decimal;

use super::fx_model::{FormatPath, FormattedAmount};
use super::number_format::{format_fixed_point, format_localized};
use crate::currencies::{normalize_code, RateTable};
use crate::errors::{Error, Result};

/// Converts amounts between currencies of a [`RateTable`] and renders them for display.
///
/// Every conversion goes `amount / rate(from) * rate(to)`, i.e. through the
/// base currency. Rates are static, so results are deterministic but this is
/// not a market FX engine.
#[derive(Debug, Clone)]
pub struct CurrencyConverter {
    rate_table: Arc<RateTable>,
}

impl CurrencyConverter {
    pub fn new(rate_table: Arc<RateTable>) -> Self {
        Self { rate_table }
    }

    pub fn rate_table(&self) -> &RateTable {
        &self.rate_table
    }

    /// Converts `amount` from `from_currency` to `to_currency`.
    ///
    /// Identical codes return `amount` untouched, without a lookup.
    pub fn convert(&self, amount: Decimal, from_currency: &str, to_currency: &str) -> Result<Decimal> {
        if normalize_code(from_currency) == normalize_code(to_currency) {
            return Ok(amount);
        }

        let from = self.rate_table.lookup_currency(from_currency)?;
        let to = self.rate_table.lookup_currency(to_currency)?;

        amount
            .checked_div(from.rate_to_base)
            .and_then(|in_base| in_base.checked_mul(to.rate_to_base))
            .ok_or_else(|| {
                Error::CurrencyConversionFailed(format!(
                    "{} {} -> {} overflowed",
                    amount, from.code, to.code
                ))
            })
    }

    /// Formats `amount` in `currency_code` and reports which branch was taken.
    pub fn format_detailed(&self, amount: Decimal, currency_code: &str) -> Result<FormattedAmount> {
        let currency = self.rate_table.lookup_currency(currency_code)?;

        match format_localized(amount, &currency.symbol, &currency.locale_tag) {
            Ok(text) => Ok(FormattedAmount {
                text,
                path: FormatPath::Localized,
            }),
            Err(e) => {
                warn!(
                    "Locale formatting failed for {} ({}): {}. Using fixed-point fallback.",
                    currency.code, currency.locale_tag, e
                );
                Ok(FormattedAmount {
                    text: format_fixed_point(amount, &currency.symbol),
                    path: FormatPath::FixedPointFallback,
                })
            }
        }
    }

    /// Display string with exactly two decimals. Fails only on an unknown currency.
    pub fn format(&self, amount: Decimal, currency_code: &str) -> Result<String> {
        self.format_detailed(amount, currency_code)
            .map(|formatted| formatted.text)
    }

    /// Like [`format`](Self::format) on the absolute value, prefixed with `+` or `-`.
    /// Zero counts as non-negative.
    pub fn format_signed(&self, amount: Decimal, currency_code: &str) -> Result<String> {
        let body = self.format(amount.abs(), currency_code)?;
        let sign = if amount.is_sign_negative() && !amount.is_zero() {
            '-'
        } else {
            '+'
        };
        Ok(format!("{}{}", sign, body))
    }

    /// The currency symbol, or the code itself when the currency is unknown.
    pub fn symbol_of(&self, currency_code: &str) -> String {
        match self.rate_table.lookup_currency(currency_code) {
            Ok(currency) => currency.symbol.clone(),
            Err(_) => currency_code.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currencies::CurrencyDescriptor;
    use rust_decimal_macros::dec;

    fn converter() -> CurrencyConverter {
        CurrencyConverter::new(Arc::new(RateTable::builtin().unwrap()))
    }

    fn converter_with_exotic_locale() -> CurrencyConverter {
        let table = RateTable::new(
            "EUR",
            vec![
                CurrencyDescriptor::new("EUR", "€", "Euro", "fr-FR", dec!(1)),
                CurrencyDescriptor::new("KLG", "₭", "Klingon Darsek", "tlh-KX", dec!(3)),
            ],
            vec![],
        )
        .unwrap();
        CurrencyConverter::new(Arc::new(table))
    }

    #[test]
    fn test_convert_through_base() {
        let converter = converter();
        assert_eq!(converter.convert(dec!(100), "EUR", "USD").unwrap(), dec!(108));
        assert_eq!(converter.convert(dec!(108), "USD", "EUR").unwrap(), dec!(100));
        assert_eq!(converter.convert(dec!(108), "USD", "GBP").unwrap(), dec!(86));
    }

    #[test]
    fn test_convert_identity_keeps_amount() {
        let converter = converter();
        let amount = dec!(0.1234567890123456789);
        assert_eq!(converter.convert(amount, "CHF", "CHF").unwrap(), amount);
        assert_eq!(converter.convert(amount, "chf", "CHF").unwrap(), amount);
    }

    #[test]
    fn test_convert_unknown_currency() {
        let converter = converter();
        assert!(matches!(
            converter.convert(dec!(1), "EUR", "ZZZ"),
            Err(Error::UnknownCurrency(code)) if code == "ZZZ"
        ));
        assert!(matches!(
            converter.convert(dec!(1), "ZZZ", "EUR"),
            Err(Error::UnknownCurrency(_))
        ));
    }

    #[test]
    fn test_convert_overflow_is_reported() {
        let converter = converter();
        assert!(matches!(
            converter.convert(Decimal::MAX, "EUR", "XOF"),
            Err(Error::CurrencyConversionFailed(_))
        ));
    }

    #[test]
    fn test_format_uses_currency_locale() {
        let converter = converter();
        assert_eq!(
            converter.format(dec!(1234.5), "EUR").unwrap(),
            "1\u{202f}234,50\u{a0}€"
        );
        assert_eq!(converter.format(dec!(108), "USD").unwrap(), "$108.00");
        assert_eq!(converter.format(dec!(99.999), "GBP").unwrap(), "£100.00");
        assert_eq!(converter.format(dec!(5), "MAD").unwrap(), "5,00\u{a0}DH");
    }

    #[test]
    fn test_format_unknown_currency_fails() {
        assert!(matches!(
            converter().format(dec!(1), "ZZZ"),
            Err(Error::UnknownCurrency(_))
        ));
    }

    #[test]
    fn test_format_falls_back_on_unsupported_locale() {
        let converter = converter_with_exotic_locale();
        let formatted = converter.format_detailed(dec!(1234.5), "KLG").unwrap();
        assert_eq!(formatted.path, FormatPath::FixedPointFallback);
        assert_eq!(formatted.text, "1234.50 ₭");
        assert_eq!(
            converter.format(Decimal::MAX, "KLG").unwrap(),
            "79228162514264337593543950335.00 ₭"
        );

        let localized = converter.format_detailed(dec!(1234.5), "EUR").unwrap();
        assert_eq!(localized.path, FormatPath::Localized);
    }

    #[test]
    fn test_format_signed() {
        let converter = converter();
        assert_eq!(converter.format_signed(dec!(5), "USD").unwrap(), "+$5.00");
        assert_eq!(converter.format_signed(dec!(-5), "USD").unwrap(), "-$5.00");
        assert_eq!(converter.format_signed(dec!(0), "USD").unwrap(), "+$0.00");
        assert_eq!(
            converter.format_signed(dec!(-1234.5), "EUR").unwrap(),
            "-1\u{202f}234,50\u{a0}€"
        );
    }

    #[test]
    fn test_symbol_of_never_fails() {
        let converter = converter();
        assert_eq!(converter.symbol_of("EUR"), "€");
        assert_eq!(converter.symbol_of("CHF"), "CHF");
        assert_eq!(converter.symbol_of("ZZZ"), "ZZZ");
    }
}
