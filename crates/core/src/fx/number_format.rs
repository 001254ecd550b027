//! Locale-aware money rendering with a small static conventions table.
//!
//! Digit grouping is delegated to `num-format`; separators, symbol placement
//! and minimum grouping come from the table below. A locale missing from the
//! table is a [`LocaleFormattingError`], which the converter turns into the
//! fixed-point fallback.

use num_format::{CustomFormat, Grouping, ToFormattedString};
use num_traits::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

use crate::constants::DISPLAY_DECIMAL_PRECISION;

/// Internal formatting failure. Never returned by the public converter API.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocaleFormattingError {
    #[error("No number conventions for locale '{0}'")]
    UnsupportedLocale(String),

    #[error("Invalid group separator for locale '{locale}': {reason}")]
    InvalidSeparator { locale: String, reason: String },

    #[error("Amount {0} is out of range for grouped formatting")]
    AmountOutOfRange(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPosition {
    Prefix,
    Suffix,
}

/// How one locale writes a money amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberConventions {
    pub group_separator: &'static str,
    pub decimal_separator: &'static str,
    /// Integer digits required in the leading group before grouping kicks in
    /// (`2` means `1234` stays ungrouped but `12 345` is grouped).
    pub min_grouping_digits: u32,
    pub symbol_position: SymbolPosition,
    pub symbol_spacing: &'static str,
}

const FRENCH: NumberConventions = NumberConventions {
    group_separator: "\u{202f}",
    decimal_separator: ",",
    min_grouping_digits: 1,
    symbol_position: SymbolPosition::Suffix,
    symbol_spacing: "\u{a0}",
};

const GERMAN: NumberConventions = NumberConventions {
    group_separator: ".",
    decimal_separator: ",",
    min_grouping_digits: 1,
    symbol_position: SymbolPosition::Suffix,
    symbol_spacing: "\u{a0}",
};

const SWISS_GERMAN: NumberConventions = NumberConventions {
    group_separator: "\u{2019}",
    decimal_separator: ".",
    min_grouping_digits: 1,
    symbol_position: SymbolPosition::Prefix,
    symbol_spacing: "\u{a0}",
};

const SPANISH: NumberConventions = NumberConventions {
    group_separator: ".",
    decimal_separator: ",",
    min_grouping_digits: 2,
    symbol_position: SymbolPosition::Suffix,
    symbol_spacing: "\u{a0}",
};

const ENGLISH: NumberConventions = NumberConventions {
    group_separator: ",",
    decimal_separator: ".",
    min_grouping_digits: 1,
    symbol_position: SymbolPosition::Prefix,
    symbol_spacing: "",
};

/// Resolves conventions by exact tag first, then by primary language subtag.
pub fn conventions_for(locale_tag: &str) -> Result<NumberConventions, LocaleFormattingError> {
    let normalized = locale_tag.trim().replace('_', "-").to_ascii_lowercase();

    if normalized == "de-ch" {
        return Ok(SWISS_GERMAN);
    }

    let language = normalized.split('-').next().unwrap_or_default();
    match language {
        "fr" => Ok(FRENCH),
        "de" => Ok(GERMAN),
        "es" => Ok(SPANISH),
        "en" => Ok(ENGLISH),
        _ => Err(LocaleFormattingError::UnsupportedLocale(
            locale_tag.to_string(),
        )),
    }
}

/// Rounds half away from zero to the display precision and pads the scale,
/// so `1234.5` becomes `1234.50`. Negative zero is normalized to zero.
pub fn round_for_display(amount: Decimal) -> Decimal {
    let mut rounded = amount
        .round_dp_with_strategy(DISPLAY_DECIMAL_PRECISION, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(DISPLAY_DECIMAL_PRECISION);
    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }
    rounded
}

/// `1234.50 €` style rendering used when locale formatting is unavailable.
///
/// Built from the integer part and the cents, since `rescale` cannot add
/// decimals to amounts that already use all 28 digits.
pub fn format_fixed_point(amount: Decimal, symbol: &str) -> String {
    let rounded = round_for_display(amount);
    let magnitude = rounded.abs();
    let whole = magnitude.trunc();
    let cents = ((magnitude - whole) * Decimal::ONE_HUNDRED)
        .to_u32()
        .unwrap_or_default();
    let sign = if rounded.is_sign_negative() { "-" } else { "" };
    format!("{}{}.{:02} {}", sign, whole, cents, symbol)
}

pub fn format_localized(
    amount: Decimal,
    symbol: &str,
    locale_tag: &str,
) -> Result<String, LocaleFormattingError> {
    let conventions = conventions_for(locale_tag)?;
    let rounded = round_for_display(amount);
    let magnitude = rounded.abs();
    let integer_part = magnitude.trunc();

    let out_of_range = || LocaleFormattingError::AmountOutOfRange(rounded.to_string());
    let whole = integer_part.to_u128().ok_or_else(out_of_range)?;
    let cents = ((magnitude - integer_part) * Decimal::ONE_HUNDRED)
        .to_u32()
        .ok_or_else(out_of_range)?;

    let digits = group_digits(whole, &conventions, locale_tag)?;
    let number = format!("{}{}{:02}", digits, conventions.decimal_separator, cents);
    let sign = if rounded.is_sign_negative() { "-" } else { "" };

    Ok(match conventions.symbol_position {
        SymbolPosition::Prefix => {
            format!("{}{}{}{}", sign, symbol, conventions.symbol_spacing, number)
        }
        SymbolPosition::Suffix => {
            format!("{}{}{}{}", sign, number, conventions.symbol_spacing, symbol)
        }
    })
}

fn group_digits(
    value: u128,
    conventions: &NumberConventions,
    locale_tag: &str,
) -> Result<String, LocaleFormattingError> {
    let threshold = 10u128.pow(2 + conventions.min_grouping_digits);
    if value < threshold {
        return Ok(value.to_string());
    }

    let format = CustomFormat::builder()
        .grouping(Grouping::Standard)
        .separator(conventions.group_separator)
        .build()
        .map_err(|e| LocaleFormattingError::InvalidSeparator {
            locale: locale_tag.to_string(),
            reason: e.to_string(),
        })?;

    Ok(value.to_formatted_string(&format))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_conventions_resolution() {
        assert_eq!(conventions_for("fr-FR").unwrap(), FRENCH);
        assert_eq!(conventions_for("fr_SN").unwrap(), FRENCH);
        assert_eq!(conventions_for("de-CH").unwrap(), SWISS_GERMAN);
        assert_eq!(conventions_for("de-AT").unwrap(), GERMAN);
        assert_eq!(conventions_for("EN-gb").unwrap(), ENGLISH);
        assert!(matches!(
            conventions_for("xx-XX"),
            Err(LocaleFormattingError::UnsupportedLocale(_))
        ));
    }

    #[test]
    fn test_round_for_display() {
        assert_eq!(round_for_display(dec!(1234.5)).to_string(), "1234.50");
        assert_eq!(round_for_display(dec!(0.005)).to_string(), "0.01");
        assert_eq!(round_for_display(dec!(-0.004)).to_string(), "0.00");
        assert_eq!(round_for_display(dec!(2.345)).to_string(), "2.35");
    }

    #[test]
    fn test_format_fixed_point() {
        assert_eq!(format_fixed_point(dec!(1234.5), "€"), "1234.50 €");
        assert_eq!(format_fixed_point(dec!(-7), "$"), "-7.00 $");
        assert_eq!(format_fixed_point(dec!(-0.001), "$"), "0.00 $");
    }

    #[test]
    fn test_format_fixed_point_keeps_two_decimals_at_full_precision() {
        assert_eq!(
            format_fixed_point(Decimal::MAX, "X"),
            "79228162514264337593543950335.00 X"
        );
        assert_eq!(
            format_fixed_point(Decimal::MIN, "X"),
            "-79228162514264337593543950335.00 X"
        );
    }

    #[test]
    fn test_format_localized_french() {
        assert_eq!(
            format_localized(dec!(1234.5), "€", "fr-FR").unwrap(),
            "1\u{202f}234,50\u{a0}€"
        );
        assert_eq!(
            format_localized(dec!(1234567.891), "€", "fr-FR").unwrap(),
            "1\u{202f}234\u{202f}567,89\u{a0}€"
        );
    }

    #[test]
    fn test_format_localized_english_and_german() {
        assert_eq!(format_localized(dec!(108), "$", "en-US").unwrap(), "$108.00");
        assert_eq!(format_localized(dec!(-1234.5), "$", "en-US").unwrap(), "-$1,234.50");
        assert_eq!(format_localized(dec!(1234.5), "€", "de-DE").unwrap(), "1.234,50\u{a0}€");
        assert_eq!(
            format_localized(dec!(1234.5), "CHF", "de-CH").unwrap(),
            "CHF\u{a0}1\u{2019}234.50"
        );
    }

    #[test]
    fn test_spanish_minimum_grouping() {
        assert_eq!(format_localized(dec!(1234.5), "€", "es-ES").unwrap(), "1234,50\u{a0}€");
        assert_eq!(format_localized(dec!(12345), "€", "es-ES").unwrap(), "12.345,00\u{a0}€");
    }

    #[test]
    fn test_unsupported_locale_fails() {
        assert_eq!(
            format_localized(dec!(1), "¤", "tlh-KX"),
            Err(LocaleFormattingError::UnsupportedLocale("tlh-KX".to_string()))
        );
    }
}
