//! Property-based tests for conversion and money formatting.
//!
//! These tests verify that the conversion and formatting laws hold for every
//! built-in currency, using the `proptest` crate for input generation.

use std::sync::Arc;

use bankdemo_core::currencies::{builtin_currencies, RateTable};
use bankdemo_core::fx::CurrencyConverter;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// =============================================================================
// Generators
// =============================================================================

/// Picks one of the built-in currency codes.
fn arb_currency() -> impl Strategy<Value = String> {
    let codes: Vec<String> = builtin_currencies().into_iter().map(|c| c.code).collect();
    proptest::sample::select(codes)
}

/// Amounts with up to four decimals, within +/- ten billion.
fn arb_amount() -> impl Strategy<Value = Decimal> {
    (-100_000_000_000_000i64..100_000_000_000_000i64).prop_map(|units| Decimal::new(units, 4))
}

fn converter() -> CurrencyConverter {
    CurrencyConverter::new(Arc::new(RateTable::builtin().unwrap()))
}

/// Digits after the last `.` or `,` of a formatted amount.
fn decimals_after_separator(text: &str) -> Option<String> {
    let position = text.rfind(['.', ','])?;
    Some(
        text[position + 1..]
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect(),
    )
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Converting into the same currency never changes the amount.
    #[test]
    fn prop_identity_conversion_is_exact(currency in arb_currency(), amount in arb_amount()) {
        let converter = converter();
        prop_assert_eq!(converter.convert(amount, &currency, &currency).unwrap(), amount);
    }

    /// There and back again stays within rounding tolerance.
    #[test]
    fn prop_round_trip_conversion(
        from in arb_currency(),
        to in arb_currency(),
        amount in arb_amount(),
    ) {
        let converter = converter();
        let there = converter.convert(amount, &from, &to).unwrap();
        let back = converter.convert(there, &to, &from).unwrap();
        prop_assert!(
            (back - amount).abs() <= dec!(0.000001),
            "{} {} -> {} {} -> {} {}", amount, from, there, to, back, from
        );
    }

    /// Every rendering carries exactly two decimals.
    #[test]
    fn prop_format_has_two_decimals(currency in arb_currency(), amount in arb_amount()) {
        let text = converter().format(amount, &currency).unwrap();
        prop_assert_eq!(decimals_after_separator(&text).map(|d| d.len()), Some(2));
    }

    /// Signed rendering starts with `+` exactly for non-negative amounts.
    #[test]
    fn prop_format_signed_prefix(currency in arb_currency(), amount in arb_amount()) {
        let text = converter().format_signed(amount, &currency).unwrap();
        let expected = if amount >= Decimal::ZERO { '+' } else { '-' };
        prop_assert_eq!(text.chars().next(), Some(expected));
    }
}

#[test]
fn test_signed_zero_is_positive() {
    let converter = converter();
    for currency in builtin_currencies() {
        let text = converter.format_signed(Decimal::ZERO, &currency.code).unwrap();
        assert!(text.starts_with('+'), "{}", text);
    }
}

#[test]
fn test_concrete_eur_usd_scenario() {
    let converter = converter();
    assert_eq!(converter.convert(dec!(100), "EUR", "USD").unwrap(), dec!(108.0));
    assert_eq!(converter.convert(dec!(108), "USD", "EUR").unwrap(), dec!(100.0));
}
