use std::collections::BTreeMap;

use log::debug;
use rust_decimal::Decimal;

use super::currencies_constants::{builtin_countries, builtin_currencies};
use super::currencies_model::{normalize_code, CountryProfile, CurrencyDescriptor};
use crate::constants::BASE_CURRENCY;
use crate::errors::{Error, Result};

/// Immutable lookup table of currencies (with their rate to the base) and countries.
///
/// Built once at start-up and shared read-only afterwards.
#[derive(Debug, Clone)]
pub struct RateTable {
    base_currency: String,
    currencies: BTreeMap<String, CurrencyDescriptor>,
    countries: BTreeMap<String, CountryProfile>,
}

impl RateTable {
    /// Builds a table after checking every data-model invariant.
    pub fn new(
        base_currency: &str,
        currencies: Vec<CurrencyDescriptor>,
        countries: Vec<CountryProfile>,
    ) -> Result<Self> {
        let base_currency = normalize_code(base_currency);

        if currencies.is_empty() {
            return Err(Error::InvalidRateTable(
                "at least one currency is required".to_string(),
            ));
        }

        let mut currency_map = BTreeMap::new();
        for mut currency in currencies {
            currency.code = normalize_code(&currency.code);
            if currency.rate_to_base <= Decimal::ZERO {
                return Err(Error::InvalidRateTable(format!(
                    "rate for {} must be strictly positive, got {}",
                    currency.code, currency.rate_to_base
                )));
            }
            if currency_map.contains_key(&currency.code) {
                return Err(Error::InvalidRateTable(format!(
                    "duplicate currency code {}",
                    currency.code
                )));
            }
            currency_map.insert(currency.code.clone(), currency);
        }

        match currency_map.get(&base_currency) {
            Some(base) if base.rate_to_base == Decimal::ONE => {}
            Some(base) => {
                return Err(Error::InvalidRateTable(format!(
                    "base currency {} must have a rate of 1, got {}",
                    base_currency, base.rate_to_base
                )))
            }
            None => {
                return Err(Error::InvalidRateTable(format!(
                    "base currency {} is missing",
                    base_currency
                )))
            }
        }

        let unit_rates = currency_map
            .values()
            .filter(|c| c.rate_to_base == Decimal::ONE)
            .count();
        if unit_rates != 1 {
            return Err(Error::InvalidRateTable(format!(
                "exactly one currency may carry the base rate of 1, found {}",
                unit_rates
            )));
        }

        let mut country_map = BTreeMap::new();
        for mut country in countries {
            country.code = normalize_code(&country.code);
            country.default_currency_code = normalize_code(&country.default_currency_code);
            if !currency_map.contains_key(&country.default_currency_code) {
                return Err(Error::InvalidRateTable(format!(
                    "country {} uses unknown currency {}",
                    country.code, country.default_currency_code
                )));
            }
            if country_map.contains_key(&country.code) {
                return Err(Error::InvalidRateTable(format!(
                    "duplicate country code {}",
                    country.code
                )));
            }
            country_map.insert(country.code.clone(), country);
        }

        debug!(
            "Rate table ready: {} currencies, {} countries, base {}",
            currency_map.len(),
            country_map.len(),
            base_currency
        );

        Ok(Self {
            base_currency,
            currencies: currency_map,
            countries: country_map,
        })
    }

    /// The demo markets shipped with the application.
    pub fn builtin() -> Result<Self> {
        Self::new(BASE_CURRENCY, builtin_currencies(), builtin_countries())
    }

    pub fn base_currency(&self) -> &str {
        &self.base_currency
    }

    pub fn lookup_currency(&self, code: &str) -> Result<&CurrencyDescriptor> {
        self.currencies
            .get(&normalize_code(code))
            .ok_or_else(|| Error::UnknownCurrency(code.to_string()))
    }

    pub fn lookup_country(&self, code: &str) -> Result<&CountryProfile> {
        self.countries
            .get(&normalize_code(code))
            .ok_or_else(|| Error::UnknownCountry(code.to_string()))
    }

    pub fn contains_currency(&self, code: &str) -> bool {
        self.currencies.contains_key(&normalize_code(code))
    }

    pub fn contains_country(&self, code: &str) -> bool {
        self.countries.contains_key(&normalize_code(code))
    }

    /// Currencies sorted by code.
    pub fn currencies(&self) -> impl Iterator<Item = &CurrencyDescriptor> {
        self.currencies.values()
    }

    /// Countries sorted by code.
    pub fn countries(&self) -> impl Iterator<Item = &CountryProfile> {
        self.countries.values()
    }

    /// Units of `to` per one unit of `from`, routed through the base currency.
    pub fn rate_between(&self, from: &str, to: &str) -> Result<Decimal> {
        let from_rate = self.lookup_currency(from)?.rate_to_base;
        let to_rate = self.lookup_currency(to)?.rate_to_base;
        to_rate.checked_div(from_rate).ok_or_else(|| {
            Error::CurrencyConversionFailed(format!("rate {} -> {} overflowed", from, to))
        })
    }
}
