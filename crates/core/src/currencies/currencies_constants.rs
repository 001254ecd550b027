use rust_decimal_macros::dec;

use super::currencies_model::{BankingMetadata, CountryProfile, CurrencyDescriptor};

/// Demo currency set. Rates are static and quoted per 1 EUR.
pub fn builtin_currencies() -> Vec<CurrencyDescriptor> {
    vec![
        CurrencyDescriptor::new("EUR", "€", "Euro", "fr-FR", dec!(1)),
        CurrencyDescriptor::new("USD", "$", "US Dollar", "en-US", dec!(1.08)),
        CurrencyDescriptor::new("GBP", "£", "British Pound", "en-GB", dec!(0.86)),
        CurrencyDescriptor::new("CHF", "CHF", "Swiss Franc", "de-CH", dec!(0.95)),
        CurrencyDescriptor::new("CAD", "$", "Canadian Dollar", "en-CA", dec!(1.47)),
        CurrencyDescriptor::new("MAD", "DH", "Moroccan Dirham", "fr-MA", dec!(10.85)),
        CurrencyDescriptor::new("XOF", "CFA", "West African CFA Franc", "fr-SN", dec!(655.957)),
    ]
}

struct CountrySeed<'a> {
    code: &'a str,
    name: &'a str,
    flag: &'a str,
    language: &'a str,
    alternates: &'a [&'a str],
    currency: &'a str,
    account_format: &'a str,
    rails: &'a [&'a str],
    apps: &'a [&'a str],
    regulator: &'a str,
    card_network: &'a str,
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

impl From<CountrySeed<'_>> for CountryProfile {
    fn from(seed: CountrySeed<'_>) -> Self {
        CountryProfile {
            code: seed.code.to_string(),
            display_name: seed.name.to_string(),
            flag_glyph: seed.flag.to_string(),
            default_language: seed.language.to_string(),
            alternate_languages: to_strings(seed.alternates),
            default_currency_code: seed.currency.to_string(),
            banking_metadata: BankingMetadata {
                account_number_format: seed.account_format.to_string(),
                transfer_rails: to_strings(seed.rails),
                payment_apps: to_strings(seed.apps),
                regulator: seed.regulator.to_string(),
                card_network: seed.card_network.to_string(),
            },
        }
    }
}

/// Demo markets.
pub fn builtin_countries() -> Vec<CountryProfile> {
    let seeds = [
        CountrySeed {
            code: "FR",
            name: "France",
            flag: "🇫🇷",
            language: "fr",
            alternates: &["en"],
            currency: "EUR",
            account_format: "FR76 XXXX XXXX XXXX XXXX XXXX XXX",
            rails: &["SEPA", "SEPA Instant"],
            apps: &["Lydia", "Paylib", "Wero"],
            regulator: "ACPR",
            card_network: "Carte Bancaire",
        },
        CountrySeed {
            code: "BE",
            name: "Belgique",
            flag: "🇧🇪",
            language: "fr",
            alternates: &["en", "de"],
            currency: "EUR",
            account_format: "BEXX XXXX XXXX XXXX",
            rails: &["SEPA", "SEPA Instant"],
            apps: &["Payconiq", "Wero"],
            regulator: "NBB",
            card_network: "Bancontact",
        },
        CountrySeed {
            code: "DE",
            name: "Deutschland",
            flag: "🇩🇪",
            language: "de",
            alternates: &["en"],
            currency: "EUR",
            account_format: "DEXX XXXX XXXX XXXX XXXX XX",
            rails: &["SEPA", "SEPA Instant"],
            apps: &["PayPal", "Wero"],
            regulator: "BaFin",
            card_network: "Girocard",
        },
        CountrySeed {
            code: "ES",
            name: "España",
            flag: "🇪🇸",
            language: "es",
            alternates: &["en"],
            currency: "EUR",
            account_format: "ESXX XXXX XXXX XXXX XXXX XXXX",
            rails: &["SEPA", "SEPA Instant"],
            apps: &["Bizum"],
            regulator: "Banco de España",
            card_network: "Visa",
        },
        CountrySeed {
            code: "GB",
            name: "United Kingdom",
            flag: "🇬🇧",
            language: "en",
            alternates: &[],
            currency: "GBP",
            account_format: "XX-XX-XX XXXXXXXX",
            rails: &["Faster Payments", "BACS", "CHAPS"],
            apps: &["Paym"],
            regulator: "FCA",
            card_network: "Visa",
        },
        CountrySeed {
            code: "US",
            name: "United States",
            flag: "🇺🇸",
            language: "en",
            alternates: &["es"],
            currency: "USD",
            account_format: "XXXXXXXXX XXXXXXXXXXXX",
            rails: &["ACH", "Wire", "RTP"],
            apps: &["Zelle", "Venmo", "Cash App"],
            regulator: "OCC",
            card_network: "Visa",
        },
        CountrySeed {
            code: "CH",
            name: "Schweiz",
            flag: "🇨🇭",
            language: "de",
            alternates: &["fr", "en"],
            currency: "CHF",
            account_format: "CHXX XXXX XXXX XXXX XXXX X",
            rails: &["SIC", "SEPA"],
            apps: &["TWINT"],
            regulator: "FINMA",
            card_network: "Mastercard",
        },
        CountrySeed {
            code: "CA",
            name: "Canada",
            flag: "🇨🇦",
            language: "en",
            alternates: &["fr"],
            currency: "CAD",
            account_format: "XXXXX-XXX XXXXXXX",
            rails: &["Interac e-Transfer", "EFT", "Lynx"],
            apps: &["Interac"],
            regulator: "OSFI",
            card_network: "Interac",
        },
        CountrySeed {
            code: "MA",
            name: "Maroc",
            flag: "🇲🇦",
            language: "fr",
            alternates: &["en"],
            currency: "MAD",
            account_format: "XXX XXX XXXXXXXXXXXXXXXX XX",
            rails: &["SIMT", "Virement instantané"],
            apps: &["CIH Pay", "Barid Cash"],
            regulator: "Bank Al-Maghrib",
            card_network: "CMI",
        },
        CountrySeed {
            code: "SN",
            name: "Sénégal",
            flag: "🇸🇳",
            language: "fr",
            alternates: &["en"],
            currency: "XOF",
            account_format: "SNXX XXXXX XXXXX XXXXXXXXXXXX XX",
            rails: &["STAR-UEMOA", "SICA-UEMOA"],
            apps: &["Wave", "Orange Money"],
            regulator: "BCEAO",
            card_network: "GIM-UEMOA",
        },
    ];

    seeds.into_iter().map(CountryProfile::from).collect()
}
