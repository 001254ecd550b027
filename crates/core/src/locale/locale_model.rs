use serde::{Deserialize, Serialize};

/// The persisted triple. Serialized as
/// `{"countryCode": "FR", "language": "fr", "globalCurrencyOverride": null}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LocalePreferences {
    pub country_code: String,
    pub language: String,
    #[serde(default)]
    pub global_currency_override: Option<String>,
}
