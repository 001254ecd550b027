use serde::{Deserialize, Serialize};

/// Which branch of the formatter produced a display string.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FormatPath {
    /// Rendered with the currency's locale conventions
    Localized,
    /// Locale data was unavailable; rendered as `1234.50 €`
    FixedPointFallback,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FormattedAmount {
    pub text: String,
    pub path: FormatPath,
}
