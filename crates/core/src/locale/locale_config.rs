use crate::constants::{DEFAULT_COUNTRY_CODE, LOCALE_STORAGE_KEY};
use crate::currencies::RateTable;
use crate::errors::{Error, Result};
use crate::i18n::PlaceholderMode;

/// Engine-level settings for a [`LocaleSession`](super::LocaleSession).
///
/// The default language is owned by the
/// [`TranslationCatalog`](crate::i18n::TranslationCatalog) instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub default_country_code: String,
    pub storage_key: String,
    pub placeholder_mode: PlaceholderMode,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            default_country_code: DEFAULT_COUNTRY_CODE.to_string(),
            storage_key: LOCALE_STORAGE_KEY.to_string(),
            placeholder_mode: PlaceholderMode::default(),
        }
    }
}

impl SessionConfig {
    pub fn validate(&self, rate_table: &RateTable) -> Result<()> {
        if !rate_table.contains_country(&self.default_country_code) {
            return Err(Error::InvalidConfigValue(format!(
                "default country '{}' is not in the rate table",
                self.default_country_code
            )));
        }
        if self.storage_key.trim().is_empty() {
            return Err(Error::InvalidConfigValue(
                "storage key must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
