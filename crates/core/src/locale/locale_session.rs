use std::sync::Arc;

use log::{debug, warn};
use rust_decimal::Decimal;

use super::locale_config::SessionConfig;
use super::locale_model::LocalePreferences;
use super::locale_traits::{LanguageDetectorTrait, LocaleStoreTrait};
use crate::currencies::{normalize_code, CountryProfile};
use crate::errors::Result;
use crate::fx::CurrencyConverter;
use crate::i18n::{Translation, TranslationCatalog};

/// One user's country, language and display-currency selection, bound to the
/// converter and the translation catalog.
///
/// A session only exists once its preferences are loaded (see [`LocaleSession::load`]),
/// so every accessor works on ready state. It is owned by a single user
/// session and is not meant to be shared between requests.
pub struct LocaleSession {
    config: SessionConfig,
    converter: CurrencyConverter,
    catalog: Arc<TranslationCatalog>,
    store: Arc<dyn LocaleStoreTrait>,
    country: CountryProfile,
    language: String,
    currency_override: Option<String>,
    needs_onboarding: bool,
}

impl LocaleSession {
    /// Loads the persisted selection, or starts a first-use session.
    ///
    /// Persisted values are adopted as stored, except an unknown country or an
    /// unsupported language, which fall back to the defaults. On first use the
    /// detected language is kept when supported, the default country is
    /// selected and onboarding is flagged.
    pub fn load(
        config: SessionConfig,
        converter: CurrencyConverter,
        catalog: Arc<TranslationCatalog>,
        store: Arc<dyn LocaleStoreTrait>,
        detector: &dyn LanguageDetectorTrait,
    ) -> Result<Self> {
        config.validate(converter.rate_table())?;
        let default_country = converter
            .rate_table()
            .lookup_country(&config.default_country_code)?
            .clone();

        let persisted = match store.get_value(&config.storage_key)? {
            Some(raw) => match serde_json::from_str::<LocalePreferences>(&raw) {
                Ok(preferences) => Some(preferences),
                Err(e) => {
                    warn!(
                        "Ignoring malformed locale preferences under '{}': {}",
                        config.storage_key, e
                    );
                    None
                }
            },
            None => None,
        };

        let mut session = Self {
            country: default_country,
            language: catalog.default_language().to_string(),
            currency_override: None,
            needs_onboarding: false,
            config,
            converter,
            catalog,
            store,
        };

        match persisted {
            Some(preferences) => session.adopt(preferences),
            None => {
                if let Some(detected) = detector.detect_language() {
                    if session.catalog.is_supported(&detected) {
                        session.language = detected.to_ascii_lowercase();
                    } else {
                        debug!(
                            "Detected language '{}' is not supported, using '{}'",
                            detected, session.language
                        );
                    }
                }
                session.needs_onboarding = true;
                debug!(
                    "First use: country {}, language {}, onboarding pending",
                    session.country.code, session.language
                );
            }
        }

        Ok(session)
    }

    fn adopt(&mut self, preferences: LocalePreferences) {
        match self
            .converter
            .rate_table()
            .lookup_country(&preferences.country_code)
        {
            Ok(country) => self.country = country.clone(),
            Err(_) => warn!(
                "Persisted country '{}' is unknown, using '{}'",
                preferences.country_code, self.country.code
            ),
        }

        if self.catalog.is_supported(&preferences.language) {
            self.language = preferences.language.trim().to_ascii_lowercase();
        } else {
            warn!(
                "Persisted language '{}' is not supported, using '{}'",
                preferences.language, self.language
            );
        }

        self.currency_override = preferences
            .global_currency_override
            .map(|code| normalize_code(&code));
        debug!(
            "Loaded locale preferences: country {}, language {}, currency override {:?}",
            self.country.code, self.language, self.currency_override
        );
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn converter(&self) -> &CurrencyConverter {
        &self.converter
    }

    pub fn catalog(&self) -> &TranslationCatalog {
        &self.catalog
    }

    pub fn country(&self) -> &CountryProfile {
        &self.country
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn currency_override(&self) -> Option<&str> {
        self.currency_override.as_deref()
    }

    /// True on a first-use session until a country is chosen or onboarding is completed.
    pub fn needs_onboarding(&self) -> bool {
        self.needs_onboarding
    }

    pub fn preferences(&self) -> LocalePreferences {
        LocalePreferences {
            country_code: self.country.code.clone(),
            language: self.language.clone(),
            global_currency_override: self.currency_override.clone(),
        }
    }

    fn source_currency(&self, native_currency: Option<&str>) -> String {
        native_currency
            .map(normalize_code)
            .unwrap_or_else(|| self.country.default_currency_code.clone())
    }

    /// Currency amounts are shown in: the global override, else the native currency.
    pub fn display_currency(&self, native_currency: Option<&str>) -> String {
        match &self.currency_override {
            Some(code) => code.clone(),
            None => self.source_currency(native_currency),
        }
    }

    /// Converts an amount stored in `native_currency` (default: the country's
    /// currency) into the display currency and formats it.
    pub fn amount_to_display(&self, amount: Decimal, native_currency: Option<&str>) -> Result<String> {
        let source = self.source_currency(native_currency);
        let target = self.display_currency(native_currency);
        let converted = self.converter.convert(amount, &source, &target)?;
        self.converter.format(converted, &target)
    }

    /// Signed variant of [`amount_to_display`](Self::amount_to_display).
    pub fn amount_to_display_signed(
        &self,
        amount: Decimal,
        native_currency: Option<&str>,
    ) -> Result<String> {
        let source = self.source_currency(native_currency);
        let target = self.display_currency(native_currency);
        let converted = self.converter.convert(amount, &source, &target)?;
        self.converter.format_signed(converted, &target)
    }

    pub fn current_symbol(&self, native_currency: Option<&str>) -> String {
        self.converter
            .symbol_of(&self.display_currency(native_currency))
    }

    /// Translation in the session language; never fails.
    pub fn translate(&self, key: &str, substitutions: &[(&str, &str)]) -> String {
        self.translate_detailed(key, substitutions).text
    }

    /// Like [`translate`](Self::translate) but also reports which fallback was used.
    pub fn translate_detailed(&self, key: &str, substitutions: &[(&str, &str)]) -> Translation {
        self.catalog.translate(
            &self.language,
            key,
            substitutions,
            self.config.placeholder_mode,
        )
    }

    /// Switches market. The language becomes `language_override` (when supported)
    /// or the country's default, and the currency override is reset to the
    /// country's currency. Unknown codes fail and leave the session untouched.
    pub fn change_country(&mut self, country_code: &str, language_override: Option<&str>) -> Result<()> {
        let country = self
            .converter
            .rate_table()
            .lookup_country(country_code)?
            .clone();

        let language = match language_override {
            Some(language) if self.catalog.is_supported(language) => {
                language.trim().to_ascii_lowercase()
            }
            Some(language) => {
                warn!(
                    "Language override '{}' is not supported, using '{}' for {}",
                    language, country.default_language, country.code
                );
                country.default_language.clone()
            }
            None => country.default_language.clone(),
        };

        let preferences = LocalePreferences {
            country_code: country.code.clone(),
            language,
            global_currency_override: Some(country.default_currency_code.clone()),
        };
        self.persist(&preferences)?;

        debug!("Country changed to {}", country.code);
        self.country = country;
        self.language = preferences.language;
        self.currency_override = preferences.global_currency_override;
        self.needs_onboarding = false;
        Ok(())
    }

    /// Switches language. Unsupported languages are ignored.
    pub fn change_language(&mut self, language: &str) -> Result<()> {
        if !self.catalog.is_supported(language) {
            warn!("Ignoring unsupported language '{}'", language);
            return Ok(());
        }

        let preferences = LocalePreferences {
            language: language.trim().to_ascii_lowercase(),
            ..self.preferences()
        };
        self.persist(&preferences)?;

        debug!("Language changed to {}", preferences.language);
        self.language = preferences.language;
        Ok(())
    }

    /// Sets the global display currency. The code is not checked here: an
    /// unknown code surfaces as `UnknownCurrency` when amounts are formatted.
    pub fn change_currency(&mut self, currency_code: &str) -> Result<()> {
        let preferences = LocalePreferences {
            global_currency_override: Some(normalize_code(currency_code)),
            ..self.preferences()
        };
        self.persist(&preferences)?;

        debug!(
            "Currency override changed to {:?}",
            preferences.global_currency_override
        );
        self.currency_override = preferences.global_currency_override;
        Ok(())
    }

    /// Drops the global override so amounts show in their own currency.
    pub fn clear_currency_override(&mut self) -> Result<()> {
        let preferences = LocalePreferences {
            global_currency_override: None,
            ..self.preferences()
        };
        self.persist(&preferences)?;

        debug!("Currency override cleared");
        self.currency_override = None;
        Ok(())
    }

    /// Marks onboarding as done and saves the current selection.
    pub fn complete_onboarding(&mut self) -> Result<()> {
        self.persist(&self.preferences())?;
        self.needs_onboarding = false;
        Ok(())
    }

    fn persist(&self, preferences: &LocalePreferences) -> Result<()> {
        let json = serde_json::to_string(preferences)?;
        self.store.set_value(&self.config.storage_key, &json)
    }
}
