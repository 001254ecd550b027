//! Locale module - per-user country/language/currency session and its collaborators.

mod language_detector;
mod locale_config;
mod locale_model;
mod locale_session;
mod locale_traits;
mod memory_store;

pub use language_detector::{primary_language, StaticLanguageDetector, SystemLanguageDetector};
pub use locale_config::SessionConfig;
pub use locale_model::LocalePreferences;
pub use locale_session::LocaleSession;
pub use locale_traits::{LanguageDetectorTrait, LocaleStoreTrait};
pub use memory_store::InMemoryLocaleStore;
