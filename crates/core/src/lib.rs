//! Banking demo core - currency tables, money formatting and locale sessions.
//!
//! This crate owns every piece of the multi-country display logic and nothing
//! else. It is storage-agnostic: the persistence collaborator is the
//! [`locale::LocaleStoreTrait`], implemented by `storage-sqlite` and by the
//! in-memory store shipped here.

pub mod constants;
pub mod currencies;
pub mod errors;
pub mod fx;
pub mod i18n;
pub mod locale;

// Re-export the types most callers need
pub use currencies::{BankingMetadata, CountryProfile, CurrencyDescriptor, RateTable};
pub use fx::{CurrencyConverter, FormatPath, FormattedAmount};
pub use i18n::{PlaceholderMode, Translation, TranslationCatalog, TranslationSource};
pub use locale::{LocalePreferences, LocaleSession, SessionConfig};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
