//! Collaborator traits for locale sessions.

use crate::errors::Result;

/// Key-value persistence for session preferences.
///
/// A missing key is a normal state (first use) and is reported as `Ok(None)`.
pub trait LocaleStoreTrait: Send + Sync {
    /// Get a single value by key.
    fn get_value(&self, key: &str) -> Result<Option<String>>;

    /// Insert or replace a single value.
    fn set_value(&self, key: &str, value: &str) -> Result<()>;
}

/// Best-guess language of the runtime environment, consulted on first use only.
pub trait LanguageDetectorTrait: Send + Sync {
    fn detect_language(&self) -> Option<String>;
}
