use std::collections::HashMap;
use std::sync::RwLock;

use super::locale_traits::LocaleStoreTrait;
use crate::errors::{DatabaseError, Error, Result};

/// Process-local store, for tests and sessions that need no durability.
#[derive(Debug, Default)]
pub struct InMemoryLocaleStore {
    values: RwLock<HashMap<String, String>>,
}

impl InMemoryLocaleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seeded store, as if a previous visit had saved `value` under `key`.
    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        if let Ok(mut values) = store.values.write() {
            values.insert(key.to_string(), value.to_string());
        }
        store
    }
}

fn poisoned<T>(err: std::sync::PoisonError<T>) -> Error {
    Error::Database(DatabaseError::Internal(err.to_string()))
}

impl LocaleStoreTrait for InMemoryLocaleStore {
    fn get_value(&self, key: &str) -> Result<Option<String>> {
        let values = self.values.read().map_err(poisoned)?;
        Ok(values.get(key).cloned())
    }

    fn set_value(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self.values.write().map_err(poisoned)?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_and_set() {
        let store = InMemoryLocaleStore::new();
        assert_eq!(store.get_value("k").unwrap(), None);
        store.set_value("k", "v1").unwrap();
        store.set_value("k", "v2").unwrap();
        assert_eq!(store.get_value("k").unwrap(), Some("v2".to_string()));
    }

    #[test]
    fn test_with_value() {
        let store = InMemoryLocaleStore::with_value("k", "v");
        assert_eq!(store.get_value("k").unwrap(), Some("v".to_string()));
    }
}
