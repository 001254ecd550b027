use diesel::prelude::*;
use std::sync::Arc;

use super::model::AppSettingDB;
use crate::db::{get_connection, DbPool};
use crate::errors::IntoCore;
use crate::schema::app_settings::dsl::*;
use bankdemo_core::errors::Result;
use bankdemo_core::locale::LocaleStoreTrait;

/// Key-value settings stored in the `app_settings` table.
pub struct SettingsRepository {
    pool: Arc<DbPool>,
}

impl SettingsRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        SettingsRepository { pool }
    }
}

impl LocaleStoreTrait for SettingsRepository {
    fn get_value(&self, setting_key_param: &str) -> Result<Option<String>> {
        let mut conn = get_connection(&self.pool)?;
        app_settings
            .filter(setting_key.eq(setting_key_param))
            .select(setting_value)
            .first::<String>(&mut conn)
            .optional()
            .into_core()
    }

    fn set_value(&self, setting_key_param: &str, setting_value_param: &str) -> Result<()> {
        let mut conn = get_connection(&self.pool)?;
        diesel::replace_into(app_settings)
            .values(&AppSettingDB {
                setting_key: setting_key_param.to_string(),
                setting_value: setting_value_param.to_string(),
            })
            .execute(&mut conn)
            .into_core()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use tempfile::tempdir;

    #[test]
    fn test_missing_key_is_none() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("app.db");
        let repository = SettingsRepository::new(db::init(&path.to_string_lossy()).unwrap());

        assert_eq!(repository.get_value("bankdemo.locale").unwrap(), None);
    }

    #[test]
    fn test_set_value_upserts() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("app.db");
        let repository = SettingsRepository::new(db::init(&path.to_string_lossy()).unwrap());

        repository.set_value("theme", "light").unwrap();
        repository.set_value("theme", "dark").unwrap();
        repository.set_value("font", "mono").unwrap();

        assert_eq!(repository.get_value("theme").unwrap(), Some("dark".to_string()));
        assert_eq!(repository.get_value("font").unwrap(), Some("mono".to_string()));
    }

    #[test]
    fn test_values_survive_reopening() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("app.db").to_string_lossy().to_string();

        SettingsRepository::new(db::init(&path).unwrap())
            .set_value("k", "v")
            .unwrap();

        let reopened = SettingsRepository::new(db::init(&path).unwrap());
        assert_eq!(reopened.get_value("k").unwrap(), Some("v".to_string()));
    }
}
