use bankdemo_core::constants::{DEFAULT_COUNTRY_CODE, DEFAULT_LANGUAGE, LOCALE_STORAGE_KEY};
use bankdemo_core::{PlaceholderMode, SessionConfig};

pub struct Config {
    pub db_path: String,
    pub default_country: String,
    pub default_language: String,
    pub storage_key: String,
    pub replace_all_placeholders: bool,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let db_path =
            std::env::var("BANKDEMO_DB_PATH").unwrap_or_else(|_| "./db/bankdemo.db".into());
        let default_country = std::env::var("BANKDEMO_DEFAULT_COUNTRY")
            .unwrap_or_else(|_| DEFAULT_COUNTRY_CODE.into());
        let default_language = std::env::var("BANKDEMO_DEFAULT_LANGUAGE")
            .unwrap_or_else(|_| DEFAULT_LANGUAGE.into());
        let storage_key =
            std::env::var("BANKDEMO_STORAGE_KEY").unwrap_or_else(|_| LOCALE_STORAGE_KEY.into());
        let replace_all_placeholders = std::env::var("BANKDEMO_REPLACE_ALL_PLACEHOLDERS")
            .map(|value| parse_flag(&value))
            .unwrap_or(false);
        Self {
            db_path,
            default_country,
            default_language,
            storage_key,
            replace_all_placeholders,
        }
    }

    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            default_country_code: self.default_country.clone(),
            storage_key: self.storage_key.clone(),
            placeholder_mode: if self.replace_all_placeholders {
                PlaceholderMode::AllOccurrences
            } else {
                PlaceholderMode::FirstOccurrence
            },
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
