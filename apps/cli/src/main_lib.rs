use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;
use bankdemo_core::locale::{
    LanguageDetectorTrait, LocaleStoreTrait, StaticLanguageDetector, SystemLanguageDetector,
};
use bankdemo_core::{CurrencyConverter, LocaleSession, RateTable, TranslationCatalog};
use bankdemo_storage_sqlite::{db, SettingsRepository};

/// Logs go to stderr so command output stays pipeable.
pub fn init_tracing() {
    let log_format = std::env::var("BANKDEMO_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

/// Wires the rate table, catalog and SQLite store into a loaded session.
pub fn build_session(config: &Config, language_hint: Option<&str>) -> anyhow::Result<LocaleSession> {
    let pool = db::init(&config.db_path)?;
    tracing::debug!("Database path in use: {}", config.db_path);
    let store: Arc<dyn LocaleStoreTrait> = Arc::new(SettingsRepository::new(pool));

    let detector: Box<dyn LanguageDetectorTrait> = match language_hint {
        Some(hint) => Box::new(StaticLanguageDetector::new(Some(hint))),
        None => Box::new(SystemLanguageDetector),
    };

    build_session_with_store(config, store, detector.as_ref())
}

pub fn build_session_with_store(
    config: &Config,
    store: Arc<dyn LocaleStoreTrait>,
    detector: &dyn LanguageDetectorTrait,
) -> anyhow::Result<LocaleSession> {
    let rate_table = Arc::new(RateTable::builtin()?);
    let converter = CurrencyConverter::new(rate_table);
    let catalog = Arc::new(TranslationCatalog::bundled(&config.default_language)?);

    let session = LocaleSession::load(config.session_config(), converter, catalog, store, detector)?;
    tracing::info!(
        "Locale session ready: country {}, language {}",
        session.country().code,
        session.language()
    );
    Ok(session)
}
