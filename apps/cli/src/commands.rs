use std::io::Write;

use bankdemo_core::LocaleSession;

use crate::cli::Command;

pub fn run(command: Command, session: &mut LocaleSession, out: &mut impl Write) -> anyhow::Result<()> {
    match command {
        Command::Show => show(session, out)?,
        Command::Format {
            amount,
            currency,
            signed,
        } => {
            let text = if signed {
                session.amount_to_display_signed(amount, currency.as_deref())?
            } else {
                session.amount_to_display(amount, currency.as_deref())?
            };
            writeln!(out, "{}", text)?;
        }
        Command::Convert { amount, from, to } => {
            let converter = session.converter();
            let converted = converter.convert(amount, &from, &to)?;
            writeln!(out, "{}", converter.format(converted, &to)?)?;
        }
        Command::Country { code, language } => {
            session.change_country(&code, language.as_deref())?;
            show(session, out)?;
        }
        Command::Language { language } => {
            session.change_language(&language)?;
            writeln!(
                out,
                "{}: {}",
                session.translate("common.language", &[]),
                session.language()
            )?;
        }
        Command::Currency { code, clear } => {
            match code {
                Some(code) if !clear => session.change_currency(&code)?,
                _ => session.clear_currency_override()?,
            }
            write_currency_line(session, out)?;
        }
        Command::Translate { key, vars } => {
            let substitutions: Vec<(&str, &str)> = vars
                .iter()
                .map(|(name, value)| (name.as_str(), value.as_str()))
                .collect();
            writeln!(out, "{}", session.translate(&key, &substitutions))?;
        }
        Command::Countries => {
            for country in session.converter().rate_table().countries() {
                writeln!(
                    out,
                    "{}  {}  {:<16} {:<3} {}",
                    country.code,
                    country.flag_glyph,
                    country.display_name,
                    country.default_language,
                    country.default_currency_code
                )?;
            }
        }
        Command::Currencies => {
            for currency in session.converter().rate_table().currencies() {
                writeln!(
                    out,
                    "{}  {:<4} {:<20} {}",
                    currency.code, currency.symbol, currency.display_name, currency.rate_to_base
                )?;
            }
        }
        Command::Onboarded => {
            session.complete_onboarding()?;
            show(session, out)?;
        }
    }
    Ok(())
}

fn show(session: &LocaleSession, out: &mut impl Write) -> anyhow::Result<()> {
    let country = session.country();
    writeln!(
        out,
        "{}: {} {} ({})",
        session.translate("common.country", &[]),
        country.flag_glyph,
        country.display_name,
        country.code
    )?;
    writeln!(
        out,
        "{}: {}",
        session.translate("common.language", &[]),
        session.language()
    )?;
    write_currency_line(session, out)?;
    if session.needs_onboarding() {
        writeln!(out, "{}", session.translate("onboarding.chooseCountry", &[]))?;
    }
    Ok(())
}

fn write_currency_line(session: &LocaleSession, out: &mut impl Write) -> anyhow::Result<()> {
    let label = session.translate("common.currency", &[]);
    match session.currency_override() {
        Some(code) => {
            let description = session.translate("settings.currencyOverride", &[("currency", code)]);
            writeln!(out, "{}: {} ({})", label, session.current_symbol(None), description)?;
        }
        None => {
            let description = session.translate("settings.nativeCurrency", &[]);
            writeln!(out, "{}: {}", label, description)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rust_decimal_macros::dec;

    use super::*;
    use crate::config::Config;
    use crate::main_lib::build_session_with_store;
    use bankdemo_core::locale::{InMemoryLocaleStore, StaticLanguageDetector};

    fn config() -> Config {
        Config {
            db_path: String::new(),
            default_country: "FR".to_string(),
            default_language: "fr".to_string(),
            storage_key: "bankdemo.locale".to_string(),
            replace_all_placeholders: false,
        }
    }

    fn session(hint: Option<&str>) -> LocaleSession {
        build_session_with_store(
            &config(),
            Arc::new(InMemoryLocaleStore::new()),
            &StaticLanguageDetector::new(hint),
        )
        .unwrap()
    }

    fn run_to_string(command: Command, session: &mut LocaleSession) -> String {
        let mut out = Vec::new();
        run(command, session, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_format_in_country_currency() {
        let mut session = session(None);
        let output = run_to_string(
            Command::Format {
                amount: dec!(1234.5),
                currency: None,
                signed: false,
            },
            &mut session,
        );
        assert_eq!(output, "1\u{202f}234,50\u{a0}€\n");
    }

    #[test]
    fn test_convert_command() {
        let mut session = session(None);
        let output = run_to_string(
            Command::Convert {
                amount: dec!(100),
                from: "EUR".to_string(),
                to: "usd".to_string(),
            },
            &mut session,
        );
        assert_eq!(output, "$108.00\n");
    }

    #[test]
    fn test_country_then_currency_override() {
        let mut session = session(None);
        run_to_string(
            Command::Country {
                code: "GB".to_string(),
                language: None,
            },
            &mut session,
        );
        assert_eq!(session.language(), "en");
        assert!(!session.needs_onboarding());

        let output = run_to_string(
            Command::Format {
                amount: dec!(86),
                currency: None,
                signed: true,
            },
            &mut session,
        );
        assert_eq!(output, "+£86.00\n");

        run_to_string(
            Command::Currency {
                code: Some("USD".to_string()),
                clear: false,
            },
            &mut session,
        );
        let output = run_to_string(
            Command::Format {
                amount: dec!(86),
                currency: None,
                signed: false,
            },
            &mut session,
        );
        assert_eq!(output, "$108.00\n");
    }

    #[test]
    fn test_translate_with_variables() {
        let mut session = session(Some("en"));
        let output = run_to_string(
            Command::Translate {
                key: "dashboard.greeting".to_string(),
                vars: vec![("name".to_string(), "Ada".to_string())],
            },
            &mut session,
        );
        assert_eq!(output, "Hello Ada\n");
    }

    #[test]
    fn test_show_mentions_onboarding_on_first_use() {
        let mut session = session(Some("en"));
        let output = run_to_string(Command::Show, &mut session);
        assert!(output.contains("France (FR)"), "{}", output);
        assert!(output.contains("Choose your country"), "{}", output);

        let output = run_to_string(Command::Onboarded, &mut session);
        assert!(!output.contains("Choose your country"), "{}", output);
    }

    #[test]
    fn test_unknown_country_is_an_error() {
        let mut session = session(None);
        let mut out = Vec::new();
        let result = run(
            Command::Country {
                code: "XX".to_string(),
                language: None,
            },
            &mut session,
            &mut out,
        );
        assert!(result.is_err());
        assert_eq!(session.country().code, "FR");
    }
}
