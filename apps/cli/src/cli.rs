use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

#[derive(Parser, Debug)]
#[command(name = "bankdemo", version, about = "Multi-country money display and locale preferences")]
pub struct Cli {
    /// Language used on first run instead of the system locale
    #[arg(long, global = true)]
    pub language_hint: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the current country, language and display currency
    Show,
    /// Format an amount stored in CURRENCY (default: the country's currency)
    Format {
        #[arg(allow_hyphen_values = true)]
        amount: Decimal,
        #[arg(long)]
        currency: Option<String>,
        /// Prefix with + or -
        #[arg(long)]
        signed: bool,
    },
    /// Convert an amount between two currencies with the static rates
    Convert {
        #[arg(allow_hyphen_values = true)]
        amount: Decimal,
        from: String,
        to: String,
    },
    /// Switch country (resets the display currency to the country's one)
    Country {
        code: String,
        #[arg(long)]
        language: Option<String>,
    },
    /// Switch language; unsupported languages are ignored
    Language { language: String },
    /// Show every amount in CODE, or in its own currency with --clear
    Currency {
        #[arg(required_unless_present = "clear")]
        code: Option<String>,
        #[arg(long, conflicts_with = "code")]
        clear: bool,
    },
    /// Translate a dictionary key, e.g. `translate dashboard.greeting --var name=Ada`
    Translate {
        key: String,
        #[arg(long = "var", value_parser = parse_substitution)]
        vars: Vec<(String, String)>,
    },
    /// List supported countries
    Countries,
    /// List supported currencies and their rate to the base currency
    Currencies,
    /// Mark onboarding as completed
    Onboarded,
}

fn parse_substitution(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected name=value, got '{}'", raw)),
    }
}
