mod cli;
mod commands;
mod config;
mod main_lib;

use clap::Parser;

use cli::Cli;
use config::Config;
use main_lib::{build_session, init_tracing};

fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    init_tracing();
    let cli = Cli::parse();

    let mut session = build_session(&config, cli.language_hint.as_deref())?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    commands::run(cli.command, &mut session, &mut out)
}
