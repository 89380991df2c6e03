//! Newslens CLI - identify Indian companies impacted by a news page.

use clap::Parser;
use newslens_cli::commands;
use newslens_cli::repl;
use newslens_cli::{Cli, CliError, Command, Config, Formatter};
use newslens_domain::ApiKey;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> newslens_cli::Result<()> {
    let cli = Cli::parse();

    let config = Config::load()?;

    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    let api_key = cli.api_key.map(ApiKey::new);

    match cli.command {
        None | Some(Command::Repl) => {
            repl::run_repl(&config, api_key, &formatter).await?;
        }
        Some(Command::Analyze(args)) => {
            let key = api_key.ok_or(CliError::MissingApiKey)?;
            commands::execute_analyze(args, &config, key, &formatter).await?;
        }
        Some(Command::CheckKey) => {
            let key = api_key.ok_or(CliError::MissingApiKey)?;
            commands::execute_check_key(&config, key, &formatter).await?;
        }
    }

    Ok(())
}
