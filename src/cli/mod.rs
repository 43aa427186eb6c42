//! Command-line interface.
//!
//! A small operator tool for inspecting and running the registered actions
//! locally, outside any host.

pub mod commands;
pub mod output;
pub mod types;

use anyhow::Result;

use crate::domain::models::config::Config;
use crate::infrastructure::config::ConfigLoader;
use crate::infrastructure::logging::{LogConfig, LoggerImpl};

pub use types::{Cli, Commands, RunArgs};

/// Load configuration, set up logging and dispatch the parsed command.
pub async fn run(cli: Cli) -> Result<()> {
    let config: Config = match cli.config {
        Some(ref path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load()?,
    };

    let _logger = LoggerImpl::init(&LogConfig::from_settings(&config.logging)?)?;

    let registry = commands::build_registry(&config)?;

    match cli.command {
        Commands::List => commands::action::list(&registry, cli.json),
        Commands::Describe { id } => commands::action::describe(&registry, &id, cli.json),
        Commands::Run(args) => commands::action::run(&registry, args, cli.json).await,
    }
}

/// Render a command failure as `handle_error` reports it.
pub fn format_error(err: &anyhow::Error, json_mode: bool) -> String {
    if json_mode {
        let body = serde_json::json!({ "error": format!("{err:#}") });
        serde_json::to_string_pretty(&body).unwrap_or_default()
    } else {
        format!("Error: {err:#}")
    }
}

/// Report a command failure on stderr and exit with status 1.
///
/// Stdout carries command output only, so the JSON error body goes to
/// stderr as well.
pub fn handle_error(err: anyhow::Error, json_mode: bool) -> ! {
    eprintln!("{}", format_error(&err, json_mode));
    std::process::exit(1)
}
