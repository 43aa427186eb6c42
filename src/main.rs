//! confluent-actions CLI entry point.

use clap::Parser;

use confluent_actions::cli::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    if let Err(err) = confluent_actions::cli::run(cli).await {
        confluent_actions::cli::handle_error(err, json);
    }
}
