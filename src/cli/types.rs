//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "confluent-actions")]
#[command(about = "Inspect and run the Confluent scaffolder actions", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Load configuration from this file instead of .confluent-actions/
    #[arg(short, long, global = true, env = "CONFLUENT_ACTIONS_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List registered actions
    List,

    /// Show an action's description and input/output schemas
    Describe {
        /// Action id, e.g. confluent:credentials:get
        id: String,
    },

    /// Run an action against the process environment
    Run(RunArgs),
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Action id, e.g. confluent:credentials:get
    pub id: String,

    /// Action input as a JSON object
    #[arg(short, long, default_value = "{}")]
    pub input: String,

    /// Print output values unmasked
    #[arg(long)]
    pub reveal: bool,
}
