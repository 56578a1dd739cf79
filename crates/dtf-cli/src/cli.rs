use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "dtf")]
#[command(about = "Publish hard tasks to the deadline task bot")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Endpoint base URL (overrides endpoint.base_url from config)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Print the submission status as JSON
    #[arg(long, global = true)]
    pub json: bool,
}
