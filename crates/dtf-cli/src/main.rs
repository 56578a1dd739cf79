//! dtf - deadline task form
//!
//! Publishes hard tasks to the deadline task bot from the command line.
//!
//! # Examples
//!
//! ```bash
//! # Save the authorization token once
//! dtf token set <TOKEN>
//!
//! # Publish a task
//! dtf submit --title "Лендинг" --description "Сверстать по макету" \
//!     --tag дизайн --tag фигма --budget-from 5000 --budget-to 8000 --deadline-days 5
//! ```

use dtf_cli::{
    App, CliError, CliResult, Client, Outcome, cli::Cli, commands::Commands, logger, render,
    token_commands::TokenCommands,
};
use dtf_config::Config;
use dtf_core::{FileStore, TaskForm};

use std::io::IsTerminal;
use std::process::ExitCode;

use clap::Parser;
use log::info;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(outcome) => {
            if let Some(output) = outcome.output {
                println!("{output}");
            }
            if outcome.success {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliResult<Outcome> {
    let mut config = Config::load()?;
    if let Some(base_url) = cli.base_url {
        config.endpoint.base_url = base_url;
    }
    config.validate()?;

    let log_file = config.log_file_path()?;
    if let Some(dir) = log_file.as_ref().and_then(|p| p.parent()) {
        std::fs::create_dir_all(dir).map_err(|e| CliError::io(dir.to_path_buf(), e))?;
    }

    // Initialize logger (before any other logging)
    let colored = config.logging.colored && std::io::stderr().is_terminal();
    logger::initialize(config.logging.level, log_file, colored)?;

    info!("Starting dtf v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let store = FileStore::new(config.storage_path()?);
    let form = TaskForm::initialize(store)?;
    let mut app = App::new(form, cli.json);

    let outcome = match cli.command {
        Commands::Token { action } => match action {
            TokenCommands::Set { token } => app.set_token(&token)?,
            TokenCommands::Show => app.show_token(),
        },
        Commands::Submit(args) => {
            let client = Client::from_endpoint(config.endpoint.clone());
            app.submit(&args, &client).await?
        }
    };

    for toast in app.drain_toasts() {
        eprintln!("{}", render::toast(&toast));
    }

    Ok(outcome)
}
