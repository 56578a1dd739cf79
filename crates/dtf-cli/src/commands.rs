use crate::{submit_args::SubmitArgs, token_commands::TokenCommands};

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Saved authorization token
    Token {
        #[command(subcommand)]
        action: TokenCommands,
    },

    /// Fill in the task form and publish it
    Submit(SubmitArgs),
}
