use clap::Subcommand;

#[derive(Subcommand)]
pub enum TokenCommands {
    /// Save the authorization token
    Set {
        /// Token issued by the task bot
        token: String,
    },

    /// Print the saved token (empty line if none)
    Show,
}
