//! dtf-cli library
//!
//! The `dtf` front-end: argument types, the HTTP client that delivers task
//! queries, the application wrapper around the task form, and output
//! rendering.

pub mod app;
pub mod cli;
pub mod client;
pub mod commands;
pub mod error;
pub mod logger;
pub mod render;
pub mod submit_args;
pub mod token_commands;

#[cfg(test)]
mod tests;

pub use app::{App, Outcome};
pub use client::{CliClientResult, Client, ClientError};
pub use error::{CliError, Result as CliResult};
