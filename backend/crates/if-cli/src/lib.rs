//! if-cli library
//!
//! Command parsing, execution against a session, and process wiring for the
//! `ideaforge` binary.

pub mod app;
pub mod cli;
pub mod commands;
pub mod console;
pub mod error;
pub mod logger;

#[cfg(test)]
mod tests;

pub use app::{Outcome, execute};
pub use cli::Cli;
pub use commands::Commands;
pub use console::{ConsoleNavigator, ConsoleNotifier};
pub use error::{CliError, Result as CliResult};
