//! ideaforge - IdeaForge session CLI
//!
//! Signs users in against the user directory, persists the session under the
//! config dir, and answers permission checks.
//!
//! # Examples
//!
//! ```bash
//! ideaforge login --email alex@example.com --password password123
//! ideaforge can approve
//! ideaforge whoami --pretty
//! ideaforge logout
//! ```

use if_auth::{FileStore, SessionManager, SessionOptions, UserDirectory};
use if_cli::{Cli, CliError, CliResult, ConsoleNavigator, ConsoleNotifier, execute, logger};
use if_config::Config;

use std::process::ExitCode;

use clap::Parser;
use log::info;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliResult<ExitCode> {
    let config = Config::load()?;
    config.validate()?;

    let log_file = config.log_file_path()?;
    if let Some(dir) = log_file.as_ref().and_then(|path| path.parent()) {
        std::fs::create_dir_all(dir).map_err(|e| CliError::Io {
            path: dir.display().to_string(),
            source: e,
        })?;
    }

    logger::initialize(config.logging.level, log_file, config.logging.colored)?;
    config.log_summary();

    let directory = match config.directory_path()? {
        Some(path) => UserDirectory::from_toml_file(&path)?,
        None => UserDirectory::sample(),
    };
    let store = FileStore::new(config.session_storage_path()?);
    let options = SessionOptions::new(
        config.session.storage_key.clone(),
        config.session.login_delay(),
    );

    let mut session = SessionManager::restore(directory, store, options)?;
    info!("Session state: {}", session.state());

    let outcome = execute(
        cli.command,
        &mut session,
        &ConsoleNotifier,
        &ConsoleNavigator,
    )
    .await?;

    let output = if cli.pretty {
        serde_json::to_string_pretty(&outcome.value)?
    } else {
        serde_json::to_string(&outcome.value)?
    };
    println!("{output}");

    Ok(if outcome.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
