//! Binary entry point for gisty.

use clap::{CommandFactory, Parser};
use gisty::cli::Cli;
use gisty::config::GistConfig;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let Some(action) = cli.action() else {
        Cli::command().print_help().ok();
        return ExitCode::FAILURE;
    };

    let config = GistConfig::from_env();

    match cli.run(action, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_user_error() => {
            eprintln!("{}", e.message());
            ExitCode::FAILURE
        }
        Err(e) => {
            // Transport, decode, and editor failures are terminal for the
            // invocation; nothing is retried.
            error!(error = %e, "operation failed");
            ExitCode::FAILURE
        }
    }
}
