pub mod cli;
pub mod commands;
pub mod core;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::core::error::LauncherResult;
use crate::core::install::InstallReport;
use crate::core::state::AppState;

/// Install the global `tracing` subscriber. `RUST_LOG` overrides the default
/// filter.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,mcm_lib=debug")),
        )
        .init();
}

/// Entry point for the `mcm` binary.
///
/// `--help`, `--version` and argument errors are handled by clap before
/// anything else runs.
pub async fn run() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    match execute(&cli).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("Run failed");
            eprintln!("mcm: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn execute(cli: &Cli) -> LauncherResult<InstallReport> {
    let state = AppState::new(cli.game_paths()?)?;
    commands::install_recipe(&state, &cli.recipe).await
}
