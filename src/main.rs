use std::fs::File;
use std::path::{Path, PathBuf};

use clap::Parser;
use grid_snake::app;
use grid_snake::config::default_grid;
use grid_snake::error::AppError;
use grid_snake::game::GameState;
use grid_snake::terminal_runtime::{TerminalSession, install_panic_hook};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Seed the food placement for a reproducible game.
    #[arg(long)]
    seed: Option<u64>,

    /// Append logs to this file (filtered by RUST_LOG, default `info`).
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_file_logger(path)?;
    }

    let grid = default_grid()?;
    let state = match cli.seed {
        Some(seed) => GameState::new_with_seed(grid, seed),
        None => GameState::new(grid),
    };
    log::info!(
        "starting on a {}x{} grid (seed {:?})",
        grid.width,
        grid.height,
        cli.seed
    );

    install_panic_hook();

    let mut session = TerminalSession::enter()?;
    app::run(session.terminal_mut(), state)?;

    Ok(())
}

// The terminal owns stdout/stderr while the game runs, so logs only go to a file.
fn init_file_logger(path: &Path) -> Result<(), AppError> {
    let file = File::options().create(true).append(true).open(path)?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()?;

    Ok(())
}
