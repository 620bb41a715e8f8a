//! Two-player terminal Tetris.
//!
//! Player 1 plays with `a`/`d`/`w`/`s`, player 2 with `j`/`l`/`i`/`k`, and
//! `q` quits. Clearing two or more rows at once pushes garbage rows onto the
//! opponent's board; the first board to top out loses.
//!
//! Set `DUEL_TETRIS_LOG=<file>` to write logs (filtered by `RUST_LOG`).

use std::fs::File;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use duel_tetris::engine::{EngineConfig, Game};
use duel_tetris::input::TerminalKeys;
use duel_tetris::term::{enter_terminal, leave_terminal, TerminalScreen};

fn main() -> Result<()> {
    init_logging()?;

    let config = EngineConfig::from_env();
    enter_terminal()?;
    let result = Game::new(config).run(TerminalKeys::new(), TerminalScreen::new());

    // Always try to restore terminal state.
    let restored = leave_terminal();
    let outcome = result?;
    restored?;
    info!(?outcome, "exiting");
    Ok(())
}

/// The terminal belongs to the renderer, so logs only go to a file.
fn init_logging() -> Result<()> {
    let Some(path) = std::env::var_os("DUEL_TETRIS_LOG") else {
        return Ok(());
    };
    let file = File::create(&path)
        .with_context(|| format!("failed to create log file {}", path.to_string_lossy()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_thread_names(true)
        .init();
    Ok(())
}
