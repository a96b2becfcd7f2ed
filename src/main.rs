//! Terminal Minesweeper runner (default binary).
//!
//! Sets up config and logging, builds a game, and runs the session loop in
//! the terminal. Click a cell to open it; `r` starts over, `q` quits.

use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{error, info};

use tui_mines::config::AppConfig;
use tui_mines::core::{Game, GameConfig};
use tui_mines::frontend::TerminalFrontend;
use tui_mines::logging;
use tui_mines::session::run_session;
use tui_mines::types::{END_MESSAGE_DELAY_MS, FRAME_MS};

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    logging::init(&config)?;

    let seed = config.resolve_seed();
    let mut game = Game::new(GameConfig::default(), seed).context("invalid game configuration")?;

    let mut frontend = TerminalFrontend::new(
        Duration::from_millis(FRAME_MS as u64),
        Duration::from_millis(END_MESSAGE_DELAY_MS),
    );
    frontend.enter()?;

    let result = run_session(&mut game, &mut frontend);

    // Always try to restore terminal state.
    if let Err(err) = frontend.exit() {
        error!(%err, "failed to restore terminal");
    }

    let end = result?;
    info!(?end, seed, "session finished");
    Ok(())
}
