//! Session loop.
//!
//! Drives one game: render, poll a frame's worth of input, apply it, and stop
//! on quit or when the game ends. Everything that touches the outside world
//! sits behind [`Frontend`], so the loop runs the same against the terminal or
//! a scripted frontend in tests.

use anyhow::Result;
use tracing::{debug, info};

use crate::core::{Game, GameSnapshot};
use crate::types::{InputEvent, Phase};

/// The window the game is shown in.
pub trait Frontend {
    /// Draw the current state. Called once per frame.
    fn render(&mut self, snap: &GameSnapshot) -> Result<()>;

    /// Append this frame's input events to `events`.
    ///
    /// Frame pacing lives here: a real frontend waits out the rest of the
    /// frame interval while collecting input.
    fn poll_input(&mut self, events: &mut Vec<InputEvent>) -> Result<()>;

    /// Show the end-of-game message over the last rendered frame and hold it
    /// for the end-message delay.
    fn show_end_message(&mut self, won: bool) -> Result<()>;
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Quit,
    Won,
    Lost,
}

/// Run `game` until the player quits or the game is decided.
///
/// On a decision the fully updated board is rendered once more and the end
/// message is shown exactly once. Events after a `Quit`, or after the click
/// that decided the game, are dropped.
pub fn run_session<F: Frontend + ?Sized>(game: &mut Game, frontend: &mut F) -> Result<SessionEnd> {
    let mut snap = GameSnapshot::default();
    let mut events = Vec::new();

    loop {
        game.snapshot_into(&mut snap);
        frontend.render(&snap)?;

        events.clear();
        frontend.poll_input(&mut events)?;

        let mut quit = false;
        for event in events.drain(..) {
            match event {
                InputEvent::Quit => {
                    quit = true;
                    break;
                }
                InputEvent::ClickAt { x, y } => {
                    let outcome = game.discover(x, y);
                    debug!(x, y, ?outcome, "click");
                }
                InputEvent::Restart => game.restart()?,
            }
            if game.phase().is_finished() {
                break;
            }
        }

        if let Some(phase) = game.take_finished() {
            game.snapshot_into(&mut snap);
            frontend.render(&snap)?;
            let won = phase == Phase::Won;
            frontend.show_end_message(won)?;
            return Ok(if won { SessionEnd::Won } else { SessionEnd::Lost });
        }

        if quit {
            info!(revealed = game.revealed_count(), "quit");
            return Ok(SessionEnd::Quit);
        }
    }
}
