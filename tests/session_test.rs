//! Session loop driven by a scripted frontend.

use std::collections::VecDeque;

use anyhow::Result;
use tui_mines::core::{CellView, Game, GameConfig, GameSnapshot, Grid};
use tui_mines::session::{run_session, Frontend, SessionEnd};
use tui_mines::types::{Coord, InputEvent, Phase, BLOCK_SIZE};

/// Plays back one batch of events per frame, then quits.
#[derive(Default)]
struct Scripted {
    frames: VecDeque<Vec<InputEvent>>,
    rendered: Vec<GameSnapshot>,
    end_messages: Vec<bool>,
}

impl Scripted {
    fn new(frames: Vec<Vec<InputEvent>>) -> Self {
        Self {
            frames: frames.into(),
            ..Self::default()
        }
    }

    fn last_render(&self) -> &GameSnapshot {
        self.rendered.last().expect("at least one frame rendered")
    }
}

impl Frontend for Scripted {
    fn render(&mut self, snap: &GameSnapshot) -> Result<()> {
        self.rendered.push(snap.clone());
        Ok(())
    }

    fn poll_input(&mut self, events: &mut Vec<InputEvent>) -> Result<()> {
        match self.frames.pop_front() {
            Some(batch) => events.extend(batch),
            None => events.push(InputEvent::Quit),
        }
        Ok(())
    }

    fn show_end_message(&mut self, won: bool) -> Result<()> {
        self.end_messages.push(won);
        Ok(())
    }
}

fn click(x: u16, y: u16) -> InputEvent {
    InputEvent::ClickAt {
        x: u32::from(x) * BLOCK_SIZE + BLOCK_SIZE / 2,
        y: u32::from(y) * BLOCK_SIZE + BLOCK_SIZE / 2,
    }
}

/// 4x4 with a single mine in the bottom-right corner.
fn corner_game() -> Game {
    Game::from_grid(Grid::from_mines(4, 4, &[Coord::new(3, 3)])).unwrap()
}

#[test]
fn test_single_click_wins_and_shows_message_once() {
    let mut game = corner_game();
    let mut frontend = Scripted::new(vec![vec![], vec![click(0, 0)]]);

    let end = run_session(&mut game, &mut frontend).unwrap();

    assert_eq!(end, SessionEnd::Won);
    assert_eq!(frontend.end_messages, vec![true]);
    // The winning board is drawn before the message.
    let last = frontend.last_render();
    assert_eq!(last.phase, Phase::Won);
    assert_eq!(last.revealed, 15);
    assert!(!last.cells.contains(&CellView::Hidden));
    assert_eq!(last.get(3, 3), Some(CellView::Mine));
}

#[test]
fn test_mine_click_loses_with_full_reveal() {
    let mut game = corner_game();
    let mut frontend = Scripted::new(vec![vec![click(3, 3)]]);

    let end = run_session(&mut game, &mut frontend).unwrap();

    assert_eq!(end, SessionEnd::Lost);
    assert_eq!(frontend.end_messages, vec![false]);
    assert_eq!(frontend.last_render().phase, Phase::Lost);
    assert_eq!(game.grid().revealed_cells(), 16);
}

#[test]
fn test_events_after_deciding_click_are_dropped() {
    let mut game = corner_game();
    let mut frontend =
        Scripted::new(vec![vec![click(3, 3), InputEvent::Restart, click(0, 0)]]);

    assert_eq!(run_session(&mut game, &mut frontend).unwrap(), SessionEnd::Lost);
    assert_eq!(game.episode_id(), 0);
    assert_eq!(game.phase(), Phase::Lost);
}

#[test]
fn test_quit_before_any_click() {
    let mut game = corner_game();
    let mut frontend = Scripted::new(vec![vec![InputEvent::Quit, click(0, 0)]]);

    assert_eq!(run_session(&mut game, &mut frontend).unwrap(), SessionEnd::Quit);
    assert!(frontend.end_messages.is_empty());
    assert_eq!(game.revealed_count(), 0);
    assert_eq!(frontend.rendered.len(), 1);
}

#[test]
fn test_idle_frames_keep_rendering() {
    let mut game = corner_game();
    let mut frontend = Scripted::new(vec![vec![]; 5]);

    assert_eq!(run_session(&mut game, &mut frontend).unwrap(), SessionEnd::Quit);
    // Five idle frames plus the frame that read the quit.
    assert_eq!(frontend.rendered.len(), 6);
    assert!(frontend.rendered.iter().all(|s| s.phase == Phase::Playing));
}

#[test]
fn test_out_of_bounds_and_repeat_clicks_are_harmless() {
    let mut game = Game::from_grid(Grid::from_mines(4, 4, &[Coord::new(0, 0)])).unwrap();
    let mut frontend = Scripted::new(vec![
        vec![InputEvent::ClickAt { x: 10_000, y: 10 }],
        vec![click(3, 3), click(3, 3)],
    ]);

    // The fill from (3,3) opens every safe cell, so the repeat click never runs.
    assert_eq!(run_session(&mut game, &mut frontend).unwrap(), SessionEnd::Won);
    assert_eq!(game.revealed_count(), 15);
}

#[test]
fn test_restart_starts_a_new_layout() {
    let mut game = Game::new(GameConfig::default(), 7).unwrap();
    let mut frontend = Scripted::new(vec![vec![InputEvent::Restart], vec![]]);

    assert_eq!(run_session(&mut game, &mut frontend).unwrap(), SessionEnd::Quit);
    assert_eq!(game.episode_id(), 1);
    assert_eq!(game.grid().mine_count(), 10);
    assert_eq!(frontend.last_render().episode_id, 1);
}
