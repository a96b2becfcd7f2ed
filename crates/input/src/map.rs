//! Mapping from terminal events to game input.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::types::{BoardLayout, InputEvent};

/// Map any terminal event to a game input event.
///
/// Key releases and repeats, resizes, focus changes and pastes map to `None`.
pub fn map_event(event: &Event, layout: &BoardLayout) -> Option<InputEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => map_key_event(*key),
        Event::Mouse(mouse) => map_mouse_event(*mouse, layout),
        _ => None,
    }
}

/// Map keyboard input to game input.
pub fn map_key_event(key: KeyEvent) -> Option<InputEvent> {
    if should_quit(key) {
        return Some(InputEvent::Quit);
    }
    match key.code {
        KeyCode::Char('r') | KeyCode::Char('R') => Some(InputEvent::Restart),
        _ => None,
    }
}

/// Map a left-button press on the board to a click in virtual pixels.
pub fn map_mouse_event(mouse: MouseEvent, layout: &BoardLayout) -> Option<InputEvent> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let (x, y) = layout.to_pixel(mouse.column, mouse.row)?;
            Some(InputEvent::ClickAt { x, y })
        }
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
