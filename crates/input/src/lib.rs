//! Terminal input module.
//!
//! Maps `crossterm` key and mouse events into [`crate::types::InputEvent`].
//! Mouse positions are translated to virtual window pixels through the
//! [`BoardLayout`](crate::types::BoardLayout) the view drew with, so clicks and
//! drawing always agree on where the grid is.

pub mod map;

pub use tui_mines_types as types;

pub use map::{map_event, map_key_event, map_mouse_event, should_quit};
