//! Terminal "game renderer" module.
//!
//! A small rendering layer for terminal gameplay: the game is drawn into a
//! framebuffer of styled glyphs, which is then diffed and flushed to the
//! terminal through crossterm.
//!
//! - [`fb`]: framebuffer and styles
//! - [`game_view`]: snapshot to framebuffer, plus the board layout used for
//!   mapping mouse clicks
//! - [`renderer`]: terminal ownership and flushing
//! - [`render_throttle`]: skip redraws of unchanged frames

pub mod fb;
pub mod game_view;
pub mod render_throttle;
pub mod renderer;

pub use tui_mines_core as core;
pub use tui_mines_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{GameView, Viewport};
pub use render_throttle::RenderThrottle;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
