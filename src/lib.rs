//! Terminal Minesweeper (workspace facade crate).
//!
//! Re-exports the dedicated crates under `crates/` and hosts the application
//! shell: configuration, logging, the session loop and the terminal frontend.

pub use tui_mines_core as core;
pub use tui_mines_input as input;
pub use tui_mines_term as term;
pub use tui_mines_types as types;

pub mod config;
pub mod frontend;
pub mod logging;
pub mod session;
