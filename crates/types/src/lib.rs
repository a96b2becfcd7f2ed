//! Core types module - shared data structures and constants
//!
//! Everything here is plain data with no external dependencies, so it can be
//! used by the core rules, the terminal view and the input mapping alike.
//!
//! # Geometry
//!
//! The game is laid out on a virtual 400x400 pixel window split into 40 pixel
//! blocks, which gives a 10x10 grid. Clicks arrive in virtual pixels and are
//! turned into grid coordinates by integer division by [`BLOCK_SIZE`].
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `WINDOW_WIDTH` | 400 | Virtual window width in pixels |
//! | `WINDOW_HEIGHT` | 400 | Virtual window height in pixels |
//! | `BLOCK_SIZE` | 40 | Side of one grid cell in pixels |
//! | `GRID_WIDTH` | 10 | Columns |
//! | `GRID_HEIGHT` | 10 | Rows |
//! | `MINE_COUNT` | 10 | Mines per game |
//! | `FRAMES` | 60 | Target frames per second |
//!
//! # Examples
//!
//! ```
//! use tui_mines_types::{Coord, BLOCK_SIZE, GRID_HEIGHT, GRID_WIDTH};
//!
//! assert_eq!(GRID_WIDTH, 10);
//! assert_eq!(GRID_HEIGHT, 10);
//!
//! // Pixel (85, 399) lands in column 2, row 9.
//! assert_eq!(Coord::from_pixel(85, 399), Coord::new(2, 9));
//! assert_eq!(BLOCK_SIZE, 40);
//! ```

/// Virtual window width in pixels.
pub const WINDOW_WIDTH: u32 = 400;

/// Virtual window height in pixels.
pub const WINDOW_HEIGHT: u32 = 400;

/// Side length of a single grid cell in pixels.
pub const BLOCK_SIZE: u32 = 40;

/// Grid width in cells.
pub const GRID_WIDTH: u16 = (WINDOW_WIDTH / BLOCK_SIZE) as u16;

/// Grid height in cells.
pub const GRID_HEIGHT: u16 = (WINDOW_HEIGHT / BLOCK_SIZE) as u16;

/// Number of mines placed at the start of every game.
pub const MINE_COUNT: usize = 10;

/// Target frame rate.
pub const FRAMES: u32 = 60;

/// Frame interval in milliseconds (16ms ≈ 60 FPS).
pub const FRAME_MS: u32 = 1000 / FRAMES;

/// How long the end-of-game message stays on screen.
pub const END_MESSAGE_DELAY_MS: u64 = 5000;

/// Shown above the board.
pub const WINDOW_TITLE: &str = "Mine Sweeper";

/// Shown when every safe cell has been revealed.
pub const WIN_MESSAGE: &str = "you avoided the mines";

/// Shown after clicking a mine.
pub const LOSS_MESSAGE: &str = "you stepped on a mine";


/// A position on the grid.
///
/// `x` is the column (left to right), `y` the row (top to bottom).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub x: u16,
    pub y: u16,
}

impl Coord {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    /// Convert virtual pixel coordinates to the grid coordinate they fall in.
    ///
    /// The result is not bounds-checked against any grid; callers look it up
    /// through a checked accessor.
    pub fn from_pixel(pixel_x: u32, pixel_y: u32) -> Self {
        let x = (pixel_x / BLOCK_SIZE).min(u16::MAX as u32) as u16;
        let y = (pixel_y / BLOCK_SIZE).min(u16::MAX as u32) as u16;
        Self { x, y }
    }

    /// Offset by `(dx, dy)`, returning `None` on underflow or overflow.
    pub fn offset(self, dx: i32, dy: i32) -> Option<Self> {
        let x = u16::try_from(i32::from(self.x) + dx).ok()?;
        let y = u16::try_from(i32::from(self.y) + dy).ok()?;
        Some(Self { x, y })
    }
}

/// Input events consumed by the session loop.
///
/// Produced by the input mapping from raw terminal events, or by scripted
/// frontends in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Close the window / leave the game
    Quit,
    /// Primary click at virtual pixel coordinates
    ClickAt { x: u32, y: u32 },
    /// Start a new game with a fresh layout
    Restart,
}

/// Result of discovering a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscoveryOutcome {
    /// A safe cell was opened; `revealed` cells became visible.
    SafeReveal { revealed: u32 },
    /// The clicked cell holds a mine. Nothing was mutated.
    MineHit,
    /// The clicked cell was already open. No-op.
    AlreadyRevealed,
    /// The click fell outside the grid. No-op.
    OutOfBounds,
}

/// Game phase.
///
/// The only transitions are `Playing -> Won` and `Playing -> Lost`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Playing,
    Won,
    Lost,
}

impl Phase {
    pub fn is_finished(&self) -> bool {
        !matches!(self, Phase::Playing)
    }

    /// End-of-game message for terminal phases.
    pub fn end_message(&self) -> Option<&'static str> {
        match self {
            Phase::Playing => None,
            Phase::Won => Some(WIN_MESSAGE),
            Phase::Lost => Some(LOSS_MESSAGE),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Playing => "playing",
            Phase::Won => "won",
            Phase::Lost => "lost",
        }
    }
}

/// Where the grid sits on the terminal, and how large each cell is drawn.
///
/// Produced by the view so that input mapping and drawing agree on geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    /// Terminal column of the first grid cell (inside the border).
    pub origin_x: u16,
    /// Terminal row of the first grid cell (inside the border).
    pub origin_y: u16,
    /// Terminal columns per grid cell.
    pub cell_w: u16,
    /// Terminal rows per grid cell.
    pub cell_h: u16,
    /// Grid columns covered by the board.
    pub columns: u16,
    /// Grid rows covered by the board.
    pub rows: u16,
}

impl BoardLayout {
    /// Board width in terminal columns.
    pub fn width(&self) -> u16 {
        self.columns.saturating_mul(self.cell_w)
    }

    /// Board height in terminal rows.
    pub fn height(&self) -> u16 {
        self.rows.saturating_mul(self.cell_h)
    }

    /// Translate a terminal position into virtual window pixels.
    ///
    /// Returns `None` when the position is outside the board.
    pub fn to_pixel(&self, column: u16, row: u16) -> Option<(u32, u32)> {
        if self.cell_w == 0 || self.cell_h == 0 {
            return None;
        }
        let dx = column.checked_sub(self.origin_x)?;
        let dy = row.checked_sub(self.origin_y)?;
        if dx >= self.width() || dy >= self.height() {
            return None;
        }
        let px = u32::from(dx) * BLOCK_SIZE / u32::from(self.cell_w);
        let py = u32::from(dy) * BLOCK_SIZE / u32::from(self.cell_h);
        Some((px, py))
    }
}
