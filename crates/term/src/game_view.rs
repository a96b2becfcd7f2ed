//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{CellView, GameSnapshot};
use crate::fb::{FrameBuffer, Glyph, Rgb, Style};
use crate::types::{BoardLayout, Phase, WINDOW_TITLE};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const HIDDEN_A: Rgb = Rgb::GREY;
const HIDDEN_B: Rgb = Rgb::new(128, 128, 128);
const OPEN_BG: Rgb = Rgb::new(48, 48, 56);
const HINT: &str = "click: open  r: new game  q: quit";
const PANEL_MIN_WIDTH: u16 = 14;

/// A lightweight terminal renderer for the minefield.
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 4x2 keeps cells roughly square with typical glyph aspect ratios.
        Self {
            cell_w: 4,
            cell_h: 2,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Where a `columns x rows` grid lands in `viewport`.
    ///
    /// The board frame is centered horizontally; the title row plus frame are
    /// centered vertically. Input mapping uses the same layout, so a click
    /// always lands on the cell drawn under it.
    pub fn layout(&self, columns: u16, rows: u16, viewport: Viewport) -> BoardLayout {
        let frame_w = columns.saturating_mul(self.cell_w).saturating_add(2);
        let frame_h = rows.saturating_mul(self.cell_h).saturating_add(2);
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        // One title row above the frame.
        let start_y = viewport.height.saturating_sub(frame_h + 1) / 2 + 1;

        BoardLayout {
            origin_x: start_x + 1,
            origin_y: start_y + 1,
            cell_w: self.cell_w,
            cell_h: self.cell_h,
            columns,
            rows,
        }
    }

    /// Render the game into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        self.render_into_with_message(snap, None, viewport, fb);
    }

    /// Render the game with an optional message drawn over the board.
    pub fn render_into_with_message(
        &self,
        snap: &GameSnapshot,
        message: Option<&str>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.fill(Glyph::default());

        let layout = self.layout(snap.width, snap.height, viewport);
        let frame_x = layout.origin_x - 1;
        let frame_y = layout.origin_y - 1;
        let frame_w = layout.width() + 2;
        let frame_h = layout.height() + 2;

        self.draw_title(fb, frame_x, frame_y, frame_w);
        self.draw_border(fb, frame_x, frame_y, frame_w, frame_h);

        for y in 0..snap.height {
            for x in 0..snap.width {
                if let Some(view) = snap.get(x, y) {
                    self.draw_cell(fb, &layout, x, y, view);
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, frame_x + frame_w + 2, frame_y);

        let hint_y = frame_y.saturating_add(frame_h);
        if (HINT.len() as u16) <= viewport.width && hint_y < viewport.height {
            let x = frame_x.saturating_add(frame_w / 2).saturating_sub(HINT.len() as u16 / 2);
            fb.put_str(x, hint_y, HINT, Style::new(Rgb::new(120, 120, 120), Rgb::BLACK));
        }

        if let Some(text) = message {
            self.draw_message(fb, frame_x, frame_y, frame_w, frame_h, text);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    pub fn render_with_message(
        &self,
        snap: &GameSnapshot,
        message: Option<&str>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into_with_message(snap, message, viewport, &mut fb);
        fb
    }

    fn draw_title(&self, fb: &mut FrameBuffer, frame_x: u16, frame_y: u16, frame_w: u16) {
        let Some(y) = frame_y.checked_sub(1) else {
            return;
        };
        let title_w = WINDOW_TITLE.len() as u16;
        let x = frame_x + frame_w.saturating_sub(title_w) / 2;
        fb.put_str(x, y, WINDOW_TITLE, Style::new(Rgb::WHITE, Rgb::BLACK).bold());
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        if w < 2 || h < 2 {
            return;
        }
        let style = Style::new(Rgb::WHITE, Rgb::BLACK);
        let (right, bottom) = (x + w - 1, y + h - 1);

        for dx in 1..w - 1 {
            fb.put(x + dx, y, '─', style);
            fb.put(x + dx, bottom, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put(x, y + dy, '│', style);
            fb.put(right, y + dy, '│', style);
        }
        fb.put(x, y, '┌', style);
        fb.put(right, y, '┐', style);
        fb.put(x, bottom, '└', style);
        fb.put(right, bottom, '┘', style);
    }

    fn draw_cell(&self, fb: &mut FrameBuffer, layout: &BoardLayout, x: u16, y: u16, view: CellView) {
        let px = layout.origin_x + x * self.cell_w;
        let py = layout.origin_y + y * self.cell_h;
        let (cx, cy) = (px + (self.cell_w - 1) / 2, py + (self.cell_h - 1) / 2);

        match view {
            CellView::Hidden => {
                // Checkerboard stands in for grid lines.
                let bg = if (x + y) % 2 == 0 { HIDDEN_A } else { HIDDEN_B };
                fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', Style::new(Rgb::WHITE, bg));
            }
            CellView::Mine => {
                let style = Style::new(Rgb::RED, OPEN_BG).bold();
                fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
                fb.put(cx, cy, '●', style);
            }
            CellView::Clear(0) => {
                fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', Style::new(Rgb::WHITE, OPEN_BG));
            }
            CellView::Clear(n) => {
                let style = Style::new(number_color(n), OPEN_BG).bold();
                fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
                fb.put(cx, cy, char::from(b'0' + n.min(9)), style);
            }
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        panel_x: u16,
        top: u16,
    ) {
        if panel_x >= viewport.width || viewport.width - panel_x < PANEL_MIN_WIDTH {
            return;
        }

        let label = Style::new(Rgb::new(220, 220, 220), Rgb::BLACK).bold();
        let value = Style::new(Rgb::new(200, 200, 200), Rgb::BLACK);

        let mut y = top;
        fb.put_str(panel_x, y, "MINES", label);
        fb.put_u32(panel_x, y + 1, snap.mines, value);
        y += 3;

        fb.put_str(panel_x, y, "OPEN", label);
        fb.put_u32(panel_x, y + 1, snap.revealed, value);
        let sep_x = panel_x + digits(snap.revealed);
        fb.put(sep_x, y + 1, '/', value);
        fb.put_u32(sep_x + 1, y + 1, snap.safe_cells, value);
        y += 3;

        fb.put_str(panel_x, y, "STATE", label);
        let state_style = match snap.phase {
            Phase::Playing => value,
            Phase::Won => Style::new(Rgb::YELLOW, Rgb::BLACK).bold(),
            Phase::Lost => Style::new(Rgb::RED, Rgb::BLACK).bold(),
        };
        fb.put_str(panel_x, y + 1, snap.phase.as_str(), state_style);
        y += 3;

        fb.put_str(panel_x, y, "GAME", label);
        fb.put_u32(panel_x, y + 1, snap.episode_id + 1, value);
    }

    fn draw_message(
        &self,
        fb: &mut FrameBuffer,
        frame_x: u16,
        frame_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let text_w = text.chars().count() as u16;
        let x = frame_x.saturating_add(frame_w.saturating_sub(text_w + 2) / 2);
        let y = frame_y.saturating_add(frame_h / 2);
        let style = Style::new(Rgb::WHITE, Rgb::BLACK).bold();
        fb.put(x, y, ' ', style);
        fb.put_str(x + 1, y, text, style);
        fb.put(x + 1 + text_w, y, ' ', style);
    }
}

fn number_color(n: u8) -> Rgb {
    match n {
        1 => Rgb::new(100, 160, 255),
        2 => Rgb::new(100, 220, 120),
        3 => Rgb::new(255, 100, 100),
        4 => Rgb::new(180, 120, 255),
        5 => Rgb::new(220, 140, 60),
        6 => Rgb::new(80, 220, 220),
        7 => Rgb::WHITE,
        _ => Rgb::YELLOW,
    }
}

fn digits(mut n: u32) -> u16 {
    let mut len = 1;
    while n >= 10 {
        n /= 10;
        len += 1;
    }
    len
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_counts_decimal_width() {
        assert_eq!(digits(0), 1);
        assert_eq!(digits(9), 1);
        assert_eq!(digits(10), 2);
        assert_eq!(digits(90), 2);
        assert_eq!(digits(100), 3);
    }

    #[test]
    fn layout_centers_frame_below_title() {
        let view = GameView::default();
        // Frame is 42x22, plus the title row => 23 rows.
        let layout = view.layout(10, 10, Viewport::new(42, 23));
        assert_eq!(layout.origin_x, 1);
        assert_eq!(layout.origin_y, 2);
        assert_eq!(layout.width(), 40);
        assert_eq!(layout.height(), 20);

        let layout = view.layout(10, 10, Viewport::new(62, 33));
        assert_eq!(layout.origin_x, 11);
        assert_eq!(layout.origin_y, 7);
    }
}
