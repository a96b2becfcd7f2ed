use tui_mines::core::{Game, GameConfig, Grid};
use tui_mines::term::{FrameBuffer, GameView, Viewport};
use tui_mines::types::{Coord, LOSS_MESSAGE, WINDOW_TITLE};

/// 4x4 with a single mine in the bottom-right corner.
fn corner_game() -> Game {
    Game::from_grid(Grid::from_mines(4, 4, &[Coord::new(3, 3)])).unwrap()
}

fn screen_text(fb: &FrameBuffer) -> String {
    (0..fb.height()).map(|y| fb.row_text(y) + "\n").collect()
}

#[test]
fn term_view_renders_border_corners_below_title() {
    let snap = Game::new(GameConfig::default(), 1).unwrap().snapshot();
    let view = GameView::default();

    // 10 cells * 4 columns + border = 42 wide; 10 * 2 rows + border + title = 23 tall.
    let fb = view.render(&snap, Viewport::new(42, 23));

    assert_eq!(fb.get(0, 1).unwrap().ch, '┌');
    assert_eq!(fb.get(41, 1).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 22).unwrap().ch, '└');
    assert_eq!(fb.get(41, 22).unwrap().ch, '┘');
    assert!(fb.row_text(0).contains(WINDOW_TITLE));
}

#[test]
fn term_view_draws_mine_and_digits_after_loss() {
    let mut game = corner_game();
    game.discover(3 * 40, 3 * 40);
    let snap = game.snapshot();

    let view = GameView::default();
    // Frame is 18x10, plus the title row.
    let fb = view.render(&snap, Viewport::new(18, 11));

    // Cell (3,3) starts at terminal (13,8); its glyph sits at the cell center.
    assert_eq!(fb.get(14, 8).unwrap().ch, '●');
    // Cell (2,2) touches the mine.
    assert_eq!(fb.get(10, 6).unwrap().ch, '1');
    // Cell (0,0) is clear.
    assert_eq!(fb.get(2, 2).unwrap().ch, ' ');
}

#[test]
fn term_view_hides_unrevealed_cells() {
    let snap = corner_game().snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(18, 11));

    let text = screen_text(&fb);
    assert!(!text.contains('●'));
    assert!(!text.contains('1'));
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let snap = Game::new(GameConfig::default(), 1).unwrap().snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(80, 24));

    let text = screen_text(&fb);
    assert!(text.contains("MINES"));
    assert!(text.contains("0/90"));
    assert!(text.contains("playing"));
}

#[test]
fn term_view_overlays_end_message() {
    let mut game = Game::new(GameConfig::default(), 3).unwrap();
    let mine = game
        .grid()
        .coords()
        .find(|c| game.grid().get(*c).unwrap().is_mine)
        .unwrap();
    game.discover(u32::from(mine.x) * 40, u32::from(mine.y) * 40);

    let view = GameView::default();
    let snap = game.snapshot();
    let vp = Viewport::new(42, 23);

    let with = view.render_with_message(&snap, Some(LOSS_MESSAGE), vp);
    assert!(screen_text(&with).contains(LOSS_MESSAGE));

    let without = view.render(&snap, vp);
    assert!(!screen_text(&without).contains(LOSS_MESSAGE));
}

#[test]
fn term_view_layout_maps_clicks_back_to_drawn_cells() {
    let view = GameView::default();
    let vp = Viewport::new(80, 24);
    let layout = view.layout(10, 10, vp);

    for row in 0..10u16 {
        for col in 0..10u16 {
            for (dx, dy) in [(0, 0), (layout.cell_w - 1, layout.cell_h - 1)] {
                let term_x = layout.origin_x + col * layout.cell_w + dx;
                let term_y = layout.origin_y + row * layout.cell_h + dy;
                let (px, py) = layout.to_pixel(term_x, term_y).unwrap();
                assert_eq!(Coord::from_pixel(px, py), Coord::new(col, row));
            }
        }
    }

    assert_eq!(layout.to_pixel(layout.origin_x - 1, layout.origin_y), None);
}
