use tui_mines::term::RenderThrottle;

#[test]
fn render_throttle_renders_first_frame() {
    let mut t = RenderThrottle::new(1000);
    assert!(t.should_render(0, 1));
}

#[test]
fn render_throttle_renders_on_change() {
    let mut t = RenderThrottle::new(1000);
    assert!(t.should_render(0, 1));
    assert!(t.should_render(1, 2));
}

#[test]
fn render_throttle_skips_unchanged_until_refresh() {
    let mut t = RenderThrottle::new(1000);
    assert!(t.should_render(0, 1));
    assert!(!t.should_render(16, 1));
    assert!(!t.should_render(999, 1));
    assert!(t.should_render(1000, 1));
    assert!(!t.should_render(1016, 1));
}

#[test]
fn render_throttle_force_redraws_once() {
    let mut t = RenderThrottle::new(1000);
    assert!(t.should_render(0, 7));
    t.force();
    assert!(t.should_render(16, 7));
    assert!(!t.should_render(32, 7));
}
