//! Terminal frontend: crossterm input plus the framebuffer renderer.

use std::io;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};
use crossterm::terminal;
use tracing::warn;

use crate::core::GameSnapshot;
use crate::input::map_event;
use crate::session::Frontend;
use crate::term::{FrameBuffer, GameView, RenderThrottle, TerminalRenderer, Viewport};
use crate::types::{BoardLayout, InputEvent, LOSS_MESSAGE, WINDOW_TITLE, WIN_MESSAGE};

/// Full redraw at least this often, even when nothing changed.
const REFRESH_MS: u64 = 1000;

/// Used when the terminal cannot report its size.
const FALLBACK_VIEWPORT: Viewport = Viewport {
    width: 80,
    height: 24,
};

pub struct TerminalFrontend {
    renderer: TerminalRenderer,
    view: GameView,
    fb: FrameBuffer,
    throttle: RenderThrottle,
    viewport: Viewport,
    /// Geometry of the last drawn board, used to map mouse clicks.
    layout: BoardLayout,
    /// Last rendered state, redrawn under the end message.
    last: GameSnapshot,
    frame: Duration,
    frame_start: Instant,
    clock: Instant,
    end_delay: Duration,
}

impl TerminalFrontend {
    pub fn new(frame: Duration, end_delay: Duration) -> Self {
        let view = GameView::default();
        let viewport = FALLBACK_VIEWPORT;
        let layout = view.layout(0, 0, viewport);
        Self {
            renderer: TerminalRenderer::new(),
            view,
            fb: FrameBuffer::new(viewport.width, viewport.height),
            throttle: RenderThrottle::new(REFRESH_MS),
            viewport,
            layout,
            last: GameSnapshot::default(),
            frame,
            frame_start: Instant::now(),
            clock: Instant::now(),
            end_delay,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        self.renderer.enter(WINDOW_TITLE)
    }

    pub fn exit(&mut self) -> Result<()> {
        self.renderer.exit()
    }

    fn refresh_viewport(&mut self) {
        let viewport = viewport_from_size(terminal::size());
        if viewport != self.viewport {
            self.viewport = viewport;
            self.renderer.invalidate();
            self.throttle.force();
        }
    }
}

impl Frontend for TerminalFrontend {
    fn render(&mut self, snap: &GameSnapshot) -> Result<()> {
        self.refresh_viewport();
        self.layout = self.view.layout(snap.width, snap.height, self.viewport);

        let now_ms = self.clock.elapsed().as_millis() as u64;
        if self.throttle.should_render(now_ms, snap.fingerprint()) {
            self.view.render_into(snap, self.viewport, &mut self.fb);
            self.renderer.draw_swap(&mut self.fb)?;
        }
        self.last.clone_from(snap);
        Ok(())
    }

    fn poll_input(&mut self, events: &mut Vec<InputEvent>) -> Result<()> {
        loop {
            let timeout = self.frame.saturating_sub(self.frame_start.elapsed());
            if timeout.is_zero() || !event::poll(timeout)? {
                break;
            }
            let raw = event::read()?;
            if let Event::Resize(..) = raw {
                self.throttle.force();
            }
            if let Some(ev) = map_event(&raw, &self.layout) {
                events.push(ev);
            }
        }
        self.frame_start = Instant::now();
        Ok(())
    }

    fn show_end_message(&mut self, won: bool) -> Result<()> {
        self.refresh_viewport();
        let message = if won { WIN_MESSAGE } else { LOSS_MESSAGE };
        self.view
            .render_into_with_message(&self.last, Some(message), self.viewport, &mut self.fb);
        self.renderer.draw_swap(&mut self.fb)?;
        thread::sleep(self.end_delay);
        Ok(())
    }
}

fn viewport_from_size(size: io::Result<(u16, u16)>) -> Viewport {
    match size {
        Ok((width, height)) => Viewport::new(width, height),
        Err(err) => {
            warn!(%err, "terminal size unavailable, assuming 80x24");
            FALLBACK_VIEWPORT
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_follows_reported_size() {
        assert_eq!(viewport_from_size(Ok((120, 40))), Viewport::new(120, 40));
    }

    #[test]
    fn viewport_falls_back_when_size_fails() {
        let err = io::Error::new(io::ErrorKind::Other, "not a tty");
        assert_eq!(viewport_from_size(Err(err)), Viewport::new(80, 24));
    }
}
