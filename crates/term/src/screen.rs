//! `Screen` implementation backed by the real terminal.

use std::time::Instant;

use anyhow::Result;

use crate::core::DuelFrame;
use crate::duel_view::{DuelView, Viewport};
use crate::engine::Screen;
use crate::fb::FrameBuffer;
use crate::render_throttle::RenderThrottle;
use crate::renderer::TerminalRenderer;

/// Unchanged frames are still redrawn this often, to repair terminal damage.
const REFRESH_MS: u64 = 1000;

pub struct TerminalScreen {
    renderer: TerminalRenderer,
    view: DuelView,
    fb: FrameBuffer,
    throttle: RenderThrottle,
    viewport: Viewport,
    started: Instant,
}

impl Default for TerminalScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalScreen {
    pub fn new() -> Self {
        Self {
            renderer: TerminalRenderer::new(),
            view: DuelView::new(),
            fb: FrameBuffer::new(0, 0),
            throttle: RenderThrottle::new(REFRESH_MS),
            viewport: Viewport::new(0, 0),
            started: Instant::now(),
        }
    }
}

impl Screen for TerminalScreen {
    fn present(&mut self, frame: &DuelFrame) -> Result<()> {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        if viewport != self.viewport {
            self.viewport = viewport;
            self.renderer.invalidate();
            self.throttle.reset();
        }

        let now_ms = self.started.elapsed().as_millis() as u64;
        if !self.throttle.should_render(now_ms, frame.fingerprint()) {
            return Ok(());
        }
        self.view.render_into(frame, viewport, &mut self.fb);
        self.renderer.draw_swap(&mut self.fb)
    }
}
