/// Skips redraws of frames that have not changed.
///
/// A frame is drawn when its fingerprint differs from the last drawn one, or
/// when `refresh_interval_ms` has passed since the last draw.
#[derive(Debug, Clone)]
pub struct RenderThrottle {
    refresh_interval_ms: u64,
    last_render_ms: u64,
    last_fingerprint: u64,
    has_rendered: bool,
}

impl RenderThrottle {
    pub fn new(refresh_interval_ms: u64) -> Self {
        Self {
            refresh_interval_ms,
            last_render_ms: 0,
            last_fingerprint: 0,
            has_rendered: false,
        }
    }

    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64) -> bool {
        let changed = !self.has_rendered || fingerprint != self.last_fingerprint;
        let stale = now_ms.saturating_sub(self.last_render_ms) >= self.refresh_interval_ms;
        if !changed && !stale {
            return false;
        }
        self.has_rendered = true;
        self.last_render_ms = now_ms;
        self.last_fingerprint = fingerprint;
        true
    }

    /// Forget the last frame so the next call always renders.
    pub fn reset(&mut self) {
        self.has_rendered = false;
    }
}
