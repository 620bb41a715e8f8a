//! Render actor - periodic presentation and game-over detection.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::Result;
use tracing::info;

use crate::arena::Arena;
use crate::config::EngineConfig;
use crate::core::DuelFrame;
use crate::input::{wait_for_quit, KeySource, SharedKeys};
use crate::types::Outcome;

/// Rendering backend contract. Implementations only read the frame.
pub trait Screen: Send {
    fn present(&mut self, frame: &DuelFrame) -> Result<()>;
}

impl<S: Screen + ?Sized> Screen for Box<S> {
    fn present(&mut self, frame: &DuelFrame) -> Result<()> {
        (**self).present(frame)
    }
}

pub struct RenderActor<S, K> {
    arena: Arc<Arena>,
    screen: S,
    keys: SharedKeys<K>,
    interval: Duration,
}

impl<S: Screen, K: KeySource> RenderActor<S, K> {
    pub fn new(arena: Arc<Arena>, screen: S, keys: SharedKeys<K>, config: &EngineConfig) -> Self {
        Self {
            arena,
            screen,
            keys,
            interval: config.render_interval,
        }
    }

    /// Draw until shutdown. When a board tops out, shows the outcome and
    /// waits for the quit key before returning it.
    pub fn run(mut self) -> Result<Option<Outcome>> {
        info!("render actor started");
        let outcome = loop {
            let frame = self.arena.frame(None);
            self.screen.present(&frame)?;

            // Read shutdown before the terminal flags. A top-out marks its
            // board before requesting shutdown, so a shutdown seen here
            // guarantees its terminal board is seen below.
            let stopping = self.arena.shutdown().is_triggered();
            if let Some(outcome) = self.arena.outcome() {
                self.finish(outcome)?;
                break Some(outcome);
            }
            if stopping {
                break None;
            }
            thread::sleep(self.interval);
        };
        info!(?outcome, "render actor stopped");
        Ok(outcome)
    }

    fn finish(&mut self, outcome: Outcome) -> Result<()> {
        self.arena.request_shutdown();
        info!(?outcome, scores = ?self.arena.scores(), "match over");
        let frame = self.arena.frame(Some(outcome));
        self.screen.present(&frame)?;
        wait_for_quit(&self.keys)
    }
}
