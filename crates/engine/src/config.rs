//! Engine timing configuration.

use std::time::Duration;

use crate::types::{GRAVITY_MS, INPUT_POLL_MS, PLAYER_POLL_MS, RENDER_INTERVAL_MS};

/// Cadences of the four actors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Forced descent interval, measured from the last fall or lock.
    pub gravity: Duration,
    /// Longest a player actor idles between ticks.
    pub player_poll: Duration,
    /// Render cadence.
    pub render_interval: Duration,
    /// Keyboard poll cadence when no key is pending.
    pub input_poll: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            gravity: ms(GRAVITY_MS),
            player_poll: ms(PLAYER_POLL_MS),
            render_interval: ms(RENDER_INTERVAL_MS),
            input_poll: ms(INPUT_POLL_MS),
        }
    }
}

impl EngineConfig {
    /// Create from environment variables, falling back to defaults
    ///
    /// - `DUEL_TETRIS_GRAVITY_MS`
    /// - `DUEL_TETRIS_PLAYER_POLL_MS`
    /// - `DUEL_TETRIS_RENDER_MS`
    /// - `DUEL_TETRIS_INPUT_POLL_MS`
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`EngineConfig::from_env`] with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let read = |name: &str, default: Duration| {
            lookup(name)
                .and_then(|s| s.trim().parse::<u64>().ok())
                .filter(|&v| v > 0)
                .map(Duration::from_millis)
                .unwrap_or(default)
        };

        Self {
            gravity: read("DUEL_TETRIS_GRAVITY_MS", defaults.gravity),
            player_poll: read("DUEL_TETRIS_PLAYER_POLL_MS", defaults.player_poll),
            render_interval: read("DUEL_TETRIS_RENDER_MS", defaults.render_interval),
            input_poll: read("DUEL_TETRIS_INPUT_POLL_MS", defaults.input_poll),
        }
    }
}

fn ms(v: u32) -> Duration {
    Duration::from_millis(v as u64)
}
