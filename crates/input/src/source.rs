//! `KeySource` backed by the crossterm event stream.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event};

use crate::engine::KeySource;
use crate::map::key_from_event;
use crate::types::Key;

/// Reads keys from the controlling terminal. Starts non-blocking.
#[derive(Debug, Default)]
pub struct TerminalKeys {
    blocking: bool,
}

impl TerminalKeys {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeySource for TerminalKeys {
    fn poll_key(&mut self) -> Result<Option<Key>> {
        loop {
            if !self.blocking && !event::poll(Duration::ZERO)? {
                return Ok(None);
            }
            // Non-key events (resize, mouse, focus) are consumed and skipped.
            if let Event::Key(key) = event::read()? {
                if let Some(key) = key_from_event(key) {
                    return Ok(Some(key));
                }
            }
        }
    }

    fn set_blocking(&mut self, blocking: bool) -> Result<()> {
        self.blocking = blocking;
        Ok(())
    }
}
