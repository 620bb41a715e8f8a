//! Input actor - polls the keyboard and routes keys to player inboxes.

use std::sync::{Arc, Mutex, PoisonError};
use std::thread;
use std::time::Duration;

use anyhow::Result;
use tracing::{debug, info};

use crate::arena::Arena;
use crate::config::EngineConfig;
use crate::types::{classify, Key, KeyAction};

/// Keyboard backend contract.
pub trait KeySource: Send {
    /// Next raw key. In non-blocking mode returns `Ok(None)` when nothing is
    /// pending; in blocking mode waits for a key.
    fn poll_key(&mut self) -> Result<Option<Key>>;

    fn set_blocking(&mut self, blocking: bool) -> Result<()>;
}

impl<K: KeySource + ?Sized> KeySource for Box<K> {
    fn poll_key(&mut self) -> Result<Option<Key>> {
        (**self).poll_key()
    }

    fn set_blocking(&mut self, blocking: bool) -> Result<()> {
        (**self).set_blocking(blocking)
    }
}

/// Key source shared between the input actor and the end-of-match wait.
pub type SharedKeys<K> = Arc<Mutex<K>>;

pub struct InputActor<K> {
    arena: Arc<Arena>,
    keys: SharedKeys<K>,
    poll: Duration,
}

impl<K: KeySource> InputActor<K> {
    pub fn new(arena: Arc<Arena>, keys: SharedKeys<K>, config: &EngineConfig) -> Self {
        Self {
            arena,
            keys,
            poll: config.input_poll,
        }
    }

    /// Poll until quit or shutdown.
    pub fn run(self) -> Result<()> {
        info!("input actor started");
        loop {
            if self.arena.shutdown().is_triggered() {
                break;
            }
            let key = {
                let mut keys = self.keys.lock().unwrap_or_else(PoisonError::into_inner);
                // The render actor may have held the source across a shutdown.
                if self.arena.shutdown().is_triggered() {
                    break;
                }
                keys.poll_key()?
            };
            match key {
                None => thread::sleep(self.poll),
                Some(key) => {
                    if self.dispatch(key) {
                        break;
                    }
                }
            }
        }
        info!("input actor stopped");
        Ok(())
    }

    /// Route one key. Returns `true` if it was the quit key.
    pub fn dispatch(&self, key: Key) -> bool {
        match classify(key) {
            Some(KeyAction::Quit) => {
                if self.arena.request_shutdown() {
                    info!("quit requested");
                }
                true
            }
            Some(KeyAction::Player(player, cmd)) => {
                self.arena.inbox(player).push_command(cmd);
                false
            }
            None => {
                debug!(?key, "unbound key ignored");
                false
            }
        }
    }
}

/// Block until the quit key arrives, then restore non-blocking mode.
pub fn wait_for_quit<K: KeySource>(keys: &Mutex<K>) -> Result<()> {
    let mut keys = keys.lock().unwrap_or_else(PoisonError::into_inner);
    keys.set_blocking(true)?;
    let waited = loop {
        match keys.poll_key() {
            Ok(Some(key)) if classify(key) == Some(KeyAction::Quit) => break Ok(()),
            Ok(_) => continue,
            Err(e) => break Err(e),
        }
    };
    keys.set_blocking(false)?;
    waited
}
