//! Match orchestration: spawn the four actors, join them, report the outcome.

use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

use anyhow::{anyhow, Context, Result};
use tracing::info;

use crate::arena::Arena;
use crate::config::EngineConfig;
use crate::core::process_seed;
use crate::input::{InputActor, KeySource};
use crate::player::PlayerActor;
use crate::render::{RenderActor, Screen};
use crate::types::{Outcome, PlayerId};

pub struct Game {
    arena: Arc<Arena>,
    config: EngineConfig,
}

impl Game {
    /// A match seeded from the process-wide seed.
    pub fn new(config: EngineConfig) -> Self {
        Self::with_seed(process_seed(), config)
    }

    pub fn with_seed(seed: u32, config: EngineConfig) -> Self {
        Self::from_arena(Arena::new(seed), config)
    }

    pub fn from_arena(arena: Arena, config: EngineConfig) -> Self {
        Self {
            arena: Arc::new(arena),
            config,
        }
    }

    pub fn arena(&self) -> &Arc<Arena> {
        &self.arena
    }

    /// Run the match to completion.
    ///
    /// Returns `Some(outcome)` if a board topped out, `None` if the match was
    /// quit first. All four threads are joined before returning.
    pub fn run<K, S>(self, keys: K, screen: S) -> Result<Option<Outcome>>
    where
        K: KeySource + 'static,
        S: Screen + 'static,
    {
        let Game { arena, config } = self;
        let keys = Arc::new(Mutex::new(keys));
        info!(?config, "match starting");

        let input = {
            let actor = InputActor::new(Arc::clone(&arena), Arc::clone(&keys), &config);
            spawn_actor("input", &arena, move || actor.run())?
        };
        let render = {
            let actor = RenderActor::new(Arc::clone(&arena), screen, keys, &config);
            spawn_actor("render", &arena, move || actor.run())?
        };
        let mut players = Vec::with_capacity(PlayerId::ALL.len());
        for id in PlayerId::ALL {
            let actor = PlayerActor::new(id, Arc::clone(&arena), &config);
            let name = format!("player-{}", id.number());
            players.push(spawn_actor(&name, &arena, move || actor.run())?);
        }

        let input_result = join("input", input);
        arena.request_shutdown();
        let render_result = join("render", render);
        for (id, handle) in PlayerId::ALL.into_iter().zip(players) {
            join(&format!("player-{}", id.number()), handle)?;
        }

        let outcome = render_result??;
        input_result??;
        info!(?outcome, scores = ?arena.scores(), "match finished");
        Ok(outcome)
    }
}

/// Requests shutdown when dropped, so an actor that returns early, fails or
/// panics still releases the others.
struct ShutdownOnExit(Arc<Arena>);

impl Drop for ShutdownOnExit {
    fn drop(&mut self) {
        self.0.request_shutdown();
    }
}

fn spawn_actor<T, F>(name: &str, arena: &Arc<Arena>, f: F) -> Result<JoinHandle<T>>
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    let guard = ShutdownOnExit(Arc::clone(arena));
    thread::Builder::new()
        .name(name.to_string())
        .spawn(move || {
            let _guard = guard;
            f()
        })
        .with_context(|| format!("failed to spawn {name} thread"))
}

fn join<T>(name: &str, handle: JoinHandle<T>) -> Result<T> {
    handle
        .join()
        .map_err(|_| anyhow!("{name} thread panicked"))
}
