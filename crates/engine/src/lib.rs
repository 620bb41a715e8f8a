//! Concurrent match engine.
//!
//! A match runs four named threads over one shared [`Arena`]:
//!
//! - `player-1` and `player-2` each own one board's simulation
//! - `render` presents frames and detects the end of the match
//! - `input` polls the keyboard and routes keys to player inboxes
//!
//! Players talk to each other only through their inboxes: a command queue
//! filled by the input actor and a garbage counter filled by the opponent.
//! Rendering and keyboard access sit behind the [`Screen`] and [`KeySource`]
//! traits so the engine runs the same against a terminal or a test double.

pub mod arena;
pub mod config;
pub mod game;
pub mod input;
pub mod mailbox;
pub mod player;
pub mod render;
pub mod shutdown;

pub use duel_tetris_core as core;
pub use duel_tetris_types as types;

pub use arena::Arena;
pub use config::EngineConfig;
pub use game::Game;
pub use input::{wait_for_quit, InputActor, KeySource, SharedKeys};
pub use mailbox::{GarbageChannel, InputQueue, PlayerInbox};
pub use player::{PlayerActor, Tick};
pub use render::{RenderActor, Screen};
pub use shutdown::Shutdown;
