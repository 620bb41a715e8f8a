//! Terminal keyboard input.
//!
//! Maps `crossterm` key events into raw [`types::Key`]s and exposes the
//! terminal as an engine [`engine::KeySource`]. Which player a key belongs to
//! is decided by the engine, not here.

pub mod map;
pub mod source;

pub use duel_tetris_engine as engine;
pub use duel_tetris_types as types;

pub use map::key_from_event;
pub use source::TerminalKeys;
