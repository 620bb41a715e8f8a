//! Terminal presentation for a duel.
//!
//! Frames are drawn into a plain framebuffer (no widget toolkit) and flushed
//! with crossterm, diffing against the previous frame. Board cells are two
//! columns wide to compensate for the usual glyph aspect ratio.

pub mod duel_view;
pub mod fb;
pub mod render_throttle;
pub mod renderer;
pub mod screen;

pub use duel_tetris_core as core;
pub use duel_tetris_engine as engine;
pub use duel_tetris_types as types;

pub use duel_view::{DuelView, Viewport, MIN_VIEWPORT};
pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use render_throttle::RenderThrottle;
pub use renderer::{encode_frame_into, enter_terminal, leave_terminal, TerminalRenderer};
pub use screen::TerminalScreen;
