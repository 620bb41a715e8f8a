//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds the per-player simulation: the piece catalog, the board
//! state machine and the scoring/garbage tables. It has **zero dependencies**
//! on threads, terminals or logging, making it:
//!
//! - **Deterministic**: Same seed produces identical piece and hole sequences
//! - **Testable**: Every rule is a plain method on [`Board`]
//! - **Fast**: Boards are fixed-size arrays; no operation allocates
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 well with collision detection, locking, line clearing and garbage injection
//! - [`pieces`]: The 28 4x4 template masks
//! - [`rng`]: Per-board LCG and the once-per-process seed
//! - [`scoring`]: Points and garbage for a lock
//! - [`snapshot`]: Copyable views handed to the renderer
//!
//! # Board Lifecycle
//!
//! ```text
//! spawn ──▶ fall (try_move / rotate) ──▶ lock_and_clear ──▶ spawn ...
//!   │                                                      │
//!   └── blocked ──▶ terminal ◀── add_garbage overflow ◀────┘
//! ```
//!
//! # Example
//!
//! ```
//! use duel_tetris_core::{scoring::garbage_for_clear, Board};
//!
//! let mut board = Board::new(12345);
//! while board.try_move(0, 1) {}
//! let cleared = board.lock_and_clear();
//! assert_eq!(cleared, 0);
//! assert_eq!(garbage_for_clear(cleared), 0);
//!
//! board.spawn();
//! assert!(!board.is_terminal());
//! ```

pub mod board;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use duel_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::{ActivePiece, Board, Grid, Row};
pub use pieces::{get_shape, is_block, PieceShape};
pub use rng::{process_seed, SimpleRng};
pub use scoring::{garbage_for_clear, line_clear_points, ClearReward};
pub use snapshot::{BoardSnapshot, DuelFrame};
