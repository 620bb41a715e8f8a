//! Scoring module - points and garbage for a single lock
//!
//! Both tables depend only on how many rows one lock cleared:
//!
//! | Cleared | Points | Garbage sent |
//! |---------|--------|--------------|
//! | 0 | 0 | 0 |
//! | 1 | 10 | 0 |
//! | 2 | 40 | 1 |
//! | 3 | 90 | 2 |
//! | 4+ | `n² × 10` | 3 |

use crate::types::{LINE_CLEAR_MULTIPLIER, MAX_GARBAGE_PER_CLEAR};

/// Points awarded for clearing `cleared` rows with one lock.
pub fn line_clear_points(cleared: u32) -> u32 {
    cleared
        .saturating_mul(cleared)
        .saturating_mul(LINE_CLEAR_MULTIPLIER)
}

/// Garbage rows sent to the opponent for clearing `cleared` rows with one lock.
pub fn garbage_for_clear(cleared: u32) -> u32 {
    match cleared {
        0 | 1 => 0,
        2 | 3 => cleared - 1,
        _ => MAX_GARBAGE_PER_CLEAR,
    }
}

/// Score and garbage for one lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClearReward {
    pub cleared: u32,
    pub points: u32,
    pub garbage: u32,
}

impl ClearReward {
    pub fn for_lines(cleared: u32) -> Self {
        Self {
            cleared,
            points: line_clear_points(cleared),
            garbage: garbage_for_clear(cleared),
        }
    }
}
