//! RNG module - piece and garbage-hole randomness
//!
//! Each board owns a small LCG so the two simulations never contend on a
//! shared generator. The clock is read once per process to derive the match
//! seed; everything after that is a pure function of it, which keeps tests
//! reproducible through [`SimpleRng::new`].

use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits; the low bits of a power-of-two LCG cycle quickly.
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Uniformly random piece kind.
    pub fn next_piece(&mut self) -> PieceKind {
        PieceKind::from_index(self.next_range(PieceKind::ALL.len() as u32) as usize)
    }
}

static PROCESS_SEED: OnceLock<u32> = OnceLock::new();

/// Seed for this process, taken from the wall clock on first use.
pub fn process_seed() -> u32 {
    *PROCESS_SEED.get_or_init(|| {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or(0);
        // Fold the 128-bit timestamp so sub-second entropy survives.
        (nanos as u32) ^ ((nanos >> 32) as u32) ^ ((nanos >> 64) as u32)
    })
}
