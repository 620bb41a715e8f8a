use crate::board::{ActivePiece, Grid};
use crate::types::{Outcome, BOARD_HEIGHT, BOARD_WIDTH, EMPTY_CELL};

/// Read-only copy of one board, taken under that board's lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardSnapshot {
    pub grid: Grid,
    pub active: ActivePiece,
    pub terminal: bool,
}

impl BoardSnapshot {
    /// Cell value with the active piece drawn over the grid.
    ///
    /// Out-of-range coordinates read as empty.
    pub fn composed_cell(&self, x: usize, y: usize) -> u8 {
        if x >= BOARD_WIDTH as usize || y >= BOARD_HEIGHT as usize {
            return EMPTY_CELL;
        }
        let overlay = self
            .active
            .cells()
            .iter()
            .any(|&(ax, ay)| ax == x as i16 && ay == y as i16);
        if overlay {
            self.active.kind.color_code()
        } else {
            self.grid[y][x]
        }
    }
}

/// Everything the screen draws in one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DuelFrame {
    pub boards: [BoardSnapshot; 2],
    pub scores: [u32; 2],
    pub outcome: Option<Outcome>,
}

impl DuelFrame {
    /// FNV-1a 64-bit hash of the visible state.
    pub fn fingerprint(&self) -> u64 {
        let mut h = Fnv64::new();
        for board in &self.boards {
            for row in board.grid.iter() {
                h.write(row);
            }
            let a = board.active;
            h.write(&[
                a.kind.color_code(),
                a.rotation.index() as u8,
                a.x as u8,
                a.y as u8,
                board.terminal as u8,
            ]);
        }
        for score in self.scores {
            h.write(&score.to_le_bytes());
        }
        h.write(&[match self.outcome {
            None => 0,
            Some(Outcome::PlayerOneWins) => 1,
            Some(Outcome::PlayerTwoWins) => 2,
            Some(Outcome::Draw) => 3,
        }]);
        h.finish()
    }
}

struct Fnv64 {
    state: u64,
}

impl Fnv64 {
    const OFFSET: u64 = 0xcbf29ce484222325;
    const PRIME: u64 = 0x00000100000001B3;

    fn new() -> Self {
        Self {
            state: Self::OFFSET,
        }
    }

    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.state ^= b as u64;
            self.state = self.state.wrapping_mul(Self::PRIME);
        }
    }

    fn finish(&self) -> u64 {
        self.state
    }
}
