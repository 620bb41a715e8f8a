//! Board module - one player's well and falling piece
//!
//! The board is a 10x20 grid of cell values plus the active piece and a
//! terminal flag. Rows are fixed-size arrays, so every operation preserves the
//! grid shape by construction; line clears and garbage shifts move rows in
//! place instead of resizing anything.
//!
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom).
//! The active piece position is the top-left corner of its 4x4 template box and
//! its `y` may be negative while part of the box is above the well.

use crate::pieces::{get_shape, PieceShape};
use crate::rng::SimpleRng;
use crate::snapshot::BoardSnapshot;
use crate::types::{
    Cell, PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH, EMPTY_CELL, GARBAGE_CELL, SPAWN_X,
    SPAWN_Y,
};

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// One row of the well
pub type Row = [Cell; WIDTH];

/// The full well, row 0 at the top
pub type Grid = [Row; HEIGHT];

const EMPTY_ROW: Row = [EMPTY_CELL; WIDTH];

/// The falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// A piece of `kind` in the spawn pose
    pub fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: Rotation::North,
            x: SPAWN_X,
            y: SPAWN_Y,
        }
    }

    /// Get the shape (mino offsets) for current rotation
    pub fn shape(&self) -> PieceShape {
        get_shape(self.kind, self.rotation)
    }

    /// Absolute grid coordinates of the four minos (may be out of the well).
    pub fn cells(&self) -> [(i16, i16); 4] {
        let mut out = [(0, 0); 4];
        for (slot, &(dx, dy)) in out.iter_mut().zip(self.shape().iter()) {
            *slot = (self.x as i16 + dx as i16, self.y as i16 + dy as i16);
        }
        out
    }
}

/// One player's board
#[derive(Debug, Clone)]
pub struct Board {
    grid: Grid,
    active: ActivePiece,
    terminal: bool,
    rng: SimpleRng,
}

impl Board {
    /// Create an empty board with a freshly spawned piece
    pub fn new(seed: u32) -> Self {
        let mut board = Self {
            grid: [EMPTY_ROW; HEIGHT],
            active: ActivePiece::spawn(PieceKind::I),
            terminal: false,
            rng: SimpleRng::new(seed),
        };
        board.spawn();
        board
    }

    /// Reinitialize: empty grid, terminal cleared, new piece.
    ///
    /// This is the only transition out of the terminal state.
    pub fn reset(&mut self) {
        self.grid = [EMPTY_ROW; HEIGHT];
        self.terminal = false;
        self.spawn();
    }

    /// Get width of the board
    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    /// Get height of the board
    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn active(&self) -> ActivePiece {
        self.active
    }

    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn cell(&self, x: i8, y: i8) -> Option<Cell> {
        if x < 0 || y < 0 || x as usize >= WIDTH || y as usize >= HEIGHT {
            return None;
        }
        Some(self.grid[y as usize][x as usize])
    }

    /// Set cell at position (x, y) for scripted setups
    /// Returns false if out of bounds
    pub fn set_cell(&mut self, x: i8, y: i8, value: Cell) -> bool {
        if x < 0 || y < 0 || x as usize >= WIDTH || y as usize >= HEIGHT {
            return false;
        }
        self.grid[y as usize][x as usize] = value;
        true
    }

    /// Replace the active piece for scripted setups. No legality check.
    pub fn set_active(&mut self, piece: ActivePiece) {
        self.active = piece;
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.grid
            .get(y)
            .map(|row| row.iter().all(|&c| c != EMPTY_CELL))
            .unwrap_or(false)
    }

    /// Collision test for the active piece's kind at an arbitrary pose.
    pub fn collides(&self, x: i8, y: i8, rotation: Rotation) -> bool {
        self.collides_with(self.active.kind, x, y, rotation)
    }

    /// Collision test for any template at any pose.
    ///
    /// Minos left of column 0, right of the last column or at/below the floor
    /// collide. Minos above the well (`row < 0`) only collide with the walls.
    pub fn collides_with(&self, kind: PieceKind, x: i8, y: i8, rotation: Rotation) -> bool {
        get_shape(kind, rotation).iter().any(|&(dx, dy)| {
            let bx = x as i16 + dx as i16;
            let by = y as i16 + dy as i16;
            if bx < 0 || bx >= WIDTH as i16 || by >= HEIGHT as i16 {
                return true;
            }
            by >= 0 && self.grid[by as usize][bx as usize] != EMPTY_CELL
        })
    }

    /// Whether one more row of descent would collide.
    pub fn drop_would_collide(&self) -> bool {
        self.collides(self.active.x, self.active.y + 1, self.active.rotation)
    }

    /// Spawn a uniformly random piece in the spawn pose.
    ///
    /// A blocked spawn leaves the piece in place and marks the board terminal.
    pub fn spawn(&mut self) {
        if self.terminal {
            return;
        }
        self.active = ActivePiece::spawn(self.rng.next_piece());
        if self.collides(self.active.x, self.active.y, self.active.rotation) {
            self.terminal = true;
        }
    }

    /// Move the active piece by an offset if the target pose is legal.
    pub fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        if self.terminal {
            return false;
        }
        let (x, y) = (self.active.x + dx, self.active.y + dy);
        if self.collides(x, y, self.active.rotation) {
            return false;
        }
        self.active.x = x;
        self.active.y = y;
        true
    }

    /// Rotate clockwise in place; rejected on collision (no kicks).
    pub fn rotate(&mut self) -> bool {
        if self.terminal {
            return false;
        }
        let next = self.active.rotation.rotate_cw();
        if self.collides(self.active.x, self.active.y, next) {
            return false;
        }
        self.active.rotation = next;
        true
    }

    /// Write the active piece into the grid, then clear full rows.
    ///
    /// Minos above the well are dropped. Returns the number of rows cleared.
    pub fn lock_and_clear(&mut self) -> u32 {
        if self.terminal {
            return 0;
        }
        let color = self.active.kind.color_code();
        for (bx, by) in self.active.cells() {
            if by < 0 || by >= HEIGHT as i16 || bx < 0 || bx >= WIDTH as i16 {
                continue;
            }
            self.grid[by as usize][bx as usize] = color;
        }
        self.clear_full_rows()
    }

    /// Clear all full rows, shifting the rows above down, and return how many
    /// were removed. Non-contiguous full rows are handled in one pass.
    fn clear_full_rows(&mut self) -> u32 {
        let mut cleared = 0;
        let mut write_y = HEIGHT;

        // Scan from bottom to top, compacting kept rows towards the floor
        for read_y in (0..HEIGHT).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
            } else {
                write_y -= 1;
                if write_y != read_y {
                    self.grid[write_y] = self.grid[read_y];
                }
            }
        }

        for row in &mut self.grid[..write_y] {
            *row = EMPTY_ROW;
        }

        cleared
    }

    /// Push `lines` garbage rows in from the bottom.
    ///
    /// Each iteration first checks the top row: if anything is there the board
    /// becomes terminal and the remaining iterations are abandoned. Otherwise
    /// every row moves up by one and a garbage row with one random hole is
    /// appended. Returns the number of rows actually added.
    pub fn add_garbage(&mut self, lines: u32) -> u32 {
        let mut added = 0;
        for _ in 0..lines {
            if self.terminal {
                break;
            }
            if self.grid[0].iter().any(|&c| c != EMPTY_CELL) {
                self.terminal = true;
                break;
            }

            self.grid.copy_within(1..HEIGHT, 0);

            let mut row = [GARBAGE_CELL; WIDTH];
            row[self.rng.next_range(WIDTH as u32) as usize] = EMPTY_CELL;
            self.grid[HEIGHT - 1] = row;
            added += 1;
        }
        added
    }

    /// Copy of everything the renderer needs.
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            grid: self.grid,
            active: self.active,
            terminal: self.terminal,
        }
    }
}
