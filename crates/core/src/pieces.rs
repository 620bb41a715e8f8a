//! Piece catalog - the 7 tetrominoes in 4 rotations each
//!
//! Every template is a 4x4 occupancy mask packed into a `u16`. Each hex digit
//! is one row (most significant digit = row 0) and within a digit bit 3 is
//! column 0, so `0x0F00` is the horizontal I bar on row 1:
//!
//! ```text
//! 0x0F00  ->  ....
//!             ####
//!             ....
//!             ....
//! ```
//!
//! Rotation is a plain table lookup; there is no wall-kick data.

use crate::types::{PieceKind, Rotation};

/// Offset of a single mino inside the 4x4 template box, as `(col, row)`
pub type MinoOffset = (i8, i8);

/// Shape of a piece - 4 mino offsets in row-major order
pub type PieceShape = [MinoOffset; 4];

/// Template masks indexed by `[kind][rotation]`.
pub const TEMPLATES: [[u16; 4]; 7] = [
    // I
    [0x0F00, 0x4444, 0x00F0, 0x2222],
    // O
    [0x0660, 0x0660, 0x0660, 0x0660],
    // T
    [0x0E40, 0x4C40, 0x4E00, 0x4640],
    // S
    [0x06C0, 0x4620, 0x06C0, 0x4620],
    // Z
    [0x0C60, 0x2640, 0x0C60, 0x2640],
    // J
    [0x08E0, 0x6440, 0x0E20, 0x44C0],
    // L
    [0x02E0, 0x4460, 0x0E80, 0xC440],
];

/// Raw mask for a kind and rotation.
#[inline]
pub fn template(kind: PieceKind, rotation: Rotation) -> u16 {
    TEMPLATES[kind.index()][rotation.index()]
}

/// Whether the template has a block at `(col, row)` of its 4x4 box.
#[inline]
pub fn is_block(kind: PieceKind, rotation: Rotation, col: u8, row: u8) -> bool {
    if col > 3 || row > 3 {
        return false;
    }
    template(kind, rotation) & (1 << (15 - (row * 4 + col))) != 0
}

/// Get the shape (mino offsets) for a piece kind and rotation
pub fn get_shape(kind: PieceKind, rotation: Rotation) -> PieceShape {
    let mask = template(kind, rotation);
    let mut shape = [(0, 0); 4];
    let mut n = 0;
    for bit in 0..16u8 {
        if mask & (1 << (15 - bit)) != 0 && n < shape.len() {
            shape[n] = ((bit % 4) as i8, (bit / 4) as i8);
            n += 1;
        }
    }
    shape
}
