//! DuelView: maps a [`DuelFrame`] into a terminal framebuffer.
//!
//! Pure (no I/O). The layout is fixed: two bordered wells side by side and a
//! boxed score panel underneath the left one.

use crate::core::{BoardSnapshot, DuelFrame};
use crate::fb::{FrameBuffer, Rgb, Style};
use crate::types::{Outcome, PieceKind, PlayerId, BOARD_HEIGHT, BOARD_WIDTH, GARBAGE_CELL};

/// Terminal columns per board cell.
pub const CELL_W: u16 = 2;
/// Well origins (top-left corner of the border).
pub const P1_ORIGIN: (u16, u16) = (5, 2);
pub const P2_ORIGIN: (u16, u16) = (30, 2);
/// Score panel size.
pub const PANEL_W: u16 = 50;
pub const PANEL_H: u16 = 5;

const WELL_W: u16 = BOARD_WIDTH as u16 * CELL_W + 2;
const WELL_H: u16 = BOARD_HEIGHT as u16 + 2;
/// Column (inside the panel) where the outcome text starts.
const OUTCOME_COL: u16 = 25;

/// Smallest terminal that shows the whole layout.
pub const MIN_VIEWPORT: Viewport = Viewport {
    width: max(P2_ORIGIN.0 + WELL_W, P1_ORIGIN.0 + PANEL_W),
    height: P1_ORIGIN.1 + WELL_H + 1 + PANEL_H,
};

const fn max(a: u16, b: u16) -> u16 {
    if a > b {
        a
    } else {
        b
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn fits(&self, other: Viewport) -> bool {
        self.width >= other.width && self.height >= other.height
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DuelView;

impl DuelView {
    pub fn new() -> Self {
        Self
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, frame: &DuelFrame, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Style::default().glyph(' '));

        for player in PlayerId::ALL {
            let (x, y) = well_origin(player);
            self.draw_well(fb, &frame.boards[player.index()], x, y);
        }
        self.draw_panel(fb, frame);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, frame: &DuelFrame, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(frame, viewport, &mut fb);
        fb
    }

    fn draw_well(&self, fb: &mut FrameBuffer, board: &BoardSnapshot, x0: u16, y0: u16) {
        fb.draw_box(x0, y0, WELL_W, WELL_H, Style::fg(Rgb::new(200, 200, 200)));

        for y in 0..BOARD_HEIGHT as usize {
            for x in 0..BOARD_WIDTH as usize {
                let Some(style) = cell_style(board.composed_cell(x, y)) else {
                    continue;
                };
                let px = x0 + 1 + x as u16 * CELL_W;
                let py = y0 + 1 + y as u16;
                fb.fill_rect(px, py, CELL_W, 1, '█', style);
            }
        }
    }

    fn draw_panel(&self, fb: &mut FrameBuffer, frame: &DuelFrame) {
        let (x0, y0) = panel_origin();
        fb.draw_box(x0, y0, PANEL_W, PANEL_H, Style::fg(Rgb::new(200, 200, 200)));

        let text = Style::default();
        let x = x0 + 2;
        for player in PlayerId::ALL {
            let y = y0 + player.number() as u16;
            let end = fb.put_str(x, y, "Player ", text);
            let end = fb.put_u32(end, y, player.number() as u32, text);
            let end = fb.put_str(end, y, ": ", text);
            fb.put_u32(end, y, frame.scores[player.index()], text);
        }

        let Some(outcome) = frame.outcome else {
            fb.put_str(x, y0 + 3, "Press 'q' to quit", text);
            return;
        };
        let banner = Style::fg(Rgb::WHITE).bold();
        fb.put_str(x0 + OUTCOME_COL, y0 + 1, "GAME OVER!", banner);
        fb.put_str(x0 + OUTCOME_COL, y0 + 2, outcome_text(outcome), banner);
        fb.put_str(x, y0 + 3, "Press 'q' to exit...", text);
    }
}

pub fn well_origin(player: PlayerId) -> (u16, u16) {
    match player {
        PlayerId::One => P1_ORIGIN,
        PlayerId::Two => P2_ORIGIN,
    }
}

pub fn panel_origin() -> (u16, u16) {
    (P1_ORIGIN.0, P1_ORIGIN.1 + WELL_H + 1)
}

pub fn outcome_text(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::PlayerOneWins => "PLAYER 1 WINS!",
        Outcome::PlayerTwoWins => "PLAYER 2 WINS!",
        Outcome::Draw => "DRAW!",
    }
}

/// Style for a stored cell value; `None` for empty.
pub fn cell_style(value: u8) -> Option<Style> {
    if value == GARBAGE_CELL {
        return Some(Style {
            fg: Rgb::WHITE,
            bg: Rgb::WHITE,
            bold: false,
        });
    }
    let fg = match PieceKind::from_color_code(value)? {
        PieceKind::I => Rgb::new(0, 205, 205),
        PieceKind::O => Rgb::new(205, 205, 0),
        PieceKind::T => Rgb::new(205, 0, 205),
        PieceKind::S => Rgb::new(0, 205, 0),
        PieceKind::Z => Rgb::new(205, 0, 0),
        PieceKind::J => Rgb::new(0, 0, 238),
        PieceKind::L => Rgb::new(229, 229, 229),
    };
    Some(Style::fg(fg))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimum_viewport_covers_both_wells_and_panel() {
        assert_eq!(MIN_VIEWPORT, Viewport::new(55, 30));
        assert_eq!(panel_origin(), (5, 25));
    }

    #[test]
    fn empty_and_unknown_cells_have_no_style() {
        assert!(cell_style(0).is_none());
        assert!(cell_style(9).is_none());
        assert_eq!(cell_style(GARBAGE_CELL).map(|s| s.bg), Some(Rgb::WHITE));
        for kind in PieceKind::ALL {
            assert!(cell_style(kind.color_code()).is_some());
        }
    }
}
