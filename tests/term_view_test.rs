use duel_tetris::core::{ActivePiece, Board, DuelFrame};
use duel_tetris::term::duel_view::{cell_style, panel_origin, P1_ORIGIN, P2_ORIGIN};
use duel_tetris::term::{DuelView, FrameBuffer, Rgb, Viewport, MIN_VIEWPORT};
use duel_tetris::types::{Outcome, PieceKind, Rotation, GARBAGE_CELL};

fn frame_with(p1: Board, p2: Board) -> DuelFrame {
    DuelFrame {
        boards: [p1.snapshot(), p2.snapshot()],
        scores: [0, 0],
        outcome: None,
    }
}

/// Board whose active piece is a vertical I parked in the top-left corner.
fn quiet_board() -> Board {
    let mut board = Board::new(1);
    board.set_active(ActivePiece {
        kind: PieceKind::I,
        rotation: Rotation::East,
        x: -1,
        y: 0,
    });
    board
}

fn all_text(fb: &FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn term_view_renders_both_well_borders() {
    let fb = DuelView::new().render(&frame_with(quiet_board(), quiet_board()), MIN_VIEWPORT);

    for (x, y) in [P1_ORIGIN, P2_ORIGIN] {
        assert_eq!(fb.get(x, y).unwrap().ch, '┌');
        assert_eq!(fb.get(x + 21, y).unwrap().ch, '┐');
        assert_eq!(fb.get(x, y + 21).unwrap().ch, '└');
        assert_eq!(fb.get(x + 21, y + 21).unwrap().ch, '┘');
    }
}

#[test]
fn term_view_renders_cells_two_columns_wide() {
    let mut p2 = quiet_board();
    p2.set_cell(9, 19, 6);
    p2.set_cell(0, 19, GARBAGE_CELL);
    let fb = DuelView::new().render(&frame_with(quiet_board(), p2), MIN_VIEWPORT);

    let (x0, y0) = (P2_ORIGIN.0 + 1, P2_ORIGIN.1 + 1 + 19);
    let j = fb.get(x0 + 18, y0).unwrap();
    assert_eq!(j.ch, '█');
    assert_eq!(fb.get(x0 + 19, y0).unwrap(), j);
    assert_eq!(Some(j.style), cell_style(6));

    let garbage = fb.get(x0, y0).unwrap();
    assert_eq!(garbage.style.bg, Rgb::WHITE);
    assert_eq!(fb.get(x0 + 2, y0).unwrap().ch, ' ');
}

#[test]
fn term_view_overlays_active_piece() {
    let fb = DuelView::new().render(&frame_with(quiet_board(), quiet_board()), MIN_VIEWPORT);
    // Vertical I in column 0, rows 0..=3, inside player 1's border.
    for row in 0..4 {
        let g = fb.get(P1_ORIGIN.0 + 1, P1_ORIGIN.1 + 1 + row).unwrap();
        assert_eq!(g.ch, '█');
        assert_eq!(Some(g.style), cell_style(PieceKind::I.color_code()));
    }
    assert_eq!(fb.get(P1_ORIGIN.0 + 1, P1_ORIGIN.1 + 5).unwrap().ch, ' ');
}

#[test]
fn term_view_panel_shows_scores_and_quit_hint() {
    let mut frame = frame_with(quiet_board(), quiet_board());
    frame.scores = [1234, 90];
    let fb = DuelView::new().render(&frame, MIN_VIEWPORT);

    let (_, py) = panel_origin();
    assert!(fb.row_text(py + 1).contains("Player 1: 1234"));
    assert!(fb.row_text(py + 2).contains("Player 2: 90"));
    assert!(fb.row_text(py + 3).contains("Press 'q' to quit"));
    assert!(!all_text(&fb).contains("GAME OVER!"));
}

#[test]
fn term_view_announces_outcome() {
    let cases = [
        (Outcome::PlayerOneWins, "PLAYER 1 WINS!"),
        (Outcome::PlayerTwoWins, "PLAYER 2 WINS!"),
        (Outcome::Draw, "DRAW!"),
    ];
    for (outcome, text) in cases {
        let mut frame = frame_with(quiet_board(), quiet_board());
        frame.outcome = Some(outcome);
        let fb = DuelView::new().render(&frame, MIN_VIEWPORT);

        let (_, py) = panel_origin();
        assert!(fb.row_text(py + 1).contains("GAME OVER!"));
        assert!(fb.row_text(py + 2).contains(text));
        assert!(fb.row_text(py + 3).contains("Press 'q' to exit..."));
    }
}

#[test]
fn term_view_clips_to_small_viewport() {
    let frame = frame_with(quiet_board(), quiet_board());
    let fb = DuelView::new().render(&frame, Viewport::new(20, 10));
    assert_eq!((fb.width(), fb.height()), (20, 10));
    assert_eq!(fb.get(P1_ORIGIN.0, P1_ORIGIN.1).unwrap().ch, '┌');
}

#[test]
fn term_view_render_into_reuses_buffer() {
    let view = DuelView::new();
    let frame = frame_with(quiet_board(), quiet_board());
    let mut fb = FrameBuffer::new(1, 1);
    view.render_into(&frame, MIN_VIEWPORT, &mut fb);
    assert_eq!(fb, view.render(&frame, MIN_VIEWPORT));
}
