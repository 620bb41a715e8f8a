use duel_tetris::core::{Board, DuelFrame};
use duel_tetris::term::RenderThrottle;

#[test]
fn render_throttle_renders_first_frame() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, 1));
}

#[test]
fn render_throttle_renders_on_change() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, 1));
    assert!(t.should_render(1, 2));
    assert!(t.should_render(2, 1));
}

#[test]
fn render_throttle_skips_unchanged_until_refresh() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, 1));
    assert!(!t.should_render(10, 1));
    assert!(!t.should_render(249, 1));
    assert!(t.should_render(250, 1));
    assert!(!t.should_render(251, 1));
}

#[test]
fn render_throttle_reset_forces_render() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, 1));
    t.reset();
    assert!(t.should_render(1, 1));
}

#[test]
fn frame_fingerprint_drives_throttle() {
    let mut board = Board::new(4);
    let before = DuelFrame {
        boards: [board.snapshot(), board.snapshot()],
        scores: [0, 0],
        outcome: None,
    };
    board.try_move(1, 0);
    let after = DuelFrame {
        boards: [board.snapshot(), before.boards[1]],
        ..before
    };

    let mut t = RenderThrottle::new(1000);
    assert!(t.should_render(0, before.fingerprint()));
    assert!(!t.should_render(5, before.fingerprint()));
    assert!(t.should_render(6, after.fingerprint()));
}
