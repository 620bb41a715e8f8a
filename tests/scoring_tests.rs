use duel_tetris::core::{garbage_for_clear, line_clear_points, ClearReward};

#[test]
fn garbage_table_matches_clear_counts() {
    let expected = [(0, 0), (1, 0), (2, 1), (3, 2), (4, 3), (5, 3), (20, 3)];
    for (cleared, garbage) in expected {
        assert_eq!(garbage_for_clear(cleared), garbage, "cleared = {cleared}");
    }
}

#[test]
fn points_grow_with_square_of_rows() {
    for cleared in 0..=4 {
        assert_eq!(line_clear_points(cleared), cleared * cleared * 10);
    }
    assert_eq!(line_clear_points(u32::MAX), u32::MAX);
}

#[test]
fn single_line_scores_without_sending_garbage() {
    assert_eq!(
        ClearReward::for_lines(1),
        ClearReward {
            cleared: 1,
            points: 10,
            garbage: 0
        }
    );
    assert_eq!(ClearReward::for_lines(0), ClearReward::default());
}
