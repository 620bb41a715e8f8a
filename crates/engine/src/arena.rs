//! Shared match state: both boards, both scores, both inboxes, one shutdown flag.
//!
//! Each board sits behind its own mutex. The owning player actor holds the
//! lock for every check-then-mutate sequence; the render actor holds it only
//! long enough to copy a snapshot out. Whenever both boards are needed at
//! once they are locked player 1 first.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::core::{Board, BoardSnapshot, DuelFrame, SimpleRng};
use crate::mailbox::PlayerInbox;
use crate::shutdown::Shutdown;
use crate::types::{Outcome, PlayerId};

#[derive(Debug)]
pub struct Arena {
    boards: [Mutex<Board>; 2],
    scores: [AtomicU32; 2],
    inboxes: [PlayerInbox; 2],
    shutdown: Shutdown,
}

impl Arena {
    /// Two fresh boards whose seeds are drawn from `seed`.
    pub fn new(seed: u32) -> Self {
        let mut seeder = SimpleRng::new(seed);
        let p1 = Board::new(seeder.next_u32());
        let p2 = Board::new(seeder.next_u32());
        Self::with_boards(p1, p2)
    }

    /// Start from prepared boards (scripted scenarios).
    pub fn with_boards(p1: Board, p2: Board) -> Self {
        Self {
            boards: [Mutex::new(p1), Mutex::new(p2)],
            scores: [AtomicU32::new(0), AtomicU32::new(0)],
            inboxes: [PlayerInbox::new(), PlayerInbox::new()],
            shutdown: Shutdown::new(),
        }
    }

    /// Exclusive access to a player's board.
    pub fn lock_board(&self, player: PlayerId) -> MutexGuard<'_, Board> {
        self.boards[player.index()]
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    pub fn inbox(&self, player: PlayerId) -> &PlayerInbox {
        &self.inboxes[player.index()]
    }

    pub fn shutdown(&self) -> &Shutdown {
        &self.shutdown
    }

    /// Trigger shutdown and wake both player actors so they notice promptly.
    pub fn request_shutdown(&self) -> bool {
        let first = self.shutdown.trigger();
        for inbox in &self.inboxes {
            inbox.wake();
        }
        first
    }

    pub fn score(&self, player: PlayerId) -> u32 {
        self.scores[player.index()].load(Ordering::Acquire)
    }

    pub fn add_score(&self, player: PlayerId, points: u32) {
        if points > 0 {
            self.scores[player.index()].fetch_add(points, Ordering::AcqRel);
        }
    }

    pub fn scores(&self) -> [u32; 2] {
        [self.score(PlayerId::One), self.score(PlayerId::Two)]
    }

    /// Copy both boards, holding both locks (player 1 first) for the copy.
    pub fn snapshot_boards(&self) -> [BoardSnapshot; 2] {
        let p1 = self.lock_board(PlayerId::One);
        let p2 = self.lock_board(PlayerId::Two);
        [p1.snapshot(), p2.snapshot()]
    }

    pub fn is_terminal(&self, player: PlayerId) -> bool {
        self.lock_board(player).is_terminal()
    }

    /// Check each board under its own lock, one at a time.
    pub fn outcome(&self) -> Option<Outcome> {
        let p1_lost = self.is_terminal(PlayerId::One);
        let p2_lost = self.is_terminal(PlayerId::Two);
        Outcome::from_terminal(p1_lost, p2_lost)
    }

    /// A full frame: board snapshots under lock, scores read afterwards.
    pub fn frame(&self, outcome: Option<Outcome>) -> DuelFrame {
        let boards = self.snapshot_boards();
        DuelFrame {
            boards,
            scores: self.scores(),
            outcome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_accumulate_per_player() {
        let arena = Arena::new(7);
        assert_eq!(arena.scores(), [0, 0]);
        arena.add_score(PlayerId::Two, 40);
        arena.add_score(PlayerId::Two, 10);
        arena.add_score(PlayerId::One, 0);
        assert_eq!(arena.scores(), [0, 50]);
    }

    #[test]
    fn outcome_reflects_terminal_flags() {
        let arena = Arena::new(1);
        assert_eq!(arena.outcome(), None);

        {
            let mut board = arena.lock_board(PlayerId::Two);
            board.set_cell(0, 0, 1);
            board.add_garbage(1);
        }
        assert_eq!(arena.outcome(), Some(Outcome::PlayerOneWins));
    }

    #[test]
    fn request_shutdown_reports_first_caller() {
        let arena = Arena::new(1);
        assert!(arena.request_shutdown());
        assert!(!arena.request_shutdown());
        assert!(arena.shutdown().is_triggered());
    }
}
