//! Player actor - one board's simulation loop.
//!
//! Each tick runs three phases in a fixed order:
//!
//! 1. apply garbage received from the opponent,
//! 2. apply every queued command, oldest first,
//! 3. apply gravity if the interval has elapsed since the last fall or lock.
//!
//! Garbage always goes first so a player who keeps moving cannot starve an
//! incoming handicap. A lock (from a blocked soft drop or from gravity) writes
//! the piece, clears rows, spawns the next piece, then scores and sends
//! garbage to the opponent. A blocked spawn or a garbage overflow tops the
//! board out, which stops this actor and requests shutdown.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::arena::Arena;
use crate::config::EngineConfig;
use crate::core::{Board, ClearReward};
use crate::types::{Command, PlayerId};

/// Result of one logical tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Continue,
    /// The board went terminal during this tick; the actor must stop.
    ToppedOut,
}

pub struct PlayerActor {
    id: PlayerId,
    arena: Arc<Arena>,
    gravity: Duration,
    poll: Duration,
    last_fall: Instant,
}

impl PlayerActor {
    pub fn new(id: PlayerId, arena: Arc<Arena>, config: &EngineConfig) -> Self {
        Self {
            id,
            arena,
            gravity: config.gravity,
            poll: config.player_poll,
            last_fall: Instant::now(),
        }
    }

    /// Restart the gravity clock at `now` (for driving [`PlayerActor::step`] by hand).
    pub fn starting_at(mut self, now: Instant) -> Self {
        self.last_fall = now;
        self
    }

    /// Loop until shutdown or top-out.
    pub fn run(mut self) {
        let player = self.id.number();
        info!(player, "player actor started");
        while !self.arena.shutdown().is_triggered() {
            if self.step(Instant::now()) == Tick::ToppedOut {
                break;
            }
            let budget = self.idle_budget(Instant::now());
            self.arena.inbox(self.id).wait(budget);
        }
        info!(player, "player actor stopped");
    }

    /// One tick: garbage, then input, then gravity.
    pub fn step(&mut self, now: Instant) -> Tick {
        let arena = Arc::clone(&self.arena);
        let inbox = arena.inbox(self.id);

        let garbage = inbox.take_garbage();
        if garbage > 0 {
            let mut board = arena.lock_board(self.id);
            let added = board.add_garbage(garbage);
            debug!(player = self.id.number(), pending = garbage, added, "garbage applied");
            if board.is_terminal() {
                return self.top_out("garbage overflow");
            }
        }

        let mut commands = inbox.take_commands().peekable();
        if commands.peek().is_some() {
            let mut board = arena.lock_board(self.id);
            for cmd in commands {
                match cmd {
                    Command::MoveLeft => {
                        board.try_move(-1, 0);
                    }
                    Command::MoveRight => {
                        board.try_move(1, 0);
                    }
                    Command::Rotate => {
                        board.rotate();
                    }
                    Command::SoftDrop => {
                        self.last_fall = now;
                        if !board.try_move(0, 1) && self.settle(&mut board).is_none() {
                            return self.top_out("spawn blocked");
                        }
                    }
                }
            }
        }

        if now.saturating_duration_since(self.last_fall) >= self.gravity {
            self.last_fall = now;
            let mut board = arena.lock_board(self.id);
            if board.drop_would_collide() {
                if self.settle(&mut board).is_none() {
                    return self.top_out("spawn blocked");
                }
            } else {
                board.try_move(0, 1);
            }
        }

        Tick::Continue
    }

    /// How long to idle before the next tick.
    pub fn idle_budget(&self, now: Instant) -> Duration {
        (self.last_fall + self.gravity)
            .saturating_duration_since(now)
            .min(self.poll)
    }

    /// Lock, clear, respawn; then score and send garbage.
    ///
    /// Returns `None` if the respawn topped the board out, in which case
    /// nothing is scored or sent.
    fn settle(&self, board: &mut Board) -> Option<ClearReward> {
        let cleared = board.lock_and_clear();
        board.spawn();
        if board.is_terminal() {
            return None;
        }

        let reward = ClearReward::for_lines(cleared);
        self.arena.add_score(self.id, reward.points);
        if reward.garbage > 0 {
            self.arena
                .inbox(self.id.opponent())
                .send_garbage(reward.garbage);
            info!(
                player = self.id.number(),
                cleared,
                garbage = reward.garbage,
                "garbage sent"
            );
        } else {
            debug!(player = self.id.number(), cleared, "piece locked");
        }
        Some(reward)
    }

    fn top_out(&self, reason: &'static str) -> Tick {
        info!(player = self.id.number(), reason, "board topped out");
        self.arena.request_shutdown();
        Tick::ToppedOut
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ActivePiece;
    use crate::types::{PieceKind, Rotation, GARBAGE_CELL};

    fn arena_with_p1_piece(piece: ActivePiece) -> Arc<Arena> {
        let mut p1 = Board::new(11);
        p1.set_active(piece);
        Arc::new(Arena::with_boards(p1, Board::new(12)))
    }

    fn actor(arena: &Arc<Arena>, start: Instant) -> PlayerActor {
        PlayerActor::new(PlayerId::One, Arc::clone(arena), &EngineConfig::default())
            .starting_at(start)
    }

    #[test]
    fn commands_apply_in_order() {
        let arena = arena_with_p1_piece(ActivePiece::spawn(PieceKind::T));
        let t0 = Instant::now();
        let mut p1 = actor(&arena, t0);

        let inbox = arena.inbox(PlayerId::One);
        inbox.push_command(Command::MoveLeft);
        inbox.push_command(Command::MoveLeft);
        inbox.push_command(Command::MoveRight);
        inbox.push_command(Command::Rotate);

        assert_eq!(p1.step(t0), Tick::Continue);
        let active = arena.lock_board(PlayerId::One).active();
        assert_eq!(active.x, 2);
        assert_eq!(active.rotation, Rotation::East);
    }

    #[test]
    fn gravity_waits_for_interval() {
        let arena = arena_with_p1_piece(ActivePiece::spawn(PieceKind::O));
        let t0 = Instant::now();
        let mut p1 = actor(&arena, t0);

        p1.step(t0 + Duration::from_millis(999));
        assert_eq!(arena.lock_board(PlayerId::One).active().y, 0);

        p1.step(t0 + Duration::from_millis(1000));
        assert_eq!(arena.lock_board(PlayerId::One).active().y, 1);

        // Clock restarted at the fall.
        p1.step(t0 + Duration::from_millis(1500));
        assert_eq!(arena.lock_board(PlayerId::One).active().y, 1);
    }

    #[test]
    fn garbage_is_applied_before_input() {
        let arena = arena_with_p1_piece(ActivePiece::spawn(PieceKind::O));
        let t0 = Instant::now();
        let mut p1 = actor(&arena, t0);

        arena.inbox(PlayerId::One).send_garbage(2);
        arena.inbox(PlayerId::One).push_command(Command::MoveLeft);
        assert_eq!(p1.step(t0), Tick::Continue);

        let board = arena.lock_board(PlayerId::One);
        for y in [18usize, 19] {
            let filled = board.grid()[y].iter().filter(|&&c| c == GARBAGE_CELL).count();
            assert_eq!(filled, 9);
        }
        assert_eq!(board.active().x, 2);
    }

    #[test]
    fn idle_budget_is_bounded_by_poll_and_gravity() {
        let arena = arena_with_p1_piece(ActivePiece::spawn(PieceKind::O));
        let t0 = Instant::now();
        let p1 = actor(&arena, t0);
        assert_eq!(p1.idle_budget(t0), Duration::from_millis(50));
        assert_eq!(
            p1.idle_budget(t0 + Duration::from_millis(980)),
            Duration::from_millis(20)
        );
        assert_eq!(
            p1.idle_budget(t0 + Duration::from_secs(5)),
            Duration::ZERO
        );
    }
}
