//! Per-player inbox: queued commands, pending garbage and a wake signal.
//!
//! Commands travel over an unbounded channel from the input actor. Garbage
//! is summed in an atomic counter so any number of clears collapse into one
//! pending count. Garbage delivery and shutdown post a wake message, and the
//! player actor blocks until either channel is ready or its tick budget runs
//! out.

use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use crossbeam_channel::{bounded, unbounded, Receiver, Select, Sender};

use crate::types::Command;

/// FIFO of commands for one player.
#[derive(Debug)]
pub struct InputQueue {
    tx: Sender<Command>,
    rx: Receiver<Command>,
}

impl Default for InputQueue {
    fn default() -> Self {
        let (tx, rx) = unbounded();
        Self { tx, rx }
    }
}

impl InputQueue {
    pub fn push(&self, cmd: Command) {
        // The receiver lives in the same struct, so the channel never disconnects.
        let _ = self.tx.send(cmd);
    }

    /// Commands queued at the time of the call, oldest first.
    ///
    /// Commands pushed while the iterator is consumed wait for the next drain.
    pub fn drain(&self) -> impl Iterator<Item = Command> + '_ {
        let queued = self.rx.len();
        self.rx.try_iter().take(queued)
    }

    pub fn len(&self) -> usize {
        self.rx.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rx.is_empty()
    }
}

/// Accumulated garbage rows waiting to be applied.
///
/// Sends add to the count and a take reads and zeroes it atomically, so
/// any interleaving of senders and the receiver conserves the total.
#[derive(Debug, Default)]
pub struct GarbageChannel {
    pending: AtomicU32,
}

impl GarbageChannel {
    pub fn send(&self, lines: u32) {
        if lines > 0 {
            self.pending.fetch_add(lines, Ordering::AcqRel);
        }
    }

    pub fn take(&self) -> u32 {
        self.pending.swap(0, Ordering::AcqRel)
    }

    pub fn pending(&self) -> u32 {
        self.pending.load(Ordering::Acquire)
    }
}

/// Everything addressed to one player actor.
#[derive(Debug)]
pub struct PlayerInbox {
    input: InputQueue,
    garbage: GarbageChannel,
    wake_tx: Sender<()>,
    wake_rx: Receiver<()>,
}

impl Default for PlayerInbox {
    fn default() -> Self {
        // One slot: repeated wakes before the owner looks collapse into one.
        let (wake_tx, wake_rx) = bounded(1);
        Self {
            input: InputQueue::default(),
            garbage: GarbageChannel::default(),
            wake_tx,
            wake_rx,
        }
    }
}

impl PlayerInbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_command(&self, cmd: Command) {
        self.input.push(cmd);
    }

    pub fn send_garbage(&self, lines: u32) {
        if lines == 0 {
            return;
        }
        self.garbage.send(lines);
        self.wake();
    }

    pub fn take_commands(&self) -> impl Iterator<Item = Command> + '_ {
        self.input.drain()
    }

    pub fn take_garbage(&self) -> u32 {
        self.garbage.take()
    }

    pub fn pending_garbage(&self) -> u32 {
        self.garbage.pending()
    }

    pub fn queued_commands(&self) -> usize {
        self.input.len()
    }

    /// Block until a command is queued, a wake arrives or `timeout` elapses.
    ///
    /// Queued commands are left in place for [`PlayerInbox::take_commands`];
    /// a pending wake is consumed. Returns whether anything was ready.
    pub fn wait(&self, timeout: Duration) -> bool {
        let mut sel = Select::new();
        sel.recv(&self.input.rx);
        sel.recv(&self.wake_rx);
        let ready = sel.ready_timeout(timeout).is_ok();
        while self.wake_rx.try_recv().is_ok() {}
        ready
    }

    /// Wake the owner without delivering anything (used on shutdown).
    pub fn wake(&self) {
        // Full means a wake is already pending.
        let _ = self.wake_tx.try_send(());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;
    use std::time::Instant;

    #[test]
    fn drain_preserves_fifo_order() {
        let inbox = PlayerInbox::new();
        inbox.push_command(Command::MoveLeft);
        inbox.push_command(Command::Rotate);
        inbox.push_command(Command::SoftDrop);

        let drained: Vec<_> = inbox.take_commands().collect();
        assert_eq!(
            drained,
            vec![Command::MoveLeft, Command::Rotate, Command::SoftDrop]
        );
        assert_eq!(inbox.queued_commands(), 0);
    }

    #[test]
    fn drain_stops_at_commands_queued_before_it() {
        let inbox = PlayerInbox::new();
        inbox.push_command(Command::MoveLeft);

        let mut drained = Vec::new();
        for cmd in inbox.take_commands() {
            drained.push(cmd);
            inbox.push_command(Command::MoveRight);
        }
        assert_eq!(drained, vec![Command::MoveLeft]);
        assert_eq!(inbox.queued_commands(), 1);
    }

    #[test]
    fn garbage_accumulates_until_taken() {
        let inbox = PlayerInbox::new();
        inbox.send_garbage(2);
        inbox.send_garbage(0);
        inbox.send_garbage(3);
        assert_eq!(inbox.pending_garbage(), 5);
        assert_eq!(inbox.take_garbage(), 5);
        assert_eq!(inbox.take_garbage(), 0);
    }

    #[test]
    fn wake_before_wait_is_not_lost() {
        let inbox = PlayerInbox::new();
        inbox.wake();
        inbox.wake();
        let start = Instant::now();
        assert!(inbox.wait(Duration::from_secs(5)));
        assert!(start.elapsed() < Duration::from_secs(1));
        // Both wakes collapsed into one and were consumed by the first wait.
        assert!(!inbox.wait(Duration::from_millis(5)));
    }

    #[test]
    fn queued_command_keeps_wait_ready_until_drained() {
        let inbox = PlayerInbox::new();
        inbox.push_command(Command::Rotate);
        assert!(inbox.wait(Duration::from_secs(5)));
        assert!(inbox.wait(Duration::from_secs(5)));
        assert_eq!(inbox.take_commands().count(), 1);
        assert!(!inbox.wait(Duration::from_millis(5)));
    }

    #[test]
    fn wait_wakes_on_garbage_from_another_thread() {
        let inbox = Arc::new(PlayerInbox::new());
        let sender = Arc::clone(&inbox);
        let handle = thread::spawn(move || {
            thread::sleep(Duration::from_millis(20));
            sender.send_garbage(1);
        });
        assert!(inbox.wait(Duration::from_secs(5)));
        assert_eq!(inbox.take_garbage(), 1);
        handle.join().unwrap();
    }
}
