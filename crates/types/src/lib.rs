//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the duel.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (board simulation, actors, terminal rendering, key mapping).
//!
//! # Board Dimensions
//!
//! Both players get the same fixed playfield:
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Spawn position**: (3, 0), i.e. the 4x4 template box horizontally centered
//!
//! # Cell Values
//!
//! | Value | Meaning |
//! |-------|---------|
//! | `0` | Empty |
//! | `1..=7` | Locked piece, colored by kind (I, O, T, S, Z, J, L) |
//! | `8` | Garbage received from the opponent |
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GRAVITY_MS` | 1000 | Forced one-row descent interval |
//! | `PLAYER_POLL_MS` | 50 | Upper bound on a player actor's idle wait |
//! | `RENDER_INTERVAL_MS` | 33 | Render cadence (~30 draws/second) |
//! | `INPUT_POLL_MS` | 10 | Keyboard poll cadence when no key is pending |
//!
//! # Examples
//!
//! ```
//! use duel_tetris_types::{classify, Command, Key, KeyAction, PlayerId, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(
//!     classify(Key::Char('a')),
//!     Some(KeyAction::Player(PlayerId::One, Command::MoveLeft))
//! );
//! assert_eq!(
//!     classify(Key::Char('k')),
//!     Some(KeyAction::Player(PlayerId::Two, Command::SoftDrop))
//! );
//! assert_eq!(classify(Key::Char('q')), Some(KeyAction::Quit));
//! assert_eq!(classify(Key::Char('x')), None);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Horizontal spawn offset of the 4x4 template box.
pub const SPAWN_X: i8 = (BOARD_WIDTH / 2) as i8 - 2;

/// Vertical spawn offset of the 4x4 template box.
pub const SPAWN_Y: i8 = 0;

/// Empty cell value.
pub const EMPTY_CELL: Cell = 0;

/// Cell value written for every filled cell of an injected garbage row.
pub const GARBAGE_CELL: Cell = 8;

/// Gravity interval in milliseconds (one row per second).
pub const GRAVITY_MS: u32 = 1000;

/// Bounded idle wait of a player actor between ticks.
pub const PLAYER_POLL_MS: u32 = 50;

/// Render cadence in milliseconds (~30 FPS).
pub const RENDER_INTERVAL_MS: u32 = 33;

/// Keyboard poll cadence in milliseconds.
pub const INPUT_POLL_MS: u32 = 10;

/// Points per squared line count (`cleared² × 10`).
pub const LINE_CLEAR_MULTIPLIER: u32 = 10;

/// Most garbage rows a single lock can send.
pub const MAX_GARBAGE_PER_CLEAR: u32 = 3;

/// A cell on the game board (see the module docs for the value table).
pub type Cell = u8;

/// The seven tetromino piece kinds
///
/// The declaration order is the template index (0-6); the stored color of a
/// locked cell is `index + 1`:
/// - **I**: Cyan
/// - **O**: Yellow
/// - **T**: Magenta
/// - **S**: Green
/// - **Z**: Red
/// - **J**: Blue
/// - **L**: White
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds in template order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Template index (0-6).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Kind for a template index; wraps modulo 7.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// Value stored in the grid when a cell of this kind locks (1-7).
    ///
    /// # Examples
    ///
    /// ```
    /// use duel_tetris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::I.color_code(), 1);
    /// assert_eq!(PieceKind::L.color_code(), 7);
    /// ```
    pub fn color_code(self) -> Cell {
        self.index() as Cell + 1
    }

    /// Inverse of [`PieceKind::color_code`]. Garbage and empty cells map to `None`.
    pub fn from_color_code(code: Cell) -> Option<Self> {
        match code {
            1..=7 => Some(Self::ALL[code as usize - 1]),
            _ => None,
        }
    }
}

/// Rotation states of a template
///
/// The cycle goes: North → East → South → West → North. Only clockwise
/// rotation is exposed to players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// All rotations in template order.
    pub const ALL: [Rotation; 4] = [
        Rotation::North,
        Rotation::East,
        Rotation::South,
        Rotation::West,
    ];

    /// Rotate clockwise (90°)
    ///
    /// # Examples
    ///
    /// ```
    /// use duel_tetris_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Template index (0-3).
    pub fn index(self) -> usize {
        self as usize
    }
}

/// One of the two seats at the shared screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    pub const ALL: [PlayerId; 2] = [PlayerId::One, PlayerId::Two];

    /// Array slot for per-player state (0 or 1).
    pub fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }

    /// The player garbage is sent to.
    pub fn opponent(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// 1-based seat number for display.
    pub fn number(self) -> u8 {
        self.index() as u8 + 1
    }
}

/// Commands a player can queue for their own board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Rotate piece 90° clockwise (no wall kicks)
    Rotate,
    /// Move piece one cell down; locks the piece when blocked
    SoftDrop,
}

/// A raw key as delivered by the keyboard backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A printable key, already lowercased by the backend.
    Char(char),
    /// Terminal interrupt (Ctrl-C).
    Interrupt,
}

/// What a recognized key means to the duel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    Quit,
    Player(PlayerId, Command),
}

/// A player's four-key control set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlSet {
    pub left: char,
    pub right: char,
    pub rotate: char,
    pub soft_drop: char,
}

impl ControlSet {
    /// Command bound to `ch` in this set, if any.
    pub fn command_for(&self, ch: char) -> Option<Command> {
        if ch == self.left {
            Some(Command::MoveLeft)
        } else if ch == self.right {
            Some(Command::MoveRight)
        } else if ch == self.rotate {
            Some(Command::Rotate)
        } else if ch == self.soft_drop {
            Some(Command::SoftDrop)
        } else {
            None
        }
    }
}

/// Player 1 plays on the left side of the keyboard.
pub const P1_CONTROLS: ControlSet = ControlSet {
    left: 'a',
    right: 'd',
    rotate: 'w',
    soft_drop: 's',
};

/// Player 2 plays on the right side of the keyboard.
pub const P2_CONTROLS: ControlSet = ControlSet {
    left: 'j',
    right: 'l',
    rotate: 'i',
    soft_drop: 'k',
};

/// Global quit key.
pub const QUIT_KEY: char = 'q';

/// Controls for a seat.
pub fn controls(player: PlayerId) -> &'static ControlSet {
    match player {
        PlayerId::One => &P1_CONTROLS,
        PlayerId::Two => &P2_CONTROLS,
    }
}

/// Classify a raw key by ownership. Unrecognized keys yield `None`.
pub fn classify(key: Key) -> Option<KeyAction> {
    let ch = match key {
        Key::Interrupt => return Some(KeyAction::Quit),
        Key::Char(ch) => ch,
    };
    if ch == QUIT_KEY {
        return Some(KeyAction::Quit);
    }
    PlayerId::ALL.into_iter().find_map(|player| {
        controls(player)
            .command_for(ch)
            .map(|cmd| KeyAction::Player(player, cmd))
    })
}

/// Result of a finished match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    PlayerOneWins,
    PlayerTwoWins,
    /// Both boards were terminal in the same observation.
    Draw,
}

impl Outcome {
    /// Decide the outcome from the two terminal flags; `None` while both are alive.
    ///
    /// # Examples
    ///
    /// ```
    /// use duel_tetris_types::Outcome;
    ///
    /// assert_eq!(Outcome::from_terminal(false, false), None);
    /// assert_eq!(Outcome::from_terminal(true, false), Some(Outcome::PlayerTwoWins));
    /// assert_eq!(Outcome::from_terminal(true, true), Some(Outcome::Draw));
    /// ```
    pub fn from_terminal(p1_lost: bool, p2_lost: bool) -> Option<Self> {
        match (p1_lost, p2_lost) {
            (false, false) => None,
            (true, false) => Some(Outcome::PlayerTwoWins),
            (false, true) => Some(Outcome::PlayerOneWins),
            (true, true) => Some(Outcome::Draw),
        }
    }

    pub fn winner(self) -> Option<PlayerId> {
        match self {
            Outcome::PlayerOneWins => Some(PlayerId::One),
            Outcome::PlayerTwoWins => Some(PlayerId::Two),
            Outcome::Draw => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timing_defaults() {
        assert_eq!(GRAVITY_MS, 1000);
        assert_eq!(PLAYER_POLL_MS, 50);
        assert_eq!(RENDER_INTERVAL_MS, 33);
        assert_eq!(INPUT_POLL_MS, 10);
    }

    #[test]
    fn spawn_box_is_centered() {
        assert_eq!(SPAWN_X, 3);
        assert_eq!(SPAWN_Y, 0);
    }

    #[test]
    fn color_codes_round_trip_and_skip_garbage() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_color_code(kind.color_code()), Some(kind));
        }
        assert_eq!(PieceKind::from_color_code(EMPTY_CELL), None);
        assert_eq!(PieceKind::from_color_code(GARBAGE_CELL), None);
    }

    #[test]
    fn control_sets_do_not_overlap() {
        for ch in ['a', 'd', 'w', 's'] {
            assert!(P2_CONTROLS.command_for(ch).is_none());
        }
        for ch in ['j', 'l', 'i', 'k'] {
            assert!(P1_CONTROLS.command_for(ch).is_none());
        }
    }

    #[test]
    fn classify_player_two_keys() {
        assert_eq!(
            classify(Key::Char('j')),
            Some(KeyAction::Player(PlayerId::Two, Command::MoveLeft))
        );
        assert_eq!(
            classify(Key::Char('l')),
            Some(KeyAction::Player(PlayerId::Two, Command::MoveRight))
        );
        assert_eq!(
            classify(Key::Char('i')),
            Some(KeyAction::Player(PlayerId::Two, Command::Rotate))
        );
        assert_eq!(classify(Key::Interrupt), Some(KeyAction::Quit));
    }

    #[test]
    fn opponent_is_symmetric() {
        for p in PlayerId::ALL {
            assert_eq!(p.opponent().opponent(), p);
            assert_ne!(p.opponent(), p);
        }
    }
}
