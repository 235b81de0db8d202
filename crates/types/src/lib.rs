//! Core types module - shared data structures and constants
//!
//! This crate defines the fundamental types used throughout the workspace.
//! All types are plain data with no external dependencies, so they can be used
//! by the engine, the render adapter and the input adapter alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//!
//! # Gravity
//!
//! The gravity interval shrinks by [`GRAVITY_STEP_MS`] per level and never
//! drops below [`GRAVITY_FLOOR_MS`]:
//!
//! | Level | Interval |
//! |-------|----------|
//! | 1 | 800ms |
//! | 2 | 720ms |
//! | 5 | 480ms |
//! | 9 | 160ms |
//! | 10+ | 100ms |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{GameAction, Phase, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::ALL.len(), 7);
//! assert_eq!(PieceKind::T.letter(), 'T');
//! assert_eq!(Phase::default(), Phase::Idle);
//! assert_eq!(GameAction::HardDrop.as_str(), "hardDrop");
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Gravity interval at level 1
pub const GRAVITY_BASE_MS: u32 = 800;

/// Gravity speed-up per level above 1
pub const GRAVITY_STEP_MS: u32 = 80;

/// Fastest gravity interval
pub const GRAVITY_FLOOR_MS: u32 = 100;

/// Cleared lines needed to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Base points for a line clear; scaled by `lines² × level`
pub const LINE_CLEAR_BASE: u32 = 100;

const _: () = assert!(BOARD_WIDTH > 0 && BOARD_HEIGHT > 0);

/// The seven tetromino piece kinds
///
/// Each kind has a fixed display color:
/// - **I**: Cyan, horizontal bar
/// - **O**: Yellow, 2x2 square
/// - **T**: Purple, T-shaped
/// - **S**: Green, S-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
/// - **J**: Blue, J-shaped
/// - **L**: Orange, L-shaped (mirror of J)
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
    /// All kinds, in the order the spawner indexes them.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Display color as `(r, g, b)`.
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            PieceKind::I => (0, 240, 240),
            PieceKind::O => (240, 240, 0),
            PieceKind::T => (160, 0, 240),
            PieceKind::S => (0, 240, 0),
            PieceKind::Z => (240, 0, 0),
            PieceKind::J => (0, 0, 240),
            PieceKind::L => (240, 160, 0),
        }
    }

    pub fn letter(&self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::O => 'O',
            PieceKind::T => 'T',
            PieceKind::S => 'S',
            PieceKind::Z => 'Z',
            PieceKind::J => 'J',
            PieceKind::L => 'L',
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell filled by a piece of that kind; the kind is the
///   color token renderers key off.
pub type Cell = Option<PieceKind>;

/// Lifecycle of a game.
///
/// `Idle` → `Playing` ⇄ `Paused`, `Playing` → `GameOver`. Only a start
/// leaves `GameOver`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Idle,
    Playing,
    Paused,
    GameOver,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Playing => "playing",
            Phase::Paused => "paused",
            Phase::GameOver => "game_over",
        }
    }
}

/// Commands an input adapter can issue.
///
/// Each variant maps to exactly one engine call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Drop piece one cell down, locking it if it cannot move
    SoftDrop,
    /// Drop piece to its landing row and lock it
    HardDrop,
    /// Rotate piece 90° clockwise
    Rotate,
    /// Toggle pause
    Pause,
    /// Start a new game (also restarts after game over)
    Start,
}

impl GameAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::HardDrop => "hardDrop",
            GameAction::Rotate => "rotate",
            GameAction::Pause => "pause",
            GameAction::Start => "start",
        }
    }
}
