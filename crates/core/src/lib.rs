//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds every rule of the game: shapes, the board, collision,
//! scoring and the state machine. It has **no** dependencies on rendering,
//! input devices, timers or I/O:
//!
//! - **Deterministic**: a seed fixes the piece sequence
//! - **Synchronous**: every operation completes before returning
//! - **Value-based**: locking and line clears produce a new [`Board`]
//!
//! # Module Structure
//!
//! - [`geometry`]: shape matrices for the seven kinds and clockwise rotation
//! - [`board`]: 10x20 grid with merge and line clearing
//! - [`collision`]: the single legality predicate
//! - [`piece`]: the falling piece and its spawn placement
//! - [`rng`]: uniform random spawner
//! - [`scoring`]: level, points and gravity interval formulas
//! - [`game_state`]: the state machine
//! - [`snapshot`]: read-only copy for renderers
//!
//! # Game Rules
//!
//! - Rotation is clockwise only, with horizontal kicks of 0, -1, +1
//! - A piece that cannot fall locks at once (no lock delay)
//! - Clearing `n` lines scores `n² × 100 × level`
//! - Level is `lines / 10 + 1`; gravity is `max(100, 800 - (level - 1) × 80)` ms
//! - The game ends when the promoted next piece cannot be placed
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_types::{GameAction, Phase};
//!
//! let mut game = GameState::new(12345);
//! game.start();
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::HardDrop);
//!
//! assert_eq!(game.phase(), Phase::Playing);
//! assert!(game.board().cells().iter().any(|c| c.is_some()));
//! ```

pub mod board;
pub mod collision;
pub mod game_state;
pub mod geometry;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use collision::{drop_distance, is_valid_move};
pub use game_state::{GameState, LockEvent};
pub use geometry::{canonical_shape, rotate, Shape};
pub use piece::Piece;
pub use rng::{PieceSpawner, SimpleRng};
pub use scoring::{drop_interval_ms, level_for_lines, line_clear_score};
pub use snapshot::GameSnapshot;
