//! Game state module - the game state machine
//!
//! Ties together the board, the spawner, collision checking and scoring. Every
//! public operation is one synchronous transaction on `&mut self`: a lock,
//! line clear, score update and piece promotion either all happen or none do.
//!
//! Gravity is driven from outside: a scheduler calls [`GameState::tick`] every
//! [`GameState::drop_interval_ms`] milliseconds while the game is playing.

use crate::board::Board;
use crate::collision::{drop_distance, is_valid_move};
use crate::piece::Piece;
use crate::rng::PieceSpawner;
use crate::scoring::{drop_interval_ms, level_for_lines, line_clear_score};
use crate::snapshot::GameSnapshot;
use crate::types::{GameAction, Phase};

/// Horizontal offsets tried, in order, when rotating.
const ROTATION_KICKS: [i8; 3] = [0, -1, 1];

/// Outcome of the most recent lock (consumed by observers).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub lines_cleared: u32,
    /// Points added by this lock.
    pub points: u32,
    /// Level after the lock.
    pub level: u32,
    pub level_up: bool,
    /// The promoted piece could not be placed.
    pub game_over: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    current: Option<Piece>,
    next: Option<Piece>,
    spawner: PieceSpawner,
    score: u32,
    level: u32,
    lines: u32,
    phase: Phase,
    last_event: Option<LockEvent>,
}

impl GameState {
    /// Create an idle game whose pieces come from `seed`
    pub fn new(seed: u32) -> Self {
        Self {
            board: Board::new(),
            current: None,
            next: None,
            spawner: PieceSpawner::new(seed),
            score: 0,
            level: 1,
            lines: 0,
            phase: Phase::Idle,
            last_event: None,
        }
    }

    /// Reset everything and begin playing.
    ///
    /// Valid from any phase; this is also how a finished game restarts.
    pub fn start(&mut self) {
        self.board = Board::new();
        self.current = Some(self.spawner.spawn());
        self.next = Some(self.spawner.spawn());
        self.score = 0;
        self.level = 1;
        self.lines = 0;
        self.last_event = None;
        self.phase = Phase::Playing;
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_playing(&self) -> bool {
        self.phase == Phase::Playing
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current(&self) -> Option<Piece> {
        self.current
    }

    pub fn next(&self) -> Option<Piece> {
        self.next
    }

    /// Gravity interval for the current level.
    pub fn drop_interval_ms(&self) -> u32 {
        drop_interval_ms(self.level)
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Playing ⇄ paused. Returns false in any other phase.
    pub fn toggle_pause(&mut self) -> bool {
        match self.phase {
            Phase::Playing => self.phase = Phase::Paused,
            Phase::Paused => self.phase = Phase::Playing,
            Phase::Idle | Phase::GameOver => return false,
        }
        true
    }

    pub fn move_left(&mut self) -> bool {
        self.move_horizontal(-1)
    }

    pub fn move_right(&mut self) -> bool {
        self.move_horizontal(1)
    }

    /// Shift the current piece by `dir` columns if the target is legal.
    pub fn move_horizontal(&mut self, dir: i8) -> bool {
        self.try_move(dir, 0)
    }

    /// Gravity step; identical to a soft drop.
    pub fn tick(&mut self) -> bool {
        self.soft_drop()
    }

    /// Move down one row, or lock the piece if it cannot move.
    ///
    /// Returns true if the piece moved, false if it locked or nothing happened.
    pub fn soft_drop(&mut self) -> bool {
        if !self.is_playing() {
            return false;
        }
        if self.try_move(0, 1) {
            return true;
        }
        self.lock_current();
        false
    }

    /// Rotate clockwise, trying horizontal offsets 0, -1, +1 in order.
    pub fn rotate(&mut self) -> bool {
        if !self.is_playing() {
            return false;
        }
        let Some(current) = self.current else {
            return false;
        };

        let rotated = current.shape.rotate();
        for dx in ROTATION_KICKS {
            if is_valid_move(&self.board, &current, dx, 0, Some(&rotated)) {
                self.current = Some(Piece {
                    shape: rotated,
                    x: current.x + dx,
                    ..current
                });
                return true;
            }
        }
        false
    }

    /// Drop to the landing row and lock immediately.
    ///
    /// Returns the number of rows dropped.
    pub fn hard_drop(&mut self) -> u8 {
        if !self.is_playing() {
            return 0;
        }
        let Some(current) = self.current else {
            return 0;
        };

        let distance = drop_distance(&self.board, &current);
        self.current = Some(current.shifted(0, distance as i8));
        self.lock_current();
        distance
    }

    /// Rows the current piece would fall on a hard drop (landing preview).
    pub fn ghost_offset(&self) -> Option<u8> {
        self.current
            .as_ref()
            .map(|piece| drop_distance(&self.board, piece))
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::SoftDrop => {
                let before = self.current;
                self.soft_drop();
                before != self.current
            }
            GameAction::HardDrop => {
                let was_playing = self.is_playing() && self.current.is_some();
                self.hard_drop();
                was_playing
            }
            GameAction::Rotate => self.rotate(),
            GameAction::Pause => self.toggle_pause(),
            GameAction::Start => {
                self.start();
                true
            }
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        for (dst, src) in out.board.iter_mut().zip(self.board.rows()) {
            dst.copy_from_slice(src);
        }
        out.current = self.current;
        out.next = self.next;
        out.ghost_offset = self.ghost_offset();
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.phase = self.phase;
        out.drop_interval_ms = self.drop_interval_ms();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Try to move the current piece
    fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        if !self.is_playing() {
            return false;
        }
        let Some(current) = self.current else {
            return false;
        };

        if is_valid_move(&self.board, &current, dx, dy, None) {
            self.current = Some(current.shifted(dx, dy));
            return true;
        }
        false
    }

    /// Lock the current piece, clear lines, score, then promote the next piece.
    fn lock_current(&mut self) {
        let Some(current) = self.current.take() else {
            return;
        };

        let (board, cleared) = self.board.merge(&current).clear_lines();
        self.board = board;

        let previous_level = self.level;
        self.lines += cleared as u32;
        self.level = level_for_lines(self.lines);
        // Paid at the post-clear level.
        let points = line_clear_score(cleared, self.level);
        self.score = self.score.saturating_add(points);

        let promoted = self.next.take().unwrap_or_else(|| self.spawner.spawn());
        let game_over = !is_valid_move(&self.board, &promoted, 0, 0, None);
        if game_over {
            self.next = Some(promoted);
            self.phase = Phase::GameOver;
        } else {
            self.current = Some(promoted);
            self.next = Some(self.spawner.spawn());
        }

        self.last_event = Some(LockEvent {
            lines_cleared: cleared as u32,
            points,
            level: self.level,
            level_up: self.level != previous_level,
            game_over,
        });
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
