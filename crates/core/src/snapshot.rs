use crate::piece::Piece;
use crate::types::{Cell, Phase, BOARD_HEIGHT, BOARD_WIDTH};

/// Read-only copy of everything a renderer needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub current: Option<Piece>,
    pub next: Option<Piece>,
    /// Rows the current piece would fall on a hard drop.
    pub ghost_offset: Option<u8>,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub phase: Phase,
    pub drop_interval_ms: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn playable(&self) -> bool {
        self.phase == Phase::Playing
    }

    /// Current piece moved down to its landing row.
    pub fn ghost(&self) -> Option<Piece> {
        let current = self.current?;
        let offset = self.ghost_offset?;
        Some(current.shifted(0, offset as i8))
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            current: None,
            next: None,
            ghost_offset: None,
            score: 0,
            level: 1,
            lines: 0,
            phase: Phase::Idle,
            drop_interval_ms: 0,
        }
    }
}
