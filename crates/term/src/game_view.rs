//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! Pure (no I/O), so it can be unit-tested.

use crate::core::{GameSnapshot, Piece};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Phase, BOARD_HEIGHT, BOARD_WIDTH};

const WELL_BG: Rgb = Rgb::new(30, 30, 40);
const BLOCK: char = '█';
const GHOST: char = '░';

/// Widest supported board cell, in terminal columns.
pub const MAX_CELL_WIDTH: u16 = 4;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Draws the well, the pieces and a side panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView {
    /// Terminal columns per board cell.
    cell_w: u16,
    show_ghost: bool,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for the usual terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            show_ghost: true,
        }
    }
}

/// Top-left corner of the board frame inside the viewport.
#[derive(Debug, Clone, Copy)]
struct Origin {
    x: u16,
    y: u16,
}

impl GameView {
    /// `cell_w` is clamped to `1..=MAX_CELL_WIDTH`.
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.clamp(1, MAX_CELL_WIDTH),
            ..Self::default()
        }
    }

    pub fn with_ghost(mut self, show_ghost: bool) -> Self {
        self.show_ghost = show_ghost;
        self
    }

    /// Width and height of the bordered well in terminal cells.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            (BOARD_WIDTH as u16).saturating_mul(self.cell_w).saturating_add(2),
            BOARD_HEIGHT as u16 + 2,
        )
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.fill(' ', CellStyle::default());

        let (frame_w, frame_h) = self.frame_size();
        let origin = Origin {
            x: viewport.width.saturating_sub(frame_w.saturating_add(14)) / 2,
            y: viewport.height.saturating_sub(frame_h) / 2,
        };

        self.draw_border(fb, origin, frame_w, frame_h);

        for (y, row) in snap.board.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                let (x, y) = (x as i8, y as i8);
                match cell {
                    Some(kind) => self.draw_cell(fb, origin, x, y, BLOCK, block_style((*kind).into())),
                    None => self.draw_cell(fb, origin, x, y, ' ', CellStyle::new(WELL_BG, WELL_BG)),
                }
            }
        }

        if self.show_ghost && snap.playable() {
            if let Some(ghost) = snap.ghost() {
                let color = Rgb::from(ghost.kind).scaled(1, 2);
                self.draw_piece(fb, origin, &ghost, GHOST, CellStyle::new(color, WELL_BG));
            }
        }

        if let Some(current) = snap.current {
            self.draw_piece(fb, origin, &current, BLOCK, block_style(current.kind.into()));
        }

        self.draw_side_panel(fb, snap, viewport, origin, frame_w);

        let overlay = match snap.phase {
            Phase::Idle => Some("PRESS ENTER"),
            Phase::Paused => Some("PAUSED"),
            Phase::GameOver => Some("GAME OVER"),
            Phase::Playing => None,
        };
        if let Some(text) = overlay {
            self.draw_overlay_text(fb, origin, frame_w, frame_h, text);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, origin: Origin, w: u16, h: u16) {
        let style = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let (x0, y0) = (origin.x, origin.y);
        let (x1, y1) = (x0 + w - 1, y0 + h - 1);

        fb.put(x0, y0, '┌', style);
        fb.put(x1, y0, '┐', style);
        fb.put(x0, y1, '└', style);
        fb.put(x1, y1, '┘', style);
        for x in x0 + 1..x1 {
            fb.put(x, y0, '─', style);
            fb.put(x, y1, '─', style);
        }
        for y in y0 + 1..y1 {
            fb.put(x0, y, '│', style);
            fb.put(x1, y, '│', style);
        }
    }

    /// Draw a piece's cells; rows above the board are not visible.
    fn draw_piece(&self, fb: &mut FrameBuffer, origin: Origin, piece: &Piece, ch: char, style: CellStyle) {
        for (x, y) in piece.cells() {
            if y >= 0 {
                self.draw_cell(fb, origin, x, y, ch, style);
            }
        }
    }

    fn draw_cell(&self, fb: &mut FrameBuffer, origin: Origin, x: i8, y: i8, ch: char, style: CellStyle) {
        if x < 0 || y < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
            return;
        }
        let px = origin.x + 1 + x as u16 * self.cell_w;
        let py = origin.y + 1 + y as u16;
        fb.fill_rect(px, py, self.cell_w, 1, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        origin: Origin,
        frame_w: u16,
    ) {
        let panel_x = origin.x.saturating_add(frame_w).saturating_add(2);
        if panel_x.saturating_add(10) > viewport.width {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::default();

        let mut y = origin.y;
        for (name, n) in [("SCORE", snap.score), ("LEVEL", snap.level), ("LINES", snap.lines)] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y + 1, n, value);
            y += 3;
        }

        fb.put_str(panel_x, y, "NEXT", label);
        y += 1;
        if let Some(next) = snap.next {
            let style = block_style(next.kind.into());
            for (dx, dy) in next.shape.minos() {
                let px = panel_x + dx as u16 * self.cell_w;
                fb.fill_rect(px, y + dy as u16, self.cell_w, 1, BLOCK, style);
            }
        }
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, origin: Origin, frame_w: u16, frame_h: u16, text: &str) {
        let text_w = text.chars().count() as u16;
        let x = origin.x + frame_w.saturating_sub(text_w) / 2;
        let y = origin.y + frame_h / 2;
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        fb.put_str(x, y, text, style);
    }
}

fn block_style(color: Rgb) -> CellStyle {
    CellStyle::new(color, WELL_BG)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    /// Column and row of the first occurrence of `needle`, in glyphs.
    fn find(fb: &FrameBuffer, needle: &str) -> Option<(u16, u16)> {
        let needle: Vec<char> = needle.chars().collect();
        (0..fb.height()).find_map(|y| {
            let row: Vec<char> = fb.row(y)?.iter().map(|g| g.ch).collect();
            row.windows(needle.len())
                .position(|w| w == needle.as_slice())
                .map(|x| (x as u16, y))
        })
    }

    #[test]
    fn renders_border_and_panel() {
        let fb = GameView::default().render(&GameSnapshot::default(), Viewport::new(60, 24));
        let (left, top) = find(&fb, "┌").unwrap();
        assert_eq!(fb.get(left + 21, top).unwrap().ch, '┐');
        assert_eq!(fb.get(left, top + 21).unwrap().ch, '└');
        assert!(find(&fb, "SCORE").is_some());
        assert!(find(&fb, "NEXT").is_some());
        assert!(find(&fb, "PRESS ENTER").is_some());
    }

    #[test]
    fn locked_cell_uses_kind_color() {
        let mut snap = GameSnapshot {
            phase: Phase::Playing,
            ..GameSnapshot::default()
        };
        snap.board[19][0] = Some(PieceKind::Z);

        let view = GameView::default();
        let fb = view.render(&snap, Viewport::new(60, 24));
        let (left, top) = find(&fb, "┌").unwrap();
        let glyph = fb.get(left + 1, top + 20).unwrap();
        assert_eq!(glyph.ch, BLOCK);
        assert_eq!(glyph.style.fg, Rgb::from(PieceKind::Z));
        assert!(find(&fb, "PAUSED").is_none());
    }

    #[test]
    fn ghost_drawn_below_current_piece() {
        let snap = GameSnapshot {
            current: Some(Piece::at(PieceKind::O, 0, 0)),
            ghost_offset: Some(18),
            phase: Phase::Playing,
            ..GameSnapshot::default()
        };
        let fb = GameView::default().render(&snap, Viewport::new(60, 24));
        let (left, top) = find(&fb, "┌").unwrap();

        assert_eq!(fb.get(left + 1, top + 1).unwrap().ch, BLOCK);
        assert_eq!(fb.get(left + 1, top + 19).unwrap().ch, GHOST);

        let hidden = GameView::default()
            .with_ghost(false)
            .render(&snap, Viewport::new(60, 24));
        assert_eq!(hidden.get(left + 1, top + 19).unwrap().ch, ' ');
    }

    #[test]
    fn overlays_follow_phase() {
        let view = GameView::default();
        let paused = GameSnapshot {
            phase: Phase::Paused,
            ..GameSnapshot::default()
        };
        let over = GameSnapshot {
            phase: Phase::GameOver,
            ..GameSnapshot::default()
        };
        assert!(find(&view.render(&paused, Viewport::new(60, 24)), "PAUSED").is_some());
        assert!(find(&view.render(&over, Viewport::new(60, 24)), "GAME OVER").is_some());
    }

    #[test]
    fn oversized_cell_width_is_clamped() {
        let wide = GameView::new(7000);
        assert_eq!(wide, GameView::new(MAX_CELL_WIDTH));
        assert_eq!(wide.frame_size(), (BOARD_WIDTH as u16 * MAX_CELL_WIDTH + 2, 22));
        assert_eq!(GameView::new(0), GameView::new(1));

        let fb = wide.render(&GameSnapshot::default(), Viewport::new(80, 24));
        assert!(find(&fb, "┌").is_some());
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let snap = GameSnapshot {
            current: Some(Piece::at(PieceKind::I, 3, -1)),
            next: Some(Piece::spawn(PieceKind::L)),
            ..GameSnapshot::default()
        };
        let fb = GameView::new(1).render(&snap, Viewport::new(4, 3));
        assert_eq!(fb.width(), 4);
    }
}
