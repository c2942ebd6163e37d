//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, in board cells: the bordered playfield on the left, then a sidebar
//! `SIDEBAR_WIDTH` cells wide holding the next-piece preview, the score, and
//! the pause / game-over banners.

use crate::core::{GameSnapshot, Shape};
use crate::fb::{CellStyle, FrameBuffer, Glyph, Rgb};
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH, CELL_WIDTH, SIDEBAR_WIDTH};

/// Sidebar rows, relative to the top of the playfield.
const NEXT_LABEL_ROW: u16 = 0;
const NEXT_SHAPE_ROW: u16 = 2;
const SCORE_ROW: u16 = 5;
const BANNER_ROW: u16 = 7;
const FINAL_SCORE_ROW: u16 = 8;
const RESTART_HINT_ROW: u16 = 10;

const WINDOW_BG: Rgb = Rgb::new(0, 0, 0);
const EMPTY_CELL_BG: Rgb = Rgb::new(255, 255, 255);

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

/// Colour for each piece kind.
pub fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(255, 0, 0),
        PieceKind::J => Rgb::new(0, 255, 0),
        PieceKind::L => Rgb::new(0, 0, 255),
        PieceKind::O => Rgb::new(255, 255, 0),
        PieceKind::S => Rgb::new(0, 255, 255),
        PieceKind::T => Rgb::new(255, 0, 255),
        PieceKind::Z => Rgb::new(50, 100, 150),
    }
}

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self::new(CELL_WIDTH, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Width of the bordered playfield in terminal columns.
    pub fn frame_width(&self) -> u16 {
        (BOARD_WIDTH as u16) * self.cell_w + 2
    }

    /// Height of the bordered playfield in terminal rows.
    pub fn frame_height(&self) -> u16 {
        (BOARD_HEIGHT as u16) * self.cell_h + 2
    }

    /// Total width of playfield plus sidebar.
    pub fn layout_width(&self) -> u16 {
        self.frame_width() + (SIDEBAR_WIDTH as u16) * self.cell_w
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Glyph {
            ch: ' ',
            style: CellStyle::new(WINDOW_BG, WINDOW_BG),
        });

        let frame_w = self.frame_width();
        let frame_h = self.frame_height();
        let start_x = viewport.width.saturating_sub(self.layout_width()) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let border = CellStyle::new(Rgb::new(200, 200, 200), WINDOW_BG);
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        // Locked cells with the active piece drawn over them.
        let origin_x = start_x + 1;
        let origin_y = start_y + 1;
        for y in 0..BOARD_HEIGHT as usize {
            for x in 0..BOARD_WIDTH as usize {
                self.draw_cell(fb, origin_x, origin_y, x as u16, y as u16, snap.cell_at(x, y));
            }
        }

        self.draw_side_panel(fb, snap, start_x + frame_w + self.cell_w, origin_y);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_cell(
        &self,
        fb: &mut FrameBuffer,
        origin_x: u16,
        origin_y: u16,
        cell_x: u16,
        cell_y: u16,
        cell: Option<PieceKind>,
    ) {
        let (ch, style) = match cell {
            Some(kind) => {
                let color = piece_color(kind);
                ('█', CellStyle::new(color, color))
            }
            None => (' ', CellStyle::new(EMPTY_CELL_BG, EMPTY_CELL_BG)),
        };
        let px = origin_x + cell_x * self.cell_w;
        let py = origin_y + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    /// Draw only the filled cells of a shape; its empty cells stay transparent.
    fn draw_shape(&self, fb: &mut FrameBuffer, origin_x: u16, origin_y: u16, shape: &Shape) {
        for (sx, sy, kind) in shape.filled() {
            self.draw_cell(fb, origin_x, origin_y, sx as u16, sy as u16, Some(kind));
        }
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, panel_x: u16, top: u16) {
        if panel_x >= fb.width() {
            return;
        }

        let text = CellStyle::new(Rgb::new(255, 255, 255), WINDOW_BG);

        fb.put_str(panel_x, top + NEXT_LABEL_ROW, "Next:", text);
        self.draw_shape(
            fb,
            panel_x + self.cell_w,
            top + NEXT_SHAPE_ROW * self.cell_h,
            &snap.next,
        );

        let x = fb.put_str(panel_x, top + SCORE_ROW, "Score: ", text);
        fb.put_u32(x, top + SCORE_ROW, snap.score, text);

        if snap.game_over {
            fb.put_str(panel_x, top + BANNER_ROW, "Game over!", text.bold());
            fb.put_str(panel_x, top + FINAL_SCORE_ROW, "Final score above.", text);
            fb.put_str(panel_x, top + RESTART_HINT_ROW, "Press Enter to restart.", text);
        } else if snap.paused {
            fb.put_str(panel_x, top + BANNER_ROW, "Paused!", text.bold());
        }
    }
}
