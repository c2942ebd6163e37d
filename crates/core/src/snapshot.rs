use crate::game_state::ActivePiece;
use crate::pieces::{get_shape, Shape};
use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Row-major copy of the board grid
pub type BoardGrid = [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            shape: value.shape,
            x: value.x,
            y: value.y,
        }
    }
}

/// Read-only copy of everything the display adapter draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: BoardGrid,
    pub active: Option<ActiveSnapshot>,
    pub next: Shape,
    pub score: u32,
    pub paused: bool,
    pub game_over: bool,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.board = [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        self.active = None;
        self.next = get_shape(PieceKind::I);
        self.score = 0;
        self.paused = false;
        self.game_over = false;
    }

    pub fn playable(&self) -> bool {
        !self.game_over && !self.paused
    }

    /// Cell as drawn: the active piece over the locked board.
    pub fn cell_at(&self, x: usize, y: usize) -> Cell {
        if let Some(active) = self.active {
            let sx = x as i32 - active.x as i32;
            let sy = y as i32 - active.y as i32;
            if sx >= 0 && sy >= 0 {
                if let Some(kind) = active.shape.get(sx as usize, sy as usize) {
                    return Some(kind);
                }
            }
        }
        self.board.get(y).and_then(|row| row.get(x)).copied().flatten()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            board: [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            next: get_shape(PieceKind::I),
            score: 0,
            paused: false,
            game_over: false,
        };
        s.clear();
        s
    }
}
