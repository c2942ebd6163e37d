//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! - **Width**: 12 columns (indexed 0-11)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//!
//! The board size is fixed at compile time.
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GRAVITY_MS` | 1000 | Period of the automatic gravity step |
//! | `FRAME_MS` | 33 | Frame/input polling interval (~30 FPS) |
//!
//! # Examples
//!
//! ```
//! use tui_blocks_types::{GameAction, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let piece = PieceKind::from_str("t").unwrap();
//! assert_eq!(piece, PieceKind::T);
//!
//! let action = GameAction::from_str("rotateCw").unwrap();
//! assert_eq!(action, GameAction::RotateCw);
//!
//! assert_eq!(BOARD_WIDTH, 12);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (12 columns)
pub const BOARD_WIDTH: u8 = 12;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Automatic gravity interval (one row per second)
pub const GRAVITY_MS: u32 = 1000;

/// Frame interval in milliseconds (33ms ≈ 30 FPS)
pub const FRAME_MS: u32 = 33;

/// Sidebar width, in board cells, to the right of the playfield
pub const SIDEBAR_WIDTH: u8 = 9;

/// Terminal columns used for a single board cell
pub const CELL_WIDTH: u16 = 2;

/// The seven piece kinds
///
/// Each kind has a distinct colour in the terminal view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds, in canonical order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_blocks_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "o" => Some(PieceKind::O),
            "s" => Some(PieceKind::S),
            "t" => Some(PieceKind::T),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::O => "o",
            PieceKind::S => "s",
            PieceKind::T => "t",
            PieceKind::Z => "z",
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell filled with the specified piece kind
pub type Cell = Option<PieceKind>;

/// Commands the display/input adapter can issue to the game
///
/// Gravity is not an action: it is driven by `GameState::tick`, which issues
/// the same step as [`GameAction::SoftDrop`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Step the piece one row down, locking it if it cannot fall
    SoftDrop,
    /// Rotate piece 90° clockwise
    RotateCw,
    /// Toggle pause state
    Pause,
    /// Restart the game (only after game over)
    Restart,
}

impl GameAction {
    /// Parse action from a camelCase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_blocks_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("softdrop"), Some(GameAction::SoftDrop));
    /// assert_eq!(GameAction::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "rotatecw" => Some(GameAction::RotateCw),
            "pause" => Some(GameAction::Pause),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::RotateCw => "rotateCw",
            GameAction::Pause => "pause",
            GameAction::Restart => "restart",
        }
    }
}

/// Points awarded per number of rows cleared in a single lock.
///
/// Index is the row count (0-4); five or more rows award [`MULTI_CLEAR_SCORE`].
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Points for clearing more than four rows at once.
pub const MULTI_CLEAR_SCORE: u32 = 1500;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timing_defaults() {
        assert_eq!(GRAVITY_MS, 1000);
        assert_eq!(FRAME_MS, 33);
    }

    #[test]
    fn piece_kind_string_roundtrip_covers_all_kinds() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_str(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn game_action_names_parse_back() {
        for action in [
            GameAction::MoveLeft,
            GameAction::MoveRight,
            GameAction::SoftDrop,
            GameAction::RotateCw,
            GameAction::Pause,
            GameAction::Restart,
        ] {
            assert_eq!(GameAction::from_str(action.as_str()), Some(action));
        }
    }
}
