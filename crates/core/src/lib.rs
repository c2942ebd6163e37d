//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules and state management for the
//! falling-block game. It has **no dependencies** on terminal I/O, which makes it:
//!
//! - **Deterministic**: Same seed produces the same piece sequence
//! - **Testable**: Unit tests for every rule
//! - **Portable**: Any front end can drive it through [`GameState`]
//!
//! # Module Structure
//!
//! - [`board`]: 12x20 grid with collision detection and line clearing
//! - [`game_state`]: Active/next piece, score, pause and game-over lifecycle
//! - [`pieces`]: The seven shape matrices and clockwise rotation
//! - [`rng`]: Uniform random piece selection over an injectable RNG
//! - [`scoring`]: Points per line-clear event
//! - [`snapshot`]: Read-only copy of the state for drawing
//!
//! # Game Rules
//!
//! - Pieces spawn centred on the top row and fall one row per second
//! - Rotation is clockwise only, with no wall kicks
//! - A piece locks when it cannot fall; full rows are cleared and scored
//! - The game ends when a new piece collides as soon as it spawns
//!
//! # Example
//!
//! ```
//! use tui_blocks_core::GameState;
//! use tui_blocks_types::GameAction;
//!
//! let mut game = GameState::new(12345);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::RotateCw);
//! game.apply_action(GameAction::SoftDrop);
//!
//! assert_eq!(game.score(), 0);
//! assert!(!game.game_over());
//! ```
//!
//! # Timing
//!
//! Call [`GameState::tick`](game_state::GameState::tick) with the elapsed time;
//! it issues one gravity step per [`GRAVITY_MS`](types::GRAVITY_MS).

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use tui_blocks_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::{spawn_x, ActivePiece, DropOutcome, GameState};
pub use pieces::{get_shape, Shape, CANONICAL_SHAPES};
pub use rng::PieceRandomizer;
pub use scoring::calculate_line_score;
pub use snapshot::{ActiveSnapshot, BoardGrid, GameSnapshot};
