//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. The mapping is a
//! static `match`, so nothing is looked up per keystroke. Key repeat is left to
//! the terminal.

pub mod map;

pub use tui_blocks_types as types;

pub use map::{handle_key_event, should_quit};
