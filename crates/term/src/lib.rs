//! Terminal rendering module.
//!
//! A small, game-oriented rendering layer: the game snapshot is drawn into a
//! plain framebuffer, which is then diffed and flushed to the terminal.
//!
//! - `fb`: framebuffer and style types
//! - `game_view`: pure snapshot -> framebuffer layout
//! - `renderer`: crossterm output

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_blocks_core as core;
pub use tui_blocks_types as types;

pub use fb::{CellStyle, FrameBuffer, Glyph, Rgb};
pub use game_view::{piece_color, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
