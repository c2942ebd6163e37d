//! TUI Blocks (workspace facade crate).
//!
//! Re-exports the member crates under one name so the binary, integration
//! tests, and benches can use `tui_blocks::{core,input,term,types}`.

pub use tui_blocks_core as core;
pub use tui_blocks_input as input;
pub use tui_blocks_term as term;
pub use tui_blocks_types as types;
