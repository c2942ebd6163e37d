//! Scoring module - points per line-clear event
//!
//! Only row clears score. The table is flat (no level multiplier, no combos):
//! one lock event that clears `n` rows awards a fixed amount for `n`.

use crate::types::{LINE_SCORES, MULTI_CLEAR_SCORE};

/// Points for clearing `lines` rows in a single lock event.
///
/// Counts above four award [`MULTI_CLEAR_SCORE`]; zero or negative counts award nothing.
pub fn calculate_line_score(lines: i32) -> u32 {
    match lines {
        n if n <= 0 => 0,
        n if n as usize >= LINE_SCORES.len() => MULTI_CLEAR_SCORE,
        n => LINE_SCORES[n as usize],
    }
}
