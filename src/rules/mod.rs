//! Game rules for five-in-a-row
//!
//! Plain Gomoku rules: the move that makes five or more contiguous
//! same-color stones along any line direction wins. No capture rules, no
//! forbidden moves.

pub mod win;

// Re-exports for convenient access
pub use win::{is_winning_move, winning_line};
