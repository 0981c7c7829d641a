//! Game rules for Ultimate Tic-Tac-Toe
//!
//! This module implements the rule set:
//! - Outcome detection (three in a row on a sub-board, three won
//!   sub-boards in a row on the meta-board, ties)
//! - Move routing and legality (active board, closed boards, occupancy)

pub mod legality;
pub mod win;

// Re-exports for convenient access
pub use legality::{legal_moves, playable_boards, validate_move};
pub use win::{line_winner, meta_board_outcome, sub_board_outcome};
