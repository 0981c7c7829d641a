//! Outcome detection for sub-boards and the meta-board
//!
//! Both levels share the same algebra:
//! 1. Any of the 8 triples (3 rows, 3 columns, 2 diagonals) held by one
//!    player wins
//! 2. Otherwise the grid is tied once every slot is closed
//! 3. Otherwise it stays open
//!
//! The triple scan always runs first, so a full grid that also completes a
//! line reports the win.

use crate::board::{Mark, MetaBoard, Outcome, Square, SubBoard, WIN_LINES};

/// Return the player holding a full triple, if any.
///
/// `owner` maps each slot to the player owning it (or `Mark::Empty`).
#[inline]
pub fn line_winner(owner: impl Fn(Square) -> Mark) -> Option<Mark> {
    WIN_LINES.iter().find_map(|&[a, b, c]| {
        let first = owner(a);
        (!first.is_empty() && first == owner(b) && first == owner(c)).then_some(first)
    })
}

/// Outcome of a single 3x3 grid
pub fn sub_board_outcome(board: &SubBoard) -> Outcome {
    if let Some(winner) = line_winner(|pos| board.get(pos)) {
        return Outcome::Winner(winner);
    }
    if board.is_full() {
        Outcome::Tie
    } else {
        Outcome::Open
    }
}

/// Outcome of the meta-board.
///
/// Only won sub-boards count toward a triple; tied and open ones never
/// match. The game is tied once no sub-board is open.
pub fn meta_board_outcome(board: &MetaBoard) -> Outcome {
    let outcomes: [Outcome; 9] = std::array::from_fn(|i| board.outcome_of(Square::new(i as u8)));

    if let Some(winner) = line_winner(|label| outcomes[label.index()].winner().unwrap_or_default())
    {
        return Outcome::Winner(winner);
    }
    if outcomes.iter().all(|o| !o.is_open()) {
        Outcome::Tie
    } else {
        Outcome::Open
    }
}
