//! Heuristic evaluation of meta-board positions
//!
//! Used at the depth horizon of the minimax search. Every sub-board
//! contributes independently:
//! - Won sub-boards: ±`BOARD_WON`
//! - Open sub-boards: ±`TWO_IN_LINE` per triple one move from completion,
//!   plus ±`CENTER` for holding the center cell
//! - Tied sub-boards: nothing

use crate::board::{Mark, MetaBoard, Outcome, Square, SubBoard, WIN_LINES};

use super::patterns::EvalScore;

/// Evaluate the board from the perspective of `player`.
///
/// Positive values favour `player`, negative values its opponent.
#[must_use]
pub fn evaluate(board: &MetaBoard, player: Mark) -> i32 {
    board
        .sub_boards()
        .map(|(_, sub_board)| evaluate_sub_board(sub_board, player))
        .sum()
}

/// Score a single sub-board for `player`
pub fn evaluate_sub_board(board: &SubBoard, player: Mark) -> i32 {
    let opponent = player.opponent();

    match board.outcome() {
        Outcome::Winner(winner) if winner == player => EvalScore::BOARD_WON,
        Outcome::Winner(_) => -EvalScore::BOARD_WON,
        Outcome::Tie => 0,
        Outcome::Open => line_threats(board, player, opponent) + center_control(board, player, opponent),
    }
}

/// Sum over triples that are one move from completion
fn line_threats(board: &SubBoard, player: Mark, opponent: Mark) -> i32 {
    let mut score = 0;
    for line in &WIN_LINES {
        let mine = line.iter().filter(|&&pos| board.get(pos) == player).count();
        let theirs = line.iter().filter(|&&pos| board.get(pos) == opponent).count();

        if mine == 2 && theirs == 0 {
            score += EvalScore::TWO_IN_LINE;
        } else if theirs == 2 && mine == 0 {
            score -= EvalScore::TWO_IN_LINE;
        }
    }
    score
}

/// Center bonus, counted once per sub-board
#[inline]
fn center_control(board: &SubBoard, player: Mark, opponent: Mark) -> i32 {
    match board.get(Square::CENTER) {
        m if m == player => EvalScore::CENTER,
        m if m == opponent => -EvalScore::CENTER,
        _ => 0,
    }
}
