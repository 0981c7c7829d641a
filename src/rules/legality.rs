//! Move legality: the active-board routing constraint and cell occupancy

use crate::board::{MetaBoard, Move, Square};
use crate::error::MoveError;

/// Sub-boards the next move may be played in.
///
/// The active board when it is set and open, otherwise every open
/// sub-board. Empty once the game is decided.
pub fn playable_boards(board: &MetaBoard) -> Vec<Square> {
    if !board.outcome().is_open() {
        return Vec::new();
    }
    if let Some(active) = board.active_board() {
        debug_assert!(
            board.outcome_of(active).is_open(),
            "active board {} is closed",
            active.board_char()
        );
        if board.outcome_of(active).is_open() {
            return vec![active];
        }
    }
    Square::ALL
        .into_iter()
        .filter(|&label| board.outcome_of(label).is_open())
        .collect()
}

/// All legal moves in lexical order: boards `A..I`, then cells `a..i`
pub fn legal_moves(board: &MetaBoard) -> Vec<Move> {
    playable_boards(board)
        .into_iter()
        .flat_map(|label| {
            board
                .sub_board(label)
                .empty_cells()
                .map(move |cell| Move::new(label, cell))
        })
        .collect()
}

/// Check a human move.
///
/// Rejections are reported in a fixed order: finished game, wrong board,
/// closed board, occupied cell.
pub fn validate_move(board: &MetaBoard, mv: Move) -> Result<(), MoveError> {
    if !board.outcome().is_open() {
        return Err(MoveError::GameOver);
    }
    if let Some(required) = board.active_board() {
        if required != mv.board {
            return Err(MoveError::WrongBoard { required });
        }
    }
    if !board.outcome_of(mv.board).is_open() {
        return Err(MoveError::BoardClosed { board: mv.board });
    }
    if !board.sub_board(mv.board).is_empty(mv.cell) {
        return Err(MoveError::Occupied {
            board: mv.board,
            cell: mv.cell,
        });
    }
    Ok(())
}
