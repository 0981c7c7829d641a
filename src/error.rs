//! Error types for the Ultimate Tic-Tac-Toe engine

use thiserror::Error;

use crate::board::Square;

/// Rejection of a human move. The board is never mutated on rejection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("the game is already over")]
    GameOver,

    #[error("you must play in board {}", .required.board_char())]
    WrongBoard { required: Square },

    #[error("board {} is already won or tied", .board.board_char())]
    BoardClosed { board: Square },

    #[error("position {} in board {} is already occupied", .cell.cell_char(), .board.board_char())]
    Occupied { board: Square, cell: Square },

    #[error(
        "invalid move '{0}': use a board letter A-I followed by a position letter a-i, e.g. Ae"
    )]
    InvalidNotation(String),
}

/// Failure of the machine player
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// Only reachable when a move is requested after the game ended
    #[error("no legal moves available")]
    NoLegalMoves,
}
