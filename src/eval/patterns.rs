//! Score constants for Ultimate Tic-Tac-Toe evaluation

/// Evaluation weights
pub struct EvalScore;

impl EvalScore {
    // Terminal scores, returned by the search before any evaluation
    /// Meta-board won
    pub const WIN: i32 = 1_000;
    /// Meta-board lost
    pub const LOSS: i32 = -1_000;
    /// Meta-board tied
    pub const DRAW: i32 = 0;

    // Per sub-board terms
    /// Sub-board owned
    pub const BOARD_WON: i32 = 100;
    /// Open triple holding two own marks and no opposing mark
    pub const TWO_IN_LINE: i32 = 50;
    /// Center cell of an open sub-board
    pub const CENTER: i32 = 5;
}
