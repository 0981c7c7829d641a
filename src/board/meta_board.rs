//! The 3x3 grid of sub-boards with move routing

use std::fmt;

use super::sub_board::{Occupied, SubBoard};
use super::{Mark, Move, Outcome, Square, TOTAL_CELLS};
use crate::error::MoveError;
use crate::rules::{legal_moves, meta_board_outcome, validate_move};

/// The overall game board.
///
/// `active` is the sub-board the next move is forced into, or `None` when
/// any open sub-board may be chosen. When set it always names an open
/// sub-board.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MetaBoard {
    boards: [SubBoard; TOTAL_CELLS],
    active: Option<Square>,
}

impl MetaBoard {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn sub_board(&self, label: Square) -> &SubBoard {
        &self.boards[label.index()]
    }

    pub fn sub_boards(&self) -> impl Iterator<Item = (Square, &SubBoard)> {
        Square::ALL.into_iter().zip(self.boards.iter())
    }

    /// Mark at a move's cell
    #[inline]
    pub fn get(&self, mv: Move) -> Mark {
        self.sub_board(mv.board).get(mv.cell)
    }

    #[inline]
    pub fn active_board(&self) -> Option<Square> {
        self.active
    }

    /// Force the next move into `label` (`None` frees the choice).
    ///
    /// Only open sub-boards can be forced.
    pub fn set_active_board(&mut self, label: Option<Square>) -> Result<(), MoveError> {
        if let Some(board) = label {
            if !self.sub_board(board).outcome().is_open() {
                return Err(MoveError::BoardClosed { board });
            }
        }
        self.active = label;
        Ok(())
    }

    /// Outcome of the meta-board
    #[inline]
    pub fn outcome(&self) -> Outcome {
        meta_board_outcome(self)
    }

    #[inline]
    pub fn outcome_of(&self, label: Square) -> Outcome {
        self.sub_board(label).outcome()
    }

    /// Total marks on the board
    pub fn filled_count(&self) -> u32 {
        self.boards.iter().map(|b| b.count() as u32).sum()
    }

    /// Check if no mark has been played yet
    pub fn is_empty(&self) -> bool {
        self.filled_count() == 0
    }

    /// All legal moves in lexical order (`Aa`, `Ab`, ... `Ii`)
    #[inline]
    pub fn legal_moves(&self) -> Vec<Move> {
        legal_moves(self)
    }

    /// Place a mark (without routing), for setting up positions.
    /// Use `apply` or `play` for game moves.
    ///
    /// If the mark closes the active sub-board, the next move becomes
    /// unconstrained.
    pub fn place(&mut self, board: Square, cell: Square, mark: Mark) -> Result<(), Occupied> {
        self.boards[board.index()].set(cell, mark)?;
        if self.active == Some(board) && !self.outcome_of(board).is_open() {
            self.active = None;
        }
        Ok(())
    }

    /// Write a mark and route the next move.
    ///
    /// The cell played names the next forced sub-board; if that sub-board
    /// is already won or tied the next move is unconstrained.
    pub fn apply(&mut self, board: Square, cell: Square, mark: Mark) -> Result<(), Occupied> {
        self.place(board, cell, mark)?;
        self.active = if self.outcome_of(cell).is_open() {
            Some(cell)
        } else {
            None
        };
        Ok(())
    }

    /// Roll back a move made with `apply`.
    ///
    /// `previous_active` must be the active board captured before the
    /// move was applied.
    pub fn undo(&mut self, board: Square, cell: Square, previous_active: Option<Square>) {
        self.boards[board.index()].clear(cell);
        self.active = previous_active;
    }

    /// Check a move against the routing constraint and board state
    #[inline]
    pub fn validate(&self, mv: Move) -> Result<(), MoveError> {
        validate_move(self, mv)
    }

    /// Validate then apply a move. Nothing changes on rejection.
    pub fn play(&mut self, mv: Move, mark: Mark) -> Result<(), MoveError> {
        self.validate(mv)?;
        self.apply(mv.board, mv.cell, mark)
            .map_err(|Occupied(cell)| MoveError::Occupied {
                board: mv.board,
                cell,
            })
    }
}

impl fmt::Display for MetaBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for meta_row in 0..3 {
            let rendered: Vec<String> = (0..3)
                .map(|col| self.boards[meta_row * 3 + col].to_string())
                .collect();
            let lines: Vec<Vec<&str>> = rendered.iter().map(|b| b.lines().collect()).collect();
            for i in 0..5 {
                writeln!(f, "{} | {} | {}", lines[0][i], lines[1][i], lines[2][i])?;
            }
            if meta_row < 2 {
                writeln!(f, "{}", "-".repeat(34))?;
            }
        }
        Ok(())
    }
}
