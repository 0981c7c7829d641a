//! A single 3x3 grid with fill tracking

use std::fmt;

use thiserror::Error;

use super::{Mark, Outcome, Square, TOTAL_CELLS};
use crate::rules::sub_board_outcome;

/// Returned by [`SubBoard::set`] when the target cell already holds a mark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cell {} is already occupied", .0.cell_char())]
pub struct Occupied(pub Square);

/// One of the nine sub-boards of the meta-board
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubBoard {
    cells: [Mark; TOTAL_CELLS],
    /// Number of non-empty cells
    count: u8,
}

impl SubBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get mark at position
    #[inline]
    pub fn get(&self, pos: Square) -> Mark {
        self.cells[pos.index()]
    }

    #[inline]
    pub fn is_empty(&self, pos: Square) -> bool {
        self.get(pos).is_empty()
    }

    /// Number of filled cells (0-9)
    #[inline]
    pub fn count(&self) -> u8 {
        self.count
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.count as usize == TOTAL_CELLS
    }

    /// Write a mark into an empty cell.
    ///
    /// Fails without touching the board if the cell is taken. Writing
    /// `Mark::Empty` is a no-op.
    pub fn set(&mut self, pos: Square, mark: Mark) -> Result<(), Occupied> {
        if !self.is_empty(pos) {
            return Err(Occupied(pos));
        }
        if mark.is_empty() {
            return Ok(());
        }
        self.cells[pos.index()] = mark;
        self.count += 1;
        Ok(())
    }

    /// Remove a mark. Search rollback only; forward play never clears.
    #[inline]
    pub(crate) fn clear(&mut self, pos: Square) {
        if !self.is_empty(pos) {
            self.cells[pos.index()] = Mark::Empty;
            self.count -= 1;
        }
    }

    /// Win over any triple first, then tie on a full board, else open
    #[inline]
    pub fn outcome(&self) -> Outcome {
        sub_board_outcome(self)
    }

    /// Empty cells in lexical order
    pub fn empty_cells(&self) -> impl Iterator<Item = Square> + '_ {
        Square::ALL.into_iter().filter(|&pos| self.is_empty(pos))
    }

    /// The three display rows, e.g. `X | O |  `
    pub fn rows(&self) -> [String; 3] {
        std::array::from_fn(|row| {
            let base = row * 3;
            format!(
                "{} | {} | {}",
                self.cells[base], self.cells[base + 1], self.cells[base + 2]
            )
        })
    }
}

impl fmt::Display for SubBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [top, middle, bottom] = self.rows();
        write!(f, "{top}\n---------\n{middle}\n---------\n{bottom}")
    }
}
