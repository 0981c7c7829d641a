//! Board representation for Ultimate Tic-Tac-Toe

pub mod meta_board;
pub mod sub_board;


use std::fmt;
use std::str::FromStr;

use crate::error::MoveError;

// Re-exports
pub use meta_board::MetaBoard;
pub use sub_board::{Occupied, SubBoard};

/// Side length of a sub-board and of the meta-board (3x3)
pub const GRID_SIZE: usize = 3;
pub const TOTAL_CELLS: usize = GRID_SIZE * GRID_SIZE; // 9

/// Cell contents, doubling as player identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    /// Get opponent mark
    #[inline]
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
            Mark::Empty => Mark::Empty,
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Mark::Empty
    }

    pub fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
            Mark::Empty => ' ',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Terminal status of a sub-board or of the meta-board.
///
/// Always derived from cell contents, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Open,
    Winner(Mark),
    Tie,
}

impl Outcome {
    #[inline]
    pub fn is_open(self) -> bool {
        self == Outcome::Open
    }

    #[inline]
    pub fn winner(self) -> Option<Mark> {
        match self {
            Outcome::Winner(mark) => Some(mark),
            _ => None,
        }
    }
}

/// A 3x3 label in row-major order.
///
/// The same label names a cell inside a sub-board (`a`..`i`) and a
/// sub-board inside the meta-board (`A`..`I`): the cell played routes the
/// opponent to the sub-board with the same index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// All nine labels in lexical order
    pub const ALL: [Square; TOTAL_CELLS] = [
        Square(0),
        Square(1),
        Square(2),
        Square(3),
        Square(4),
        Square(5),
        Square(6),
        Square(7),
        Square(8),
    ];

    pub const CENTER: Square = Square(4);

    #[inline]
    pub fn new(index: u8) -> Self {
        debug_assert!((index as usize) < TOTAL_CELLS);
        Self(index)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn row(self) -> usize {
        self.index() / GRID_SIZE
    }

    #[inline]
    pub fn col(self) -> usize {
        self.index() % GRID_SIZE
    }

    #[inline]
    pub fn from_row_col(row: usize, col: usize) -> Self {
        Self::new((row * GRID_SIZE + col) as u8)
    }

    /// Parse a label letter, either case (`a`/`A` .. `i`/`I`)
    pub fn from_char(c: char) -> Option<Self> {
        let lower = c.to_ascii_lowercase();
        if ('a'..='i').contains(&lower) {
            Some(Self(lower as u8 - b'a'))
        } else {
            None
        }
    }

    /// Sub-board letter (`A`..`I`)
    #[inline]
    pub fn board_char(self) -> char {
        (b'A' + self.0) as char
    }

    /// Cell letter (`a`..`i`)
    #[inline]
    pub fn cell_char(self) -> char {
        (b'a' + self.0) as char
    }
}

/// A move: the sub-board and the cell inside it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub board: Square,
    pub cell: Square,
}

impl Move {
    #[inline]
    pub fn new(board: Square, cell: Square) -> Self {
        Self { board, cell }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.board.board_char(), self.cell.cell_char())
    }
}

/// Two-character notation: board `A-I` then position `a-i` (case-insensitive)
impl FromStr for Move {
    type Err = MoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let (Some(b), Some(c), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(MoveError::InvalidNotation(s.to_string()));
        };
        match (Square::from_char(b), Square::from_char(c)) {
            (Some(board), Some(cell)) => Ok(Move::new(board, cell)),
            _ => Err(MoveError::InvalidNotation(s.to_string())),
        }
    }
}

/// Winning triples: 3 rows, 3 columns, 2 diagonals
pub const WIN_LINES: [[Square; 3]; 8] = [
    [Square(0), Square(1), Square(2)],
    [Square(3), Square(4), Square(5)],
    [Square(6), Square(7), Square(8)],
    [Square(0), Square(3), Square(6)],
    [Square(1), Square(4), Square(7)],
    [Square(2), Square(5), Square(8)],
    [Square(0), Square(4), Square(8)],
    [Square(2), Square(4), Square(6)],
];
