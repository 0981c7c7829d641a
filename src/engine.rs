//! Main AI engine: the machine player's move selector
//!
//! The engine picks a move in two steps:
//!
//! 1. **Opening**: the very first machine move of a game is hardwired to the
//!    center of board `A`, skipping search entirely
//! 2. **Alpha-Beta**: every candidate cell of every playable sub-board is
//!    tried in priority order (center, corners, edges) and scored with a
//!    shallow minimax of the opponent's replies; the first strictly best
//!    score wins
//!
//! # Example
//!
//! ```
//! use uttt::{AIEngine, Mark, MetaBoard};
//!
//! let mut engine = AIEngine::new();
//! let mut board = MetaBoard::new();
//!
//! // Human opens in the center
//! board.play("Ee".parse().unwrap(), Mark::O).unwrap();
//!
//! let result = engine.get_move_with_stats(&board, Mark::X, false).unwrap();
//! assert_eq!(result.best_move.board.board_char(), 'E');
//! println!("AI plays {} (score {}, {} nodes)", result.best_move, result.score, result.nodes);
//! ```

use std::time::Instant;

use tracing::{debug, trace, warn};

use crate::board::{Mark, MetaBoard, Move, Square};
use crate::error::EngineError;
use crate::rules::playable_boards;
use crate::search::{Searcher, INF};

/// Default search depth for each candidate move
pub const DEFAULT_DEPTH: i8 = 2;

/// The hardwired first machine move: center of board `A`
pub const OPENING_MOVE: Move = Move {
    board: Square::ALL[0],
    cell: Square::CENTER,
};

/// Cell visiting order inside a candidate sub-board: center, corners, edges
const PRIORITY_ORDER: [Square; 9] = [
    Square::ALL[4],
    Square::ALL[0],
    Square::ALL[2],
    Square::ALL[6],
    Square::ALL[8],
    Square::ALL[1],
    Square::ALL[3],
    Square::ALL[5],
    Square::ALL[7],
];

/// Which step of the engine produced the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Hardwired opening move, no search
    Opening,
    /// Minimax with alpha-beta pruning
    AlphaBeta,
}

/// Result of a move search with statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    /// Move chosen
    pub best_move: Move,
    /// Search score of the chosen move (0 for the opening move)
    pub score: i32,
    /// Step that produced the move
    pub search_type: SearchType,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

impl MoveResult {
    #[inline]
    fn opening(time_ms: u64) -> Self {
        Self {
            best_move: OPENING_MOVE,
            score: 0,
            search_type: SearchType::Opening,
            time_ms,
            nodes: 0,
        }
    }
}

/// Main AI engine for Ultimate Tic-Tac-Toe.
///
/// Stateless between calls apart from search counters; the caller owns the
/// board and passes it in on every request.
#[derive(Debug)]
pub struct AIEngine {
    searcher: Searcher,
    /// Search depth below each candidate move
    depth: i8,
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl AIEngine {
    /// Create an engine searching at [`DEFAULT_DEPTH`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(DEFAULT_DEPTH)
    }

    /// Create an engine with a custom search depth.
    ///
    /// # Example
    ///
    /// ```
    /// use uttt::AIEngine;
    ///
    /// let engine = AIEngine::with_config(3);
    /// assert_eq!(engine.depth(), 3);
    /// ```
    #[must_use]
    pub fn with_config(depth: i8) -> Self {
        Self {
            searcher: Searcher::new(),
            depth: depth.max(0),
        }
    }

    #[inline]
    pub fn depth(&self) -> i8 {
        self.depth
    }

    /// Get the best move for `mark`.
    ///
    /// `is_opening` marks the game's first machine move.
    pub fn get_move(
        &mut self,
        board: &MetaBoard,
        mark: Mark,
        is_opening: bool,
    ) -> Result<Move, EngineError> {
        self.get_move_with_stats(board, mark, is_opening)
            .map(|result| result.best_move)
    }

    /// Get the best move with search statistics.
    ///
    /// # Errors
    ///
    /// `EngineError::NoLegalMoves` if the game is already decided. Callers
    /// check the outcome before asking for a move, so this signals a bug in
    /// the caller's turn loop.
    pub fn get_move_with_stats(
        &mut self,
        board: &MetaBoard,
        mark: Mark,
        is_opening: bool,
    ) -> Result<MoveResult, EngineError> {
        let start = Instant::now();

        if is_opening {
            if board.validate(OPENING_MOVE).is_ok() {
                debug!(mv = %OPENING_MOVE, "opening move");
                return Ok(MoveResult::opening(start.elapsed().as_millis() as u64));
            }
            warn!(mv = %OPENING_MOVE, "opening move not playable, searching instead");
        }

        let mut work_board = board.clone();
        let candidates = playable_boards(&work_board);
        if candidates.is_empty() {
            return Err(EngineError::NoLegalMoves);
        }

        self.searcher.reset_stats();
        let mut best: Option<(Move, i32)> = None;

        for label in candidates {
            for cell in PRIORITY_ORDER {
                if !work_board.sub_board(label).is_empty(cell) {
                    continue;
                }

                let previous_active = work_board.active_board();
                if work_board.apply(label, cell, mark).is_err() {
                    continue;
                }
                let score = self.searcher.search(
                    &mut work_board,
                    self.depth,
                    false,
                    mark,
                    -INF,
                    INF,
                    false,
                );
                work_board.undo(label, cell, previous_active);

                let mv = Move::new(label, cell);
                trace!(mv = %mv, score, "candidate");

                // Strictly greater: the earliest candidate keeps ties
                if best.map_or(true, |(_, best_score)| score > best_score) {
                    best = Some((mv, score));
                }
            }
        }

        let (best_move, score) = best.ok_or(EngineError::NoLegalMoves)?;
        let result = MoveResult {
            best_move,
            score,
            search_type: SearchType::AlphaBeta,
            time_ms: start.elapsed().as_millis() as u64,
            nodes: self.searcher.stats().nodes,
        };
        debug!(
            mv = %result.best_move,
            score = result.score,
            nodes = result.nodes,
            cutoffs = self.searcher.stats().cutoffs,
            time_ms = result.time_ms,
            "alpha-beta move"
        );
        Ok(result)
    }
}
