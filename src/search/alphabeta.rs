//! Depth-limited minimax with alpha-beta pruning
//!
//! This module implements the core search algorithm for the machine player.
//!
//! # Features
//!
//! - Fixed-depth minimax from a single player's point of view
//! - Alpha-beta cutoffs (siblings after a cutoff are never explored)
//! - Critical-move extension: a move that wins its sub-board for the side
//!   that played it does not consume search depth, so the search looks one
//!   ply past every sub-board capture. A move that only ties a sub-board
//!   spends depth as usual
//! - In-place apply/undo on one board; no per-node copies
//!
//! # Example
//!
//! ```
//! use uttt::board::{Mark, MetaBoard};
//! use uttt::search::{Searcher, INF};
//!
//! let mut board = MetaBoard::new();
//! let mut searcher = Searcher::new();
//!
//! let score = searcher.search(&mut board, 1, true, Mark::X, -INF, INF, false);
//! assert!(score >= 0);
//! assert!(board.is_empty());
//! ```

use crate::board::{Mark, MetaBoard, Outcome};
use crate::eval::{evaluate, EvalScore};

/// Unbounded alpha-beta window edge
pub const INF: i32 = i32::MAX;

/// Search statistics for diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes visited (every call to `search`)
    pub nodes: u64,
    /// Alpha-beta cutoffs
    pub cutoffs: u64,
    /// Nodes searched with an extended depth after a critical move
    pub extensions: u64,
}

/// Minimax searcher. Holds nothing but counters between calls.
#[derive(Debug, Default)]
pub struct Searcher {
    stats: SearchStats,
}

impl Searcher {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = SearchStats::default();
    }

    /// Score `board` for `player` by minimax with alpha-beta pruning.
    ///
    /// `maximizing` says whether `player` is to move at this node.
    /// `critical` is whether the move leading here won its sub-board for
    /// the side that played it; when set, this node's children are searched
    /// without spending depth.
    ///
    /// Terminal positions score `±EvalScore::WIN` or `EvalScore::DRAW`
    /// regardless of remaining depth. The board is restored exactly before
    /// returning.
    #[allow(clippy::too_many_arguments)]
    pub fn search(
        &mut self,
        board: &mut MetaBoard,
        depth: i8,
        maximizing: bool,
        player: Mark,
        mut alpha: i32,
        mut beta: i32,
        critical: bool,
    ) -> i32 {
        self.stats.nodes += 1;

        let opponent = player.opponent();
        match board.outcome() {
            Outcome::Winner(winner) if winner == player => return EvalScore::WIN,
            Outcome::Winner(_) => return EvalScore::LOSS,
            Outcome::Tie => return EvalScore::DRAW,
            Outcome::Open => {}
        }
        if depth <= 0 {
            return evaluate(board, player);
        }

        let next_depth = if critical {
            self.stats.extensions += 1;
            depth
        } else {
            depth - 1
        };

        let moves = board.legal_moves();
        if moves.is_empty() {
            // Open but nothing playable: stop recursing
            return evaluate(board, player);
        }

        let mover = if maximizing { player } else { opponent };
        let mut best = if maximizing { -INF } else { INF };

        for mv in moves {
            let previous_active = board.active_board();
            if board.apply(mv.board, mv.cell, mover).is_err() {
                continue;
            }
            let captured = board.outcome_of(mv.board) == Outcome::Winner(mover);

            let score = self.search(
                board,
                next_depth,
                !maximizing,
                player,
                alpha,
                beta,
                captured,
            );

            board.undo(mv.board, mv.cell, previous_active);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }
            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Move, Square};

    fn sq(c: char) -> Square {
        Square::from_char(c).unwrap()
    }

    /// Reference minimax without pruning, same extension rule
    fn plain_minimax(
        board: &mut MetaBoard,
        depth: i8,
        maximizing: bool,
        player: Mark,
        critical: bool,
    ) -> i32 {
        match board.outcome() {
            Outcome::Winner(w) if w == player => return EvalScore::WIN,
            Outcome::Winner(_) => return EvalScore::LOSS,
            Outcome::Tie => return EvalScore::DRAW,
            Outcome::Open => {}
        }
        if depth <= 0 {
            return evaluate(board, player);
        }
        let next_depth = if critical { depth } else { depth - 1 };
        let mover = if maximizing { player } else { player.opponent() };

        let mut scores = Vec::new();
        for mv in board.legal_moves() {
            let previous = board.active_board();
            board.apply(mv.board, mv.cell, mover).unwrap();
            let captured = board.outcome_of(mv.board) == Outcome::Winner(mover);
            scores.push(plain_minimax(board, next_depth, !maximizing, player, captured));
            board.undo(mv.board, mv.cell, previous);
        }
        if maximizing {
            scores.into_iter().max().unwrap_or_else(|| evaluate(board, player))
        } else {
            scores.into_iter().min().unwrap_or_else(|| evaluate(board, player))
        }
    }

    fn play(board: &mut MetaBoard, moves: &[&str]) {
        let mut mark = Mark::X;
        for m in moves {
            board.play(m.parse::<Move>().unwrap(), mark).unwrap();
            mark = mark.opponent();
        }
    }

    #[test]
    fn test_depth_zero_is_static_eval() {
        let mut board = MetaBoard::new();
        play(&mut board, &["Ee", "Ea", "Ae"]);
        let mut searcher = Searcher::new();
        let score = searcher.search(&mut board, 0, true, Mark::O, -INF, INF, false);
        assert_eq!(score, evaluate(&board, Mark::O));
        assert_eq!(searcher.stats().nodes, 1);
    }

    #[test]
    fn test_terminal_overrides_depth() {
        let mut board = MetaBoard::new();
        for label in ['C', 'E', 'G'] {
            for cell in ['a', 'e', 'i'] {
                board.place(sq(label), sq(cell), Mark::X).unwrap();
            }
        }
        let mut searcher = Searcher::new();
        assert_eq!(
            searcher.search(&mut board, 5, true, Mark::X, -INF, INF, false),
            EvalScore::WIN
        );
        assert_eq!(
            searcher.search(&mut board, 5, false, Mark::O, -INF, INF, false),
            EvalScore::LOSS
        );
    }

    #[test]
    fn test_search_restores_board() {
        let mut board = MetaBoard::new();
        play(&mut board, &["Ee", "Ea", "Ai", "Ia"]);
        let snapshot = board.clone();

        let mut searcher = Searcher::new();
        searcher.search(&mut board, 3, true, Mark::X, -INF, INF, false);
        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_finds_game_winning_move() {
        // O holds B and C; A needs only c to complete the top row
        let mut board = MetaBoard::new();
        for label in ['B', 'C'] {
            for cell in ['a', 'e', 'i'] {
                board.place(sq(label), sq(cell), Mark::O).unwrap();
            }
        }
        board.place(sq('A'), sq('a'), Mark::O).unwrap();
        board.place(sq('A'), sq('b'), Mark::O).unwrap();
        board.set_active_board(Some(sq('A'))).unwrap();

        let mut searcher = Searcher::new();
        let score = searcher.search(&mut board, 1, true, Mark::O, -INF, INF, false);
        assert_eq!(score, EvalScore::WIN);
    }

    #[test]
    fn test_pruning_matches_plain_minimax() {
        let lines: [&[&str]; 3] = [
            &["Ee", "Ea", "Ai"],
            &["Ea", "Ae", "Ei", "Ie", "Ec"],
            &["Aa", "Aa"],
        ];
        for moves in lines {
            let mut board = MetaBoard::new();
            let mut mark = Mark::X;
            for m in moves {
                // Skip illegal continuations in the fixture
                if board.play(m.parse().unwrap(), mark).is_ok() {
                    mark = mark.opponent();
                }
            }
            for depth in 1..=2 {
                let mut searcher = Searcher::new();
                let pruned = searcher.search(&mut board, depth, true, mark, -INF, INF, false);
                let plain = plain_minimax(&mut board, depth, true, mark, false);
                assert_eq!(pruned, plain, "depth {depth} after {moves:?}");
            }
        }
    }

    #[test]
    fn test_pruning_cuts_nodes() {
        let mut board = MetaBoard::new();
        play(&mut board, &["Ee", "Ea"]);
        let mut searcher = Searcher::new();
        searcher.search(&mut board, 2, true, Mark::X, -INF, INF, false);
        let stats = searcher.stats();
        assert!(stats.cutoffs > 0);
        // Unpruned: root, 9 replies in A, 78 answers in the routed boards
        assert!(stats.nodes < 88);
    }

    /// A: XOX/OXO/OX. (only `i` left), I: X on a and b, play forced into A
    fn one_cell_left_in_a() -> MetaBoard {
        let mut board = MetaBoard::new();
        for (i, c) in "XOXOXOOX".chars().enumerate() {
            let mark = if c == 'X' { Mark::X } else { Mark::O };
            board.place(sq('A'), Square::new(i as u8), mark).unwrap();
        }
        board.place(sq('I'), sq('a'), Mark::X).unwrap();
        board.place(sq('I'), sq('b'), Mark::X).unwrap();
        board.set_active_board(Some(sq('A'))).unwrap();
        board
    }

    #[test]
    fn test_tying_move_does_not_extend() {
        // O's only move Ai ties A and sends X to I
        let mut board = one_cell_left_in_a();
        let mut searcher = Searcher::new();
        let score = searcher.search(&mut board, 2, true, Mark::O, -INF, INF, false);

        assert_eq!(searcher.stats().extensions, 0);
        // X answers Ie: three open X pairs and the center in I
        assert_eq!(score, -3 * EvalScore::TWO_IN_LINE - EvalScore::CENTER);
        assert_eq!(score, plain_minimax(&mut board, 2, true, Mark::O, false));
    }

    #[test]
    fn test_winning_move_extends() {
        // X's only move Ai completes a-e-i and wins A
        let mut board = one_cell_left_in_a();
        let mut searcher = Searcher::new();
        let score = searcher.search(&mut board, 2, true, Mark::X, -INF, INF, false);

        assert_eq!(searcher.stats().extensions, 1);
        assert_eq!(score, plain_minimax(&mut board, 2, true, Mark::X, false));
    }

    #[test]
    fn test_reset_stats() {
        let mut board = MetaBoard::new();
        let mut searcher = Searcher::new();
        searcher.search(&mut board, 1, true, Mark::X, -INF, INF, false);
        assert!(searcher.stats().nodes > 0);
        searcher.reset_stats();
        assert_eq!(searcher.stats(), SearchStats::default());
    }
}
