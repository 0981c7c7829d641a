//! Property-based tests for the board model and the search.
//!
//! Positions come from seeded random playouts, so every failure is
//! reproducible from the shrunk seed.

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use uttt::board::{Mark, MetaBoard, Move, Outcome, Square};
use uttt::eval::{evaluate, EvalScore};
use uttt::search::{Searcher, INF};
use uttt::AIEngine;

// =============================================================================
// Strategies for generating test inputs
// =============================================================================

fn arb_seed() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Play up to `max_moves` random legal moves from the empty board, X first
fn random_playout(seed: u64, max_moves: usize) -> (MetaBoard, Vec<(Move, Mark)>) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut board = MetaBoard::new();
    let mut history = Vec::new();
    let mut mark = Mark::X;

    for _ in 0..max_moves {
        let moves = board.legal_moves();
        if moves.is_empty() {
            break;
        }
        let mv = moves[rand::Rng::gen_range(&mut rng, 0..moves.len())];
        board.play(mv, mark).unwrap();
        history.push((mv, mark));
        mark = mark.opponent();
    }

    (board, history)
}

fn arb_position() -> impl Strategy<Value = (MetaBoard, Vec<(Move, Mark)>)> {
    (0usize..81).prop_flat_map(|max_moves| arb_seed().prop_map(move |seed| random_playout(seed, max_moves)))
}

/// Every sub-board tied, then `empties` random cells cleared.
///
/// A cleared tie holds no line, so the position is still open, and the game
/// is decided after at most `empties` more moves.
fn near_full_position(seed: u64, empties: usize) -> MetaBoard {
    const TIES: [&str; 2] = ["XOXOXOOXO", "OXOXOXXOX"];

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut cells: Vec<(Square, Square, Mark)> = Vec::new();
    for label in Square::ALL {
        let pattern = TIES[rand::Rng::gen_range(&mut rng, 0..TIES.len())];
        for (cell, c) in Square::ALL.into_iter().zip(pattern.chars()) {
            let mark = if c == 'X' { Mark::X } else { Mark::O };
            cells.push((label, cell, mark));
        }
    }

    // Drop `empties` distinct cells
    for _ in 0..empties {
        let idx = rand::Rng::gen_range(&mut rng, 0..cells.len());
        cells.swap_remove(idx);
    }

    let mut board = MetaBoard::new();
    for (label, cell, mark) in cells {
        board.place(label, cell, mark).unwrap();
    }
    board
}

/// Reference minimax without pruning
fn plain_minimax(board: &mut MetaBoard, depth: i8, maximizing: bool, player: Mark, critical: bool) -> i32 {
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
    let best = if maximizing {
        scores.into_iter().max()
    } else {
        scores.into_iter().min()
    };
    best.unwrap_or_else(|| evaluate(board, player))
}

// =============================================================================
// Board invariants
// =============================================================================

proptest! {
    /// Each sub-board's fill count matches its marked cells; the total
    /// matches the moves played
    #[test]
    fn prop_fill_count_matches_cells((board, history) in arb_position()) {
        for (_, sub_board) in board.sub_boards() {
            let marked = Square::ALL.iter().filter(|&&cell| !sub_board.get(cell).is_empty()).count();
            prop_assert_eq!(sub_board.count() as usize, marked);
        }
        prop_assert_eq!(board.filled_count() as usize, history.len());
    }

    /// A closed sub-board keeps its outcome for the rest of the game
    #[test]
    fn prop_outcomes_are_monotonic(seed in arb_seed()) {
        let (_, history) = random_playout(seed, 81);
        let mut board = MetaBoard::new();
        let mut previous = [Outcome::Open; 9];

        for (mv, mark) in history {
            board.play(mv, mark).unwrap();
            for label in Square::ALL {
                let now = board.outcome_of(label);
                if !previous[label.index()].is_open() {
                    prop_assert_eq!(now, previous[label.index()]);
                }
                previous[label.index()] = now;
            }
        }
    }

    /// A playout always ends in a decided game once nothing is left to play
    #[test]
    fn prop_playout_ends_decided(seed in arb_seed()) {
        let (board, history) = random_playout(seed, 81);
        prop_assert!(!board.outcome().is_open());
        prop_assert!(history.len() <= 81);
    }

    /// Applying then undoing any legal move restores the board exactly
    #[test]
    fn prop_apply_undo_round_trip((board, history) in arb_position()) {
        let mark = if history.len() % 2 == 0 { Mark::X } else { Mark::O };
        let mut work = board.clone();

        for mv in board.legal_moves() {
            let previous = work.active_board();
            work.apply(mv.board, mv.cell, mark).unwrap();
            work.undo(mv.board, mv.cell, previous);
            prop_assert_eq!(&work, &board);
        }
    }

    /// The active board confines legal moves; a free choice spans every
    /// open sub-board
    #[test]
    fn prop_active_board_restricts_moves((board, _) in arb_position()) {
        let moves = board.legal_moves();
        if !board.outcome().is_open() {
            prop_assert!(moves.is_empty());
            return Ok(());
        }
        prop_assert!(!moves.is_empty());

        match board.active_board() {
            Some(active) => {
                prop_assert!(board.outcome_of(active).is_open());
                prop_assert!(moves.iter().all(|mv| mv.board == active));
            }
            None => {
                for label in Square::ALL {
                    let open = board.outcome_of(label).is_open();
                    prop_assert_eq!(open, moves.iter().any(|mv| mv.board == label));
                }
            }
        }
        for mv in moves {
            prop_assert!(board.validate(mv).is_ok());
        }
    }
}

// =============================================================================
// Search
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    /// Pruning changes the node count, never the score
    #[test]
    fn prop_alphabeta_matches_plain_minimax(
        (board, history) in (0usize..40).prop_flat_map(|n| arb_seed().prop_map(move |s| random_playout(s, n))),
        depth in 1i8..=2,
    ) {
        prop_assume!(board.outcome().is_open());
        let player = if history.len() % 2 == 0 { Mark::X } else { Mark::O };
        let mut work = board.clone();

        let mut searcher = Searcher::new();
        let pruned = searcher.search(&mut work, depth, true, player, -INF, INF, false);
        prop_assert_eq!(&work, &board);

        let plain = plain_minimax(&mut work, depth, true, player, false);
        prop_assert_eq!(pruned, plain);
    }

    /// Searching the whole remaining tree yields a game result
    #[test]
    fn prop_full_tree_is_bounded(seed in arb_seed(), empties in 1usize..=6, maximizing in any::<bool>()) {
        let board = near_full_position(seed, empties);
        prop_assert!(board.outcome().is_open());

        let mut work = board.clone();
        let mut searcher = Searcher::new();
        let score = searcher.search(&mut work, empties as i8, maximizing, Mark::X, -INF, INF, false);

        prop_assert!([EvalScore::LOSS, EvalScore::DRAW, EvalScore::WIN].contains(&score));
        prop_assert_eq!(&work, &board);
        prop_assert_eq!(score, plain_minimax(&mut work, empties as i8, maximizing, Mark::X, false));
    }

    /// The engine only ever proposes legal moves
    #[test]
    fn prop_engine_move_is_legal((board, history) in arb_position()) {
        prop_assume!(board.outcome().is_open());
        let mark = if history.len() % 2 == 0 { Mark::X } else { Mark::O };

        let mut engine = AIEngine::with_config(1);
        let mv = engine.get_move(&board, mark, history.is_empty()).unwrap();
        prop_assert!(board.validate(mv).is_ok());
    }
}
