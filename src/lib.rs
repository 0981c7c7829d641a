//! Ultimate Tic-Tac-Toe engine
//!
//! Nine 3x3 tic-tac-toe sub-boards arranged in a 3x3 meta-board:
//! - Winning a sub-board claims that cell of the meta-board
//! - Three claimed sub-boards in a line win the game
//! - The cell a player marks sends the opponent to the sub-board with the
//!   same position; a won or tied target frees the choice
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Sub-board and meta-board representation with move routing
//! - [`rules`]: Win/tie detection and move legality
//! - [`eval`]: Static position evaluation
//! - [`search`]: Minimax with alpha-beta pruning and critical-move extension
//! - [`engine`]: The machine player's move selector
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use uttt::{AIEngine, Mark, MetaBoard};
//!
//! let mut board = MetaBoard::new();
//! let mut engine = AIEngine::new();
//!
//! // Machine opens as X
//! let mv = engine.get_move(&board, Mark::X, true).unwrap();
//! board.play(mv, Mark::X).unwrap();
//! assert_eq!(mv.to_string(), "Ae");
//!
//! // Human answers in the routed sub-board
//! board.play("Ea".parse().unwrap(), Mark::O).unwrap();
//! assert_eq!(board.active_board().map(|b| b.board_char()), Some('A'));
//! ```
//!
//! # Notation
//!
//! A move is two characters: the sub-board `A`-`I` then the cell `a`-`i`,
//! both in row-major order from the top-left. `Ae` is the center of the
//! top-left sub-board.

pub mod board;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Mark, MetaBoard, Move, Outcome, Square, SubBoard};
pub use engine::{AIEngine, MoveResult, SearchType};
pub use error::{EngineError, MoveError};
