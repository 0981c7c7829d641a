//! Evaluation module for Ultimate Tic-Tac-Toe positions
//!
//! This module provides the static scoring used at the search horizon.
//! The evaluation considers:
//! - Sub-boards already won or lost
//! - Two-in-a-line threats inside open sub-boards
//! - Center control of open sub-boards

pub mod heuristic;
pub mod patterns;

pub use heuristic::{evaluate, evaluate_sub_board};
pub use patterns::EvalScore;
