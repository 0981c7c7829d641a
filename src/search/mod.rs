//! Search module for the Ultimate Tic-Tac-Toe AI
//!
//! Contains:
//! - Depth-limited minimax with alpha-beta pruning
//! - Critical-move depth extension

pub mod alphabeta;

pub use alphabeta::{SearchStats, Searcher, INF};
