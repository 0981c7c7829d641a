//! GUI module for the Ultimate Tic-Tac-Toe game
//!
//! This module provides a native Rust GUI using egui/eframe.

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::UltimateTttApp;
pub use game_state::{GameMode, GameState};
