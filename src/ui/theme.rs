//! Theme constants for the Ultimate Tic-Tac-Toe GUI

use egui::Color32;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(245, 240, 228);
pub const GRID_LINE: Color32 = Color32::from_rgb(150, 140, 125);
pub const SUB_BOARD_LINE: Color32 = Color32::from_rgb(45, 40, 35);

// Mark colors
pub const X_MARK: Color32 = Color32::from_rgb(200, 60, 60);
pub const O_MARK: Color32 = Color32::from_rgb(50, 100, 200);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(230, 170, 40);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

// Functions for colors that can't be const
pub fn active_board_fill() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 220, 90, 70)
}

pub fn closed_board_fill() -> Color32 {
    Color32::from_rgba_unmultiplied(120, 115, 105, 90)
}

pub fn hover_valid() -> Color32 {
    Color32::from_rgba_unmultiplied(80, 80, 80, 60)
}

pub fn hover_invalid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 50, 50, 80)
}

// Panel colors - dark modern theme
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Timer colors
pub const TIMER_NORMAL: Color32 = Color32::from_rgb(80, 200, 120);
pub const TIMER_WARNING: Color32 = Color32::from_rgb(255, 180, 50);
pub const TIMER_CRITICAL: Color32 = Color32::from_rgb(255, 70, 70);

// Sizes
pub const BOARD_MARGIN: f32 = 30.0;
pub const GRID_LINE_WIDTH: f32 = 1.0;
pub const SUB_BOARD_LINE_WIDTH: f32 = 4.0;
pub const MARK_STROKE_WIDTH: f32 = 3.0;
pub const MARK_SIZE_RATIO: f32 = 0.32;
pub const BIG_MARK_STROKE_WIDTH: f32 = 10.0;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 4.0;

/// Paint color for a mark
pub fn mark_color(mark: crate::Mark) -> Color32 {
    match mark {
        crate::Mark::X => X_MARK,
        crate::Mark::O => O_MARK,
        crate::Mark::Empty => TEXT_MUTED,
    }
}
