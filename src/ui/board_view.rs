//! Board rendering for the Ultimate Tic-Tac-Toe GUI

use crate::board::GRID_SIZE;
use crate::rules::playable_boards;
use crate::{Mark, MetaBoard, Move, Outcome, Square};
use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// Cells along one edge of the 9x9 board
const SIDE: usize = GRID_SIZE * GRID_SIZE;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 50.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked move if any.
    ///
    /// Clicks on illegal cells are returned too so the caller can report
    /// why the move was rejected.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &MetaBoard,
        current_turn: Mark,
        last_move: Option<Move>,
        suggested_move: Option<Move>,
        game_over: bool,
    ) -> Option<Move> {
        let available_size = ui.available_size();

        // Calculate board size to fit available space
        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / SIDE as f32;

        let (response, painter) =
            ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());

        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);

        if !game_over {
            self.draw_playable_boards(&painter, board);
        }

        self.draw_grid(&painter);
        self.draw_coordinates(&painter);
        self.draw_marks(&painter, board);
        self.draw_closed_boards(&painter, board);

        if let Some(mv) = last_move {
            self.draw_last_move_marker(&painter, mv);
        }

        if let Some(mv) = suggested_move {
            self.draw_suggestion(&painter, mv, current_turn);
        }

        // Handle hover preview and click
        let mut clicked_move = None;

        if !game_over {
            if let Some(pointer_pos) = response.hover_pos() {
                if let Some(mv) = self.screen_to_move(pointer_pos) {
                    let is_valid = board.validate(mv).is_ok();
                    self.draw_hover_preview(&painter, mv, current_turn, is_valid);

                    if response.clicked() {
                        clicked_move = Some(mv);
                    }
                }
            }
        }

        clicked_move
    }

    /// Tint the sub-boards the next move may go to
    fn draw_playable_boards(&self, painter: &Painter, board: &MetaBoard) {
        for label in playable_boards(board) {
            painter.rect_filled(self.sub_board_rect(label), CornerRadius::ZERO, active_board_fill());
        }
    }

    /// Draw the 9x9 cell grid with heavier sub-board borders
    fn draw_grid(&self, painter: &Painter) {
        let thin = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let thick = Stroke::new(SUB_BOARD_LINE_WIDTH, SUB_BOARD_LINE);
        let length = SIDE as f32 * self.cell_size;

        for i in 0..=SIDE {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;
            let stroke = if i % GRID_SIZE == 0 { thick } else { thin };

            // Vertical line
            let start = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN);
            let end = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN + length);
            painter.line_segment([start, end], stroke);

            // Horizontal line
            let start = self.board_rect.min + Vec2::new(BOARD_MARGIN, offset);
            let end = self.board_rect.min + Vec2::new(BOARD_MARGIN + length, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    /// Draw sub-board letters above and left of the board
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(14.0);
        let span = GRID_SIZE as f32 * self.cell_size;

        for i in 0..GRID_SIZE {
            let middle = BOARD_MARGIN + (i as f32 + 0.5) * span;

            // Column of sub-boards: A B C along the top
            let letter = Square::from_row_col(0, i).board_char();
            let pos = Pos2::new(self.board_rect.min.x + middle, self.board_rect.min.y + BOARD_MARGIN / 2.0);
            painter.text(pos, egui::Align2::CENTER_CENTER, letter, font.clone(), SUB_BOARD_LINE);

            // Row of sub-boards: A D G down the side
            let letter = Square::from_row_col(i, 0).board_char();
            let pos = Pos2::new(self.board_rect.min.x + BOARD_MARGIN / 2.0, self.board_rect.min.y + middle);
            painter.text(pos, egui::Align2::CENTER_CENTER, letter, font.clone(), SUB_BOARD_LINE);
        }
    }

    /// Draw all placed marks
    fn draw_marks(&self, painter: &Painter, board: &MetaBoard) {
        for (label, sub_board) in board.sub_boards() {
            for cell in Square::ALL {
                let mark = sub_board.get(cell);
                if !mark.is_empty() {
                    let center = self.move_to_screen(Move::new(label, cell));
                    let radius = self.cell_size * MARK_SIZE_RATIO;
                    Self::draw_mark(painter, center, radius, mark, MARK_STROKE_WIDTH, mark_color(mark));
                }
            }
        }
    }

    /// Shade won and tied sub-boards; draw the owner's mark across won ones
    fn draw_closed_boards(&self, painter: &Painter, board: &MetaBoard) {
        for label in Square::ALL {
            let outcome = board.outcome_of(label);
            if outcome.is_open() {
                continue;
            }

            let rect = self.sub_board_rect(label);
            painter.rect_filled(rect, CornerRadius::ZERO, closed_board_fill());

            if let Outcome::Winner(winner) = outcome {
                let radius = rect.width() * 0.35;
                Self::draw_mark(painter, rect.center(), radius, winner, BIG_MARK_STROKE_WIDTH, mark_color(winner));
            }
        }
    }

    /// Draw an X as two strokes or an O as a ring
    fn draw_mark(painter: &Painter, center: Pos2, radius: f32, mark: Mark, width: f32, color: Color32) {
        let stroke = Stroke::new(width, color);
        match mark {
            Mark::X => {
                let d = Vec2::splat(radius);
                let e = Vec2::new(radius, -radius);
                painter.line_segment([center - d, center + d], stroke);
                painter.line_segment([center - e, center + e], stroke);
            }
            Mark::O => {
                painter.circle_stroke(center, radius, stroke);
            }
            Mark::Empty => {}
        }
    }

    /// Draw last move marker in the cell corner
    fn draw_last_move_marker(&self, painter: &Painter, mv: Move) {
        let offset = Vec2::splat(self.cell_size * 0.35);
        let center = self.move_to_screen(mv) - offset;
        painter.circle_filled(center, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    /// Draw move suggestion
    fn draw_suggestion(&self, painter: &Painter, mv: Move, turn: Mark) {
        let center = self.move_to_screen(mv);
        let radius = self.cell_size * MARK_SIZE_RATIO;
        let color = mark_color(turn).gamma_multiply(0.4);

        Self::draw_mark(painter, center, radius, turn, MARK_STROKE_WIDTH, color);

        painter.text(
            center,
            egui::Align2::CENTER_CENTER,
            "?",
            egui::FontId::proportional(16.0),
            SUB_BOARD_LINE,
        );
    }

    /// Draw hover preview
    fn draw_hover_preview(&self, painter: &Painter, mv: Move, turn: Mark, is_valid: bool) {
        let center = self.move_to_screen(mv);

        if is_valid {
            let radius = self.cell_size * MARK_SIZE_RATIO;
            painter.circle_filled(center, self.cell_size * 0.45, hover_valid());
            Self::draw_mark(painter, center, radius, turn, MARK_STROKE_WIDTH, mark_color(turn).gamma_multiply(0.5));
        } else {
            let rect = Rect::from_center_size(center, Vec2::splat(self.cell_size * 0.9));
            painter.rect_filled(rect, CornerRadius::same(4), hover_invalid());
        }
    }

    /// Screen area of one sub-board
    fn sub_board_rect(&self, label: Square) -> Rect {
        let span = GRID_SIZE as f32 * self.cell_size;
        let min = self.board_rect.min
            + Vec2::new(
                BOARD_MARGIN + label.col() as f32 * span,
                BOARD_MARGIN + label.row() as f32 * span,
            );
        Rect::from_min_size(min, Vec2::splat(span))
    }

    /// Convert screen coordinates to a move
    pub fn screen_to_move(&self, screen_pos: Pos2) -> Option<Move> {
        let relative = screen_pos - self.board_rect.min;
        let x = (relative.x - BOARD_MARGIN) / self.cell_size;
        let y = (relative.y - BOARD_MARGIN) / self.cell_size;

        if x < 0.0 || y < 0.0 {
            return None;
        }
        let (col, row) = (x.floor() as usize, y.floor() as usize);
        if col >= SIDE || row >= SIDE {
            return None;
        }

        Some(Move::new(
            Square::from_row_col(row / GRID_SIZE, col / GRID_SIZE),
            Square::from_row_col(row % GRID_SIZE, col % GRID_SIZE),
        ))
    }

    /// Convert a move to the screen center of its cell
    pub fn move_to_screen(&self, mv: Move) -> Pos2 {
        let col = mv.board.col() * GRID_SIZE + mv.cell.col();
        let row = mv.board.row() * GRID_SIZE + mv.cell.row();
        let x = self.board_rect.min.x + BOARD_MARGIN + (col as f32 + 0.5) * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + (row as f32 + 0.5) * self.cell_size;
        Pos2::new(x, y)
    }
}
