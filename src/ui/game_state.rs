//! Game state management for the Ultimate Tic-Tac-Toe GUI

use crate::engine::DEFAULT_DEPTH;
use crate::{AIEngine, EngineError, Mark, MetaBoard, Move, MoveResult, Outcome};
use std::sync::mpsc::{channel, Receiver};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs AI
    PvE {
        human_mark: Mark,
        human_first: bool,
    },
    /// Player vs Player (hotseat)
    PvP {
        show_suggestions: bool,
    },
}

impl Default for GameMode {
    fn default() -> Self {
        // The machine plays X, the human O
        GameMode::PvE {
            human_mark: Mark::O,
            human_first: true,
        }
    }
}

impl GameMode {
    /// Mark that makes the first move of the game
    pub fn first_mark(self) -> Mark {
        match self {
            GameMode::PvE {
                human_mark,
                human_first,
            } => {
                if human_first {
                    human_mark
                } else {
                    human_mark.opponent()
                }
            }
            GameMode::PvP { .. } => Mark::X,
        }
    }
}

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<Result<MoveResult, EngineError>>,
        start_time: Instant,
    },
}

/// Main game state
pub struct GameState {
    pub board: MetaBoard,
    pub mode: GameMode,
    pub current_turn: Mark,
    pub game_over: Option<Outcome>,
    pub last_move: Option<Move>,
    pub move_history: Vec<(Move, Mark)>,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub move_timer: MoveTimer,
    pub suggested_move: Option<Move>,
    pub message: Option<String>,

    ai_depth: i8,
}

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub last_move_duration: Option<Duration>,
    pub ai_thinking_time: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            last_move_duration: None,
            ai_thinking_time: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn stop(&mut self) -> Duration {
        let duration = self.elapsed();
        self.last_move_duration = Some(duration);
        self.start_time = None;
        duration
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }

    pub fn set_ai_time(&mut self, duration: Duration) {
        self.ai_thinking_time = Some(duration);
    }
}

impl GameState {
    pub fn new(mode: GameMode) -> Self {
        Self {
            board: MetaBoard::new(),
            mode,
            current_turn: mode.first_mark(),
            game_over: None,
            last_move: None,
            move_history: Vec::new(),
            last_ai_result: None,
            ai_state: AiState::Idle,
            move_timer: MoveTimer::default(),
            suggested_move: None,
            message: None,
            ai_depth: DEFAULT_DEPTH,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.mode);
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human_mark, .. } => self.current_turn == human_mark,
            GameMode::PvP { .. } => true,
        }
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human_mark, .. } => self.current_turn != human_mark,
            GameMode::PvP { .. } => false,
        }
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Attempt a human move
    pub fn try_play(&mut self, mv: Move) -> Result<(), String> {
        if self.game_over.is_some() {
            return Err("Game is over".to_string());
        }

        if self.is_ai_thinking() {
            return Err("AI is thinking".to_string());
        }

        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }

        self.execute_move(mv).map_err(|err| err.to_string())
    }

    /// Execute a move (for both human and AI)
    fn execute_move(&mut self, mv: Move) -> Result<(), crate::MoveError> {
        let mark = self.current_turn;
        self.board.play(mv, mark)?;
        info!(mv = %mv, mark = %mark, "move played");

        self.move_history.push((mv, mark));
        self.last_move = Some(mv);
        self.suggested_move = None;
        self.message = None;

        self.move_timer.stop();

        // Announce a sub-board closing
        match self.board.outcome_of(mv.board) {
            Outcome::Winner(winner) => {
                self.message = Some(format!("{} wins board {}", winner, mv.board.board_char()));
            }
            Outcome::Tie => {
                self.message = Some(format!("Board {} is a tie", mv.board.board_char()));
            }
            Outcome::Open => {}
        }

        let outcome = self.board.outcome();
        if !outcome.is_open() {
            info!(?outcome, "game over");
            self.game_over = Some(outcome);
            return Ok(());
        }

        self.current_turn = mark.opponent();
        self.move_timer.start();
        Ok(())
    }

    /// Start AI thinking
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.game_over.is_some() {
            return;
        }

        let board = self.board.clone();
        let mark = self.current_turn;
        let depth = self.ai_depth;
        let is_opening = board.is_empty();

        let (tx, rx) = channel();

        thread::spawn(move || {
            let mut engine = AIEngine::with_config(depth);
            let result = engine.get_move_with_stats(&board, mark, is_opening);
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Check if AI has finished thinking
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking {
                receiver,
                start_time,
            } => match receiver.try_recv() {
                Ok(result) => Some((result, start_time.elapsed())),
                Err(std::sync::mpsc::TryRecvError::Empty) => None,
                Err(std::sync::mpsc::TryRecvError::Disconnected) => {
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        if let Some((move_result, elapsed)) = result {
            self.ai_state = AiState::Idle;
            self.move_timer.set_ai_time(elapsed);

            match move_result {
                Ok(move_result) => {
                    self.last_ai_result = Some(move_result);
                    if let Err(err) = self.execute_move(move_result.best_move) {
                        warn!(mv = %move_result.best_move, %err, "engine proposed an illegal move");
                        self.message = Some(format!("AI move rejected: {err}"));
                    }
                }
                Err(err) => {
                    warn!(%err, "engine failed");
                    self.message = Some(err.to_string());
                }
            }
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Ask the engine what it would play for the side to move
    pub fn request_suggestion(&mut self) {
        if self.game_over.is_some() || self.is_ai_thinking() {
            return;
        }

        let mut engine = AIEngine::with_config(self.ai_depth);
        match engine.get_move_with_stats(&self.board, self.current_turn, self.board.is_empty()) {
            Ok(result) => {
                self.suggested_move = Some(result.best_move);
                self.last_ai_result = Some(result);
            }
            Err(err) => self.message = Some(err.to_string()),
        }
    }

    /// Undo last move
    pub fn undo(&mut self) {
        if self.move_history.is_empty() || self.is_ai_thinking() {
            return;
        }

        // For PvE, take back the AI reply together with the human move
        let last_by_ai = match (self.mode, self.move_history.last()) {
            (GameMode::PvE { human_mark, .. }, Some((_, mark))) => *mark != human_mark,
            _ => false,
        };
        // The AI's opening move alone has no human move to take back
        if last_by_ai && self.move_history.len() == 1 {
            return;
        }
        let undo_count = if last_by_ai && self.move_history.len() >= 2 {
            2
        } else {
            1
        };

        // Simple undo: reset and replay
        let moves_to_keep = self.move_history.len().saturating_sub(undo_count);
        let moves: Vec<_> = self.move_history.drain(..moves_to_keep).collect();
        self.move_history.clear();

        self.board = MetaBoard::new();
        self.current_turn = self.mode.first_mark();
        self.game_over = None;
        self.last_move = None;
        self.suggested_move = None;
        self.message = None;

        for (mv, mark) in moves {
            if let Err(err) = self.board.play(mv, mark) {
                warn!(mv = %mv, %err, "replay stopped");
                break;
            }
            self.move_history.push((mv, mark));
            self.last_move = Some(mv);
            self.current_turn = mark.opponent();
        }

        self.move_timer.start();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    fn mv(s: &str) -> Move {
        s.parse().unwrap()
    }

    fn wait_for_ai(state: &mut GameState) {
        let deadline = Instant::now() + Duration::from_secs(30);
        while state.is_ai_thinking() && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(5));
            state.check_ai_result();
        }
    }

    #[test]
    fn test_first_mark() {
        assert_eq!(GameMode::default().first_mark(), Mark::O);
        let ai_first = GameMode::PvE {
            human_mark: Mark::O,
            human_first: false,
        };
        assert_eq!(ai_first.first_mark(), Mark::X);
        assert_eq!(GameMode::PvP { show_suggestions: false }.first_mark(), Mark::X);
    }

    #[test]
    fn test_pvp_turns_alternate() {
        let mut state = GameState::new(GameMode::PvP { show_suggestions: false });
        state.try_play(mv("Ee")).unwrap();
        assert_eq!(state.current_turn, Mark::O);
        state.try_play(mv("Ea")).unwrap();
        assert_eq!(state.current_turn, Mark::X);
        assert_eq!(state.last_move, Some(mv("Ea")));
    }

    #[test]
    fn test_rejected_move_reports_reason() {
        let mut state = GameState::new(GameMode::PvP { show_suggestions: false });
        state.try_play(mv("Ee")).unwrap();

        let err = state.try_play(mv("Aa")).unwrap_err();
        assert_eq!(err, "you must play in board E");
        assert_eq!(state.move_history.len(), 1);
        assert_eq!(state.current_turn, Mark::O);
    }

    #[test]
    fn test_undo_replays_history() {
        let mut state = GameState::new(GameMode::PvP { show_suggestions: false });
        for m in ["Ee", "Ea", "Ai"] {
            state.try_play(mv(m)).unwrap();
        }
        let mut expected = MetaBoard::new();
        expected.play(mv("Ee"), Mark::X).unwrap();
        expected.play(mv("Ea"), Mark::O).unwrap();

        state.undo();
        assert_eq!(state.board, expected);
        assert_eq!(state.current_turn, Mark::X);
        assert_eq!(state.last_move, Some(mv("Ea")));
    }

    #[test]
    fn test_ai_opens_in_center_of_a() {
        let mut state = GameState::new(GameMode::PvE {
            human_mark: Mark::O,
            human_first: false,
        });
        assert!(state.is_ai_turn());

        state.start_ai_thinking();
        wait_for_ai(&mut state);

        assert_eq!(state.last_move, Some(mv("Ae")));
        assert!(state.is_human_turn());
        assert_eq!(state.board.active_board(), Some(Square::CENTER));
    }

    #[test]
    fn test_pve_undo_takes_back_ai_reply() {
        let mut state = GameState::new(GameMode::default());
        state.try_play(mv("Ee")).unwrap();
        state.start_ai_thinking();
        wait_for_ai(&mut state);
        assert_eq!(state.move_history.len(), 2);

        state.undo();
        assert!(state.board.is_empty());
        assert!(state.is_human_turn());
    }

    #[test]
    fn test_pve_undo_keeps_ai_opening() {
        let mut state = GameState::new(GameMode::PvE {
            human_mark: Mark::O,
            human_first: false,
        });
        state.start_ai_thinking();
        wait_for_ai(&mut state);

        state.undo();
        assert_eq!(state.move_history.len(), 1);
        assert_eq!(state.last_move, Some(mv("Ae")));
        assert!(state.is_human_turn());
    }

    #[test]
    fn test_game_over_blocks_moves() {
        let mut state = GameState::new(GameMode::PvP { show_suggestions: false });
        state.game_over = Some(Outcome::Tie);
        assert_eq!(state.try_play(mv("Ee")), Err("Game is over".to_string()));
    }
}
