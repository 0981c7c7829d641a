//! Terminal Ultimate Tic-Tac-Toe
//!
//! The human plays O, the AI plays X. Moves are two letters: the board
//! (`A`-`I`) then the position inside it (`a`-`i`).

use std::io::{self, BufRead, Write};

use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;
use uttt::engine::DEFAULT_DEPTH;
use uttt::{AIEngine, Mark, MetaBoard, Move, Outcome};

const HUMAN: Mark = Mark::O;
const AI: Mark = Mark::X;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum First {
    Human,
    Ai,
}

#[derive(Parser)]
#[command(name = "uttt-cli", about = "Play Ultimate Tic-Tac-Toe against the AI")]
struct Args {
    /// Who makes the first move (asked interactively when omitted)
    #[arg(long, value_enum)]
    first: Option<First>,

    /// Search depth below each candidate move
    #[arg(long, default_value_t = DEFAULT_DEPTH)]
    depth: i8,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let mut input = stdin.lock();

    println!("Welcome to Ultimate Tic-Tac-Toe!");
    println!("You are '{HUMAN}', and the AI is '{AI}'.");
    println!("Enter your moves as two letters: the first for the board (A-I), the second for the position (a-i).");
    println!("For example, 'Ae' means you're playing in the center of the top-left board.");

    let first = match args.first {
        Some(first) => first,
        None => match ask_first(&mut input)? {
            Some(first) => first,
            None => return Ok(()),
        },
    };

    let mut board = MetaBoard::new();
    let mut engine = AIEngine::with_config(args.depth);
    let mut current = match first {
        First::Human => HUMAN,
        First::Ai => AI,
    };

    loop {
        println!("\nCurrent board state:");
        println!("{board}");
        println!("Current player: {current}");
        if let Some(active) = board.active_board() {
            println!("You must play in board {}.", active.board_char());
        }

        let mv = if current == HUMAN {
            match read_human_move(&mut input, &board)? {
                Some(mv) => mv,
                None => return Ok(()),
            }
        } else {
            println!("AI is thinking...");
            let result = engine.get_move_with_stats(&board, AI, board.is_empty())?;
            println!("AI played: {}", result.best_move);
            info!(
                mv = %result.best_move,
                score = result.score,
                nodes = result.nodes,
                time_ms = result.time_ms,
                "ai move"
            );
            result.best_move
        };

        board.play(mv, current)?;

        match board.outcome_of(mv.board) {
            Outcome::Winner(winner) => {
                println!("Board {} has been won by {winner}!", mv.board.board_char())
            }
            Outcome::Tie => println!("Board {} is a tie!", mv.board.board_char()),
            Outcome::Open => {}
        }

        let outcome = board.outcome();
        if !outcome.is_open() {
            println!("\nFinal board state:");
            println!("{board}");
            match outcome {
                Outcome::Winner(winner) => println!("Player {winner} wins the game!"),
                _ => println!("The game is a tie!"),
            }
            info!(?outcome, "game over");
            return Ok(());
        }

        current = current.opponent();
    }
}

/// Prompt until the player picks who moves first. `None` on end of input.
fn ask_first(input: &mut impl BufRead) -> io::Result<Option<First>> {
    loop {
        let Some(line) = prompt(input, "Who should make the first move? (1 for You, 2 for AI): ")? else {
            return Ok(None);
        };
        match line.trim() {
            "1" => return Ok(Some(First::Human)),
            "2" => return Ok(Some(First::Ai)),
            _ => println!("Invalid input. Please enter 1 or 2."),
        }
    }
}

/// Prompt until the human enters a legal move. `None` on end of input.
fn read_human_move(input: &mut impl BufRead, board: &MetaBoard) -> io::Result<Option<Move>> {
    loop {
        let Some(line) = prompt(input, "Enter your move: ")? else {
            return Ok(None);
        };
        let checked = line
            .parse::<Move>()
            .and_then(|mv| board.validate(mv).map(|()| mv));
        match checked {
            Ok(mv) => return Ok(Some(mv)),
            Err(err) => println!("Invalid move: {err}. Try again."),
        }
    }
}

fn prompt(input: &mut impl BufRead, text: &str) -> io::Result<Option<String>> {
    print!("{text}");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}
