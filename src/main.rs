//! Ultimate Tic-Tac-Toe GUI
//!
//! A graphical interface for playing against the AI or another player.

use tracing_subscriber::EnvFilter;
use uttt::ui::UltimateTttApp;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Ultimate Tic-Tac-Toe"),
        ..Default::default()
    };

    eframe::run_native(
        "Ultimate Tic-Tac-Toe",
        options,
        Box::new(|cc| Ok(Box::new(UltimateTttApp::new(cc)))),
    )
}
