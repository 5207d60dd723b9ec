// main.rs - Random book generator: a grid of gibberish that keeps rewriting itself

use eframe::egui;
use tracing_subscriber::EnvFilter;

use random_book::config::WINDOW_SIZE;
use random_book::ui::BookApp;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(WINDOW_SIZE)
            .with_title("Random book generator"),
        ..Default::default()
    };

    eframe::run_native(
        "Random book generator",
        options,
        Box::new(|_cc| Box::new(BookApp::default())),
    )
}
