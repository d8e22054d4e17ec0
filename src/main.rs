//! Five-in-a-row GUI
//!
//! A graphical two-player game of Gomoku on a 15x15 board.

use gobang::ui::GobangApp;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([920.0, 720.0])
            .with_min_inner_size([700.0, 560.0])
            .with_title("Five in a Row"),
        ..Default::default()
    };

    eframe::run_native(
        "Five in a Row",
        options,
        Box::new(|cc| Ok(Box::new(GobangApp::new(cc)))),
    )
}
