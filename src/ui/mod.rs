//! GUI module for the five-in-a-row game
//!
//! A native Rust GUI using egui/eframe. The widgets here never mutate the
//! board directly; every click is forwarded to the game core.

mod app;
mod board_view;
mod theme;

pub use app::GobangApp;
pub use board_view::BoardView;
