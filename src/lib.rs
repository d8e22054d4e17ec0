//! Two-player five-in-a-row (Gomoku) desktop game
//!
//! A single-window hotseat game on a 15x15 board: click an intersection to
//! place a stone, Black moves first, five or more contiguous same-color
//! stones in any of the four line directions wins.
//!
//! # Architecture
//!
//! The game core is toolkit-free; the GUI is a thin egui adapter on top:
//! - [`board`]: board storage, coordinates, stone colors
//! - [`rules`]: win detection (pure functions over the board)
//! - [`game`]: turn bookkeeping and the play-move transaction
//! - [`ui`]: egui/eframe rendering and input
//!
//! # Quick Start
//!
//! ```
//! use gobang::{Game, MoveOutcome, Pos, Stone};
//!
//! let mut game = Game::new();
//! assert_eq!(game.current_turn(), Stone::Black);
//!
//! match game.play(Pos::new(7, 7)) {
//!     MoveOutcome::Placed(stone) => assert_eq!(stone, Stone::Black),
//!     _ => unreachable!(),
//! }
//! assert_eq!(game.current_turn(), Stone::White);
//! ```

pub mod board;
pub mod game;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, BOARD_SIZE};
pub use game::{Game, GameResult, MoveOutcome};
