//! Core game logic: piece tags, the column-major board with run counting, and
//! the turn-tracking state machine.

mod board;
mod piece;
mod state;

pub use board::{Board, MoveError, BOARD_COLS, BOARD_ROWS};
pub use piece::Piece;
pub use state::{BoardGame, GameOutcome};
