//! # Mini Connect Four
//!
//! A 3-row, 4-column drop game. Players alternate dropping pieces into
//! columns; once every slot is filled, whoever holds the longest unbroken run
//! in a single row or column wins. Rejected moves still cost the mover their
//! turn.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: pieces, board, turn-tracking state machine
//! - [`config`] — TOML rule configuration loading and validation
//! - [`error`] — Structured error types
//!
//! ```
//! use mini_connect_four::game::{BoardGame, Piece};
//!
//! let mut game = BoardGame::new();
//! assert_eq!(game.drop_piece(0), Piece::X);
//! assert_eq!(game.drop_piece(9), Piece::Invalid); // O forfeits
//! assert_eq!(game.drop_piece(0), Piece::X);
//! assert_eq!(game.piece_at(1, 0), Piece::X);
//! assert_eq!(game.game_state(), Piece::Invalid); // not over yet
//! ```

pub mod config;
pub mod error;
pub mod game;

pub use game::{BoardGame, Piece, BOARD_COLS, BOARD_ROWS};
