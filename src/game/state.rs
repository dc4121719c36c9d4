use tracing::{debug, trace};

use super::{Board, MoveError, Piece, BOARD_COLS, BOARD_ROWS};
use crate::config::GameConfig;
use crate::error::LayoutError;

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Piece),
    Tie,
}

impl GameOutcome {
    /// The tag `BoardGame::game_state` reports for this outcome
    pub fn to_piece(self) -> Piece {
        match self {
            GameOutcome::Winner(piece) => piece,
            GameOutcome::Tie => Piece::Blank,
        }
    }
}

/// Board plus turn tracking. The only mutation points are `drop_piece`
/// (and its typed twin `try_drop`) and `reset`.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardGame {
    board: Board,
    turn: Piece,
    config: GameConfig,
}

impl BoardGame {
    /// Empty board, X to move
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    /// Empty board with the given rules. An unplayable `starting_turn` falls
    /// back to X; use `GameConfig::validate` to reject it up front.
    pub fn with_config(mut config: GameConfig) -> Self {
        if !config.starting_turn.is_player() {
            config.starting_turn = Piece::X;
        }
        BoardGame {
            board: Board::new(),
            turn: config.starting_turn,
            config,
        }
    }

    /// Build a game from text, top row first, one line per row.
    ///
    /// Cells are `x`, `o` or `.` (case-insensitive); blank lines and
    /// surrounding whitespace are ignored. The turn is the default starting
    /// player, since a layout carries no record of forfeited turns.
    ///
    /// ```
    /// use mini_connect_four::game::{BoardGame, Piece};
    ///
    /// let game = BoardGame::from_layout("
    ///     xoxo
    ///     oxox
    ///     xoxo
    /// ").unwrap();
    /// assert_eq!(game.game_state(), Piece::Blank);
    /// ```
    pub fn from_layout(layout: &str) -> Result<Self, LayoutError> {
        let lines: Vec<&str> = layout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if lines.len() != BOARD_ROWS {
            return Err(LayoutError::RowCount {
                expected: BOARD_ROWS,
                found: lines.len(),
            });
        }

        let mut grid = [[Piece::Blank; BOARD_COLS]; BOARD_ROWS];
        for (line_idx, line) in lines.iter().enumerate() {
            let width = line.chars().count();
            if width != BOARD_COLS {
                return Err(LayoutError::RowWidth {
                    line: line_idx,
                    expected: BOARD_COLS,
                    found: width,
                });
            }
            for (col, symbol) in line.chars().enumerate() {
                grid[line_idx][col] = Piece::from_symbol(symbol).ok_or(
                    LayoutError::UnknownSymbol {
                        line: line_idx,
                        col,
                        symbol,
                    },
                )?;
            }
        }

        let mut board = Board::new();
        for col in 0..BOARD_COLS {
            // Bottom line first, so a blank followed by a piece is a floater
            let mut seen_blank = false;
            for line_idx in (0..BOARD_ROWS).rev() {
                let piece = grid[line_idx][col];
                if piece == Piece::Blank {
                    seen_blank = true;
                    continue;
                }
                if seen_blank {
                    return Err(LayoutError::FloatingPiece { line: line_idx, col });
                }
                board
                    .drop_piece(col, piece)
                    .expect("layout never overfills a column");
            }
        }

        let mut game = Self::new();
        game.board = board;
        Ok(game)
    }

    /// Empty the board. With the default config the turn goes back to the
    /// starting player; with `reset_restores_turn = false` it carries over.
    pub fn reset(&mut self) {
        self.board.clear();
        if self.config.reset_restores_turn {
            self.turn = self.config.starting_turn;
        }
        debug!(turn = ?self.turn, "board reset");
    }

    /// Drop the current player's piece into `column` and pass the turn.
    ///
    /// The turn passes even when the move is rejected. Returns the piece
    /// placed, `Invalid` when `column` is off the board, or `Blank` when the
    /// column is already full.
    pub fn drop_piece(&mut self, column: i32) -> Piece {
        match self.try_drop(column) {
            Ok(piece) => piece,
            Err(MoveError::ColumnFull(_)) => Piece::Blank,
            Err(MoveError::InvalidColumn(_) | MoveError::NotAPlayer(_)) => Piece::Invalid,
        }
    }

    /// `drop_piece` with the rejection reason spelled out. The turn still
    /// passes on error.
    pub fn try_drop(&mut self, column: i32) -> Result<Piece, MoveError> {
        let mover = self.turn;
        self.turn = mover.other();

        let result = match column_index(column) {
            Some(col) => self.board.drop_piece(col, mover).map(|_| mover),
            None => Err(MoveError::InvalidColumn(column)),
        };
        match &result {
            Ok(_) => trace!(column, piece = ?mover, "piece dropped"),
            Err(err) => debug!(column, piece = ?mover, %err, "move rejected, turn forfeited"),
        }
        result
    }

    /// Piece at `row` (0 = bottom) of `column`.
    ///
    /// `Invalid` when either coordinate is off the board, `Blank` when the
    /// slot has not been filled yet.
    pub fn piece_at(&self, row: i32, column: i32) -> Piece {
        match (row_index(row), column_index(column)) {
            (Some(row), Some(col)) => self.board.get(row, col),
            _ => Piece::Invalid,
        }
    }

    /// Outcome as a tag: `Invalid` while any column still has room (game not
    /// over), otherwise the winner, or `Blank` for a tie.
    pub fn game_state(&self) -> Piece {
        self.outcome().map_or(Piece::Invalid, GameOutcome::to_piece)
    }

    /// Outcome of a full board, `None` while the game is in progress.
    ///
    /// The winner holds the strictly longer run in any single row or column;
    /// equal longest runs are a tie with no further tie-break.
    pub fn outcome(&self) -> Option<GameOutcome> {
        if !self.board.is_full() {
            return None;
        }

        let x_max = self.board.longest_run(Piece::X);
        let o_max = self.board.longest_run(Piece::O);
        let outcome = if x_max > o_max {
            GameOutcome::Winner(Piece::X)
        } else if o_max > x_max {
            GameOutcome::Winner(Piece::O)
        } else {
            GameOutcome::Tie
        };
        debug!(x_max, o_max, ?outcome, "evaluated full board");
        Some(outcome)
    }

    /// Piece that the next `drop_piece` will place
    pub fn current_turn(&self) -> Piece {
        self.turn
    }

    /// Fill height of `column`, `None` when off the board
    pub fn column_height(&self, column: i32) -> Option<usize> {
        column_index(column).map(|col| self.board.height(col))
    }

    /// Check if every column is full
    pub fn is_full(&self) -> bool {
        self.board.is_full()
    }

    /// Longest run of `piece` on the current board, full or not
    pub fn longest_run(&self, piece: Piece) -> usize {
        self.board.longest_run(piece)
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}

impl Default for BoardGame {
    fn default() -> Self {
        Self::new()
    }
}

fn column_index(column: i32) -> Option<usize> {
    usize::try_from(column).ok().filter(|&col| col < BOARD_COLS)
}

fn row_index(row: i32) -> Option<usize> {
    usize::try_from(row).ok().filter(|&row| row < BOARD_ROWS)
}
