use super::Piece;

pub const BOARD_ROWS: usize = 3;
pub const BOARD_COLS: usize = 4;

/// Rejected drop. The game-level API folds these into `Piece` sentinels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {0} is outside the board")]
    InvalidColumn(i32),

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("{0:?} cannot be placed on the board")]
    NotAPlayer(Piece),
}

/// Column-major board. Row 0 is the bottom of each column; only the first
/// `heights[col]` slots of a column are occupied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Piece; BOARD_ROWS]; BOARD_COLS],
    heights: [usize; BOARD_COLS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Piece::Blank; BOARD_ROWS]; BOARD_COLS],
            heights: [0; BOARD_COLS],
        }
    }

    /// Get the piece at a position, `Blank` above the column's fill height.
    /// Panics if the position is off the board.
    pub fn get(&self, row: usize, col: usize) -> Piece {
        if row < self.heights[col] {
            self.cells[col][row]
        } else {
            Piece::Blank
        }
    }

    /// Number of pieces in a column. Panics if `col` is off the board.
    pub fn height(&self, col: usize) -> usize {
        self.heights[col]
    }

    /// Occupied slots of a column, bottom first
    pub fn column(&self, col: usize) -> &[Piece] {
        &self.cells[col][..self.heights[col]]
    }

    /// Check if a column is full. Columns off the board count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= BOARD_COLS {
            return true;
        }
        self.heights[col] == BOARD_ROWS
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, piece: Piece) -> Result<usize, MoveError> {
        if !piece.is_player() {
            return Err(MoveError::NotAPlayer(piece));
        }
        if col >= BOARD_COLS {
            return Err(MoveError::InvalidColumn(
                i32::try_from(col).unwrap_or(i32::MAX),
            ));
        }
        if self.is_column_full(col) {
            return Err(MoveError::ColumnFull(col));
        }

        let row = self.heights[col];
        self.cells[col][row] = piece;
        self.heights[col] += 1;
        Ok(row)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..BOARD_COLS).all(|col| self.is_column_full(col))
    }

    /// Longest run of `piece` along any single column or row.
    ///
    /// Columns are scanned bottom to top and rows left to right; the two
    /// directions never join, so every slot belongs to exactly one vertical and
    /// one horizontal line.
    pub fn longest_run(&self, piece: Piece) -> usize {
        let vertical = (0..BOARD_COLS)
            .map(|col| run_length(self.column(col).iter().copied(), piece))
            .max()
            .unwrap_or(0);
        let horizontal = (0..BOARD_ROWS)
            .map(|row| run_length((0..BOARD_COLS).map(|col| self.get(row, col)), piece))
            .max()
            .unwrap_or(0);
        vertical.max(horizontal)
    }

    /// Empty every column
    pub fn clear(&mut self) {
        *self = Board::new();
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Length of the longest maximal run of `piece` in one line.
fn run_length(line: impl Iterator<Item = Piece>, piece: Piece) -> usize {
    let mut best = 0;
    let mut current = 0;
    for cell in line {
        if cell == piece {
            current += 1;
            best = best.max(current);
        } else {
            current = 0;
        }
    }
    best
}
