use serde::{Deserialize, Serialize};

/// Contents of a board slot, and the return tag of every game operation.
///
/// `X` and `O` are the two players. `Blank` marks an empty slot (and doubles
/// as "rejected: column full" and "tie"). `Invalid` is never stored; it marks
/// out-of-range input and "game not over".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Piece {
    Blank,
    X,
    O,
    Invalid,
}

impl Piece {
    /// Get the opposing player. Sentinels map to themselves.
    pub fn other(self) -> Piece {
        match self {
            Piece::X => Piece::O,
            Piece::O => Piece::X,
            other => other,
        }
    }

    /// True for `X` and `O`, the only values a board slot can hold.
    pub fn is_player(self) -> bool {
        matches!(self, Piece::X | Piece::O)
    }

    /// Single-character form used by board layouts
    pub fn symbol(self) -> char {
        match self {
            Piece::Blank => '.',
            Piece::X => 'x',
            Piece::O => 'o',
            Piece::Invalid => '?',
        }
    }

    /// Parse a layout character; `?` is not accepted since `Invalid` is never stored.
    pub fn from_symbol(c: char) -> Option<Piece> {
        match c.to_ascii_lowercase() {
            '.' => Some(Piece::Blank),
            'x' => Some(Piece::X),
            'o' => Some(Piece::O),
            _ => None,
        }
    }
}
