use std::path::PathBuf;

/// Errors that can occur when building a game from a text layout.
///
/// Rows are counted from the top line of the layout, starting at 0.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("expected {expected} rows, found {found}")]
    RowCount { expected: usize, found: usize },

    #[error("line {line} has {found} cells, expected {expected}")]
    RowWidth {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown symbol {symbol:?} at line {line}, column {col}")]
    UnknownSymbol { line: usize, col: usize, symbol: char },

    #[error("piece at line {line}, column {col} has an empty slot below it")]
    FloatingPiece { line: usize, col: usize },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
