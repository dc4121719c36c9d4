use std::path::Path;

use crate::error::ConfigError;
use crate::game::Piece;

/// Rule switches for a game, loadable from TOML.
///
/// Board dimensions are fixed constants and deliberately absent here.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Player who moves first, and again after a turn-restoring reset
    pub starting_turn: Piece,
    /// Whether `reset` hands the move back to `starting_turn`. When false the
    /// turn carries over from the previous game.
    pub reset_restores_turn: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            starting_turn: Piece::X,
            reset_restores_turn: true,
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: GameConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.starting_turn.is_player() {
            return Err(ConfigError::Validation(format!(
                "starting_turn must be X or O, got {:?}",
                self.starting_turn
            )));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values.
    pub fn default_toml() -> String {
        toml::to_string_pretty(&GameConfig::default()).expect("default config serializes")
    }
}
