//! Game and presentation settings.

use crate::game::WIN_LEN;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Default board dimension.
pub const DEFAULT_BOARD_SIZE: usize = 9;

/// Default pixel size of one grid cell. Presentation only, no logic effect.
pub const DEFAULT_CELL_SIZE: u16 = 50;

/// Smallest board that can host a winning run.
pub const MIN_BOARD_SIZE: usize = WIN_LEN;

/// Recognized settings: the board dimension and the rendered cell size.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board dimension N.
    #[serde(default = "default_size")]
    size: usize,

    /// Pixel size of one grid cell.
    #[serde(default = "default_cell_size")]
    cell_size: u16,
}

fn default_size() -> usize {
    DEFAULT_BOARD_SIZE
}

fn default_cell_size() -> u16 {
    DEFAULT_CELL_SIZE
}

impl GameConfig {
    /// Creates a validated configuration.
    pub fn new(size: usize, cell_size: u16) -> Result<Self, ConfigError> {
        let config = Self { size, cell_size };
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!(path = %path.as_ref().display(), "loading settings file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read settings file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))?;
        config.validate()?;

        info!(size = config.size, cell_size = config.cell_size, "settings loaded");
        Ok(config)
    }

    /// Returns a copy with the given fields overridden, re-validated.
    pub fn with_overrides(
        &self,
        size: Option<usize>,
        cell_size: Option<u16>,
    ) -> Result<Self, ConfigError> {
        Self::new(
            size.unwrap_or(self.size),
            cell_size.unwrap_or(self.cell_size),
        )
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.size < MIN_BOARD_SIZE {
            return Err(ConfigError::new(format!(
                "Board size must be at least {}, got {}",
                MIN_BOARD_SIZE, self.size
            )));
        }
        if self.cell_size == 0 {
            return Err(ConfigError::new("Cell size must be nonzero".to_string()));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
            cell_size: default_cell_size(),
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where the error occurred.
    pub line: u32,
    /// Source file where the error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(*config.size(), DEFAULT_BOARD_SIZE);
        assert_eq!(*config.cell_size(), DEFAULT_CELL_SIZE);
    }

    #[test]
    fn test_rejects_undersized_board() {
        assert!(GameConfig::new(2, 50).is_err());
        assert!(GameConfig::new(3, 50).is_ok());
    }

    #[test]
    fn test_rejects_zero_cell_size() {
        assert!(GameConfig::new(9, 0).is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "size = 5\ncell_size = 40").expect("write settings");

        let config = GameConfig::from_file(file.path()).expect("load settings");
        assert_eq!(*config.size(), 5);
        assert_eq!(*config.cell_size(), 40);
    }

    #[test]
    fn test_from_file_fills_missing_fields() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "size = 12").expect("write settings");

        let config = GameConfig::from_file(file.path()).expect("load settings");
        assert_eq!(*config.size(), 12);
        assert_eq!(*config.cell_size(), DEFAULT_CELL_SIZE);
    }

    #[test]
    fn test_from_file_rejects_invalid() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "size = 1").expect("write settings");
        assert!(GameConfig::from_file(file.path()).is_err());
    }

    #[test]
    fn test_overrides_win() {
        let config = GameConfig::default()
            .with_overrides(Some(4), None)
            .expect("valid override");
        assert_eq!(*config.size(), 4);
        assert_eq!(*config.cell_size(), DEFAULT_CELL_SIZE);
    }
}
