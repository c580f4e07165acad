//! Startup configuration, read from an optional JSON file.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::core::{BoardLayout, BoardMode, SessionSettings, TileTag, check_size};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoardConfig {
    pub width: i32,
    pub height: i32,
    /// Cell edge in layout units. One unit is one terminal row or two columns.
    pub cell_size: u16,
    pub gap: u16,
    pub replay_delay_ms: u64,
    pub max_drag_steps: usize,
    pub palette: BTreeSet<TileTag>,
    pub mode: BoardMode,
    pub pen: TileTag,
    pub log_file: PathBuf,
    pub log_level: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            width: 6,
            height: 5,
            cell_size: 2,
            gap: 1,
            replay_delay_ms: 120,
            max_drag_steps: 80,
            palette: TileTag::COLORS.into_iter().collect(),
            mode: BoardMode::Random,
            pen: TileTag::Fire,
            log_file: PathBuf::from("drop_board.log"),
            log_level: "info".to_string(),
        }
    }
}

impl BoardConfig {
    /// Defaults when `path` is `None`, otherwise the file's values over the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            None => BoardConfig::default(),
            Some(path) => {
                let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })?;
                BoardConfig::from_json(&text)?
            }
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Err(err) = check_size(self.width, self.height) {
            return Err(ConfigError::Invalid(err.to_string()));
        }
        if self.cell_size == 0 {
            return Err(ConfigError::Invalid("cell_size must be at least 1".to_string()));
        }
        if self.max_drag_steps == 0 {
            return Err(ConfigError::Invalid("max_drag_steps must be at least 1".to_string()));
        }
        if self.palette.contains(&TileTag::Empty) {
            return Err(ConfigError::Invalid("palette cannot contain empty".to_string()));
        }
        self.tracing_level()?;
        Ok(())
    }

    pub fn tracing_level(&self) -> Result<tracing::Level, ConfigError> {
        self.log_level
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("unknown log_level '{}'", self.log_level)))
    }

    pub fn session_settings(&self) -> SessionSettings {
        SessionSettings {
            max_drag_steps: self.max_drag_steps,
            replay_delay: Duration::from_millis(self.replay_delay_ms),
        }
    }

    pub fn layout(&self, width: i32, height: i32) -> BoardLayout {
        BoardLayout {
            cell_size: self.cell_size as f64,
            gap: self.gap as f64,
            width,
            height,
        }
    }
}
