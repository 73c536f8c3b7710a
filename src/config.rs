//! Player settings loaded from a JSON file.
//!
//! Every field is optional in the file; anything missing takes its default.
//!
//! ```json
//! {
//!   "seed": 42,
//!   "audio": { "volume": 0.8, "muted": false },
//!   "view": { "cell_width": 2, "cell_height": 1 }
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MIN_CELL_SIZE: u16 = 1;
pub const MAX_CELL_SIZE: u16 = 4;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    pub volume: f32,
    pub muted: bool,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            volume: 1.0,
            muted: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewSettings {
    pub cell_width: u16,
    pub cell_height: u16,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            cell_width: 2,
            cell_height: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Fixed piece seed; `None` seeds from the OS.
    pub seed: Option<u64>,
    pub audio: AudioSettings,
    pub view: ViewSettings,
}

impl Settings {
    /// Load settings from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("no config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        Self::from_json_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Clamp values into their usable ranges.
    ///
    /// Volume goes to `0.0..=1.0` (NaN becomes 0), cell sizes to `1..=4`.
    pub fn sanitized(mut self) -> Self {
        self.audio.volume = if self.audio.volume.is_nan() {
            0.0
        } else {
            self.audio.volume.clamp(0.0, 1.0)
        };
        self.view.cell_width = self.view.cell_width.clamp(MIN_CELL_SIZE, MAX_CELL_SIZE);
        self.view.cell_height = self.view.cell_height.clamp(MIN_CELL_SIZE, MAX_CELL_SIZE);
        self
    }
}
