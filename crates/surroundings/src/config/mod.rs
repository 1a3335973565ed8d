//! Configuration system
//!
//! Configuration files are TOML or RON, picked by file extension.

use std::collections::BTreeMap;
use std::path::Path;

pub use serde::{Deserialize, Serialize};

use crate::audio::ResourceLocationError;

/// Mod identifier used for localization keys when none is configured
pub const DEFAULT_MOD_ID: &str = "surroundings";

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        match extension(path) {
            Some("toml") => toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
            Some("ron") => ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = match extension(path) {
            Some("toml") => {
                toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
            }
            Some("ron") => ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?,
            _ => return Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// A configured sound name is not a valid resource location
    #[error("Invalid sound '{name}': {source}")]
    InvalidSound {
        /// The offending entry as written in the file
        name: String,
        /// Why it failed to parse
        source: ResourceLocationError,
    },
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurroundingsConfig {
    /// Prefix for localization keys
    pub mod_id: String,
    /// Sound events known to the static registry
    pub sounds: SoundsConfig,
    /// Named acoustics compiled into the library at startup
    pub acoustics: AcousticsConfig,
}

impl Default for SurroundingsConfig {
    fn default() -> Self {
        Self {
            mod_id: DEFAULT_MOD_ID.to_string(),
            sounds: SoundsConfig::default(),
            acoustics: AcousticsConfig::default(),
        }
    }
}

impl Config for SurroundingsConfig {}

/// Sound events to register, as `namespace:path` strings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SoundsConfig {
    /// Sound event names
    pub events: Vec<String>,
}

/// Acoustic definitions: name -> ordered fragment list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AcousticsConfig {
    /// Each entry compiles to a simple or simultaneous acoustic
    pub definitions: BTreeMap<String, Vec<String>>,
}
