//! # Configuration
//!
//! Optional YAML settings for the `chordkeys` binary.
//!
//! ```yaml
//! base-octave: 3   # octave the root is anchored at (3-5)
//! labels: true     # print note labels under the keyboard
//! format: text     # text | json
//! ```
//!
//! Every key is optional. Unknown keys are rejected so typos surface as errors.

use crate::error::ChordError;
use crate::resolver::ChordResolver;
use crate::theory::DEFAULT_BASE_OCTAVE;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Output format for a resolved chord
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim() {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// Raw config for YAML deserialization
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct RawConfig {
    pub base_octave: Option<u8>,
    pub labels: Option<bool>,
    pub format: Option<String>,
}

/// Validated settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_octave: u8,
    pub labels: bool,
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_octave: DEFAULT_BASE_OCTAVE,
            labels: true,
            format: OutputFormat::Text,
        }
    }
}

impl Config {
    pub fn from_yaml(content: &str) -> Result<Self, ChordError> {
        // An empty document deserializes to unit, not to a map
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let raw: RawConfig =
            serde_yaml::from_str(content).map_err(|e| ChordError::ConfigError(e.to_string()))?;

        let defaults = Self::default();

        let base_octave = raw.base_octave.unwrap_or(defaults.base_octave);
        // Rejects octaves that never reach the keyboard
        ChordResolver::with_base_octave(base_octave)?;

        let format = match raw.format {
            Some(ref format) => OutputFormat::from_str(format).ok_or_else(|| {
                ChordError::ConfigError(format!("Unknown output format: {}", format))
            })?,
            None => defaults.format,
        };

        Ok(Self {
            base_octave,
            labels: raw.labels.unwrap_or(defaults.labels),
            format,
        })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ChordError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            ChordError::ConfigError(format!("cannot read '{}': {}", path.display(), e))
        })?;
        Self::from_yaml(&content)
    }

    pub fn resolver(&self) -> Result<ChordResolver, ChordError> {
        ChordResolver::with_base_octave(self.base_octave)
    }
}
