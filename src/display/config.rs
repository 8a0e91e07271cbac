use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::foundation::error::{FrameviewError, FrameviewResult};

/// Presentation settings for a display. They never influence buffer logic.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    /// Allow the loading indicator to show while neither slot has pixels.
    pub show_loading_text: bool,
    /// Text shown by the loading indicator.
    pub loading_text: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_loading_text: true,
            loading_text: "Loading...".to_string(),
        }
    }
}

impl DisplayConfig {
    /// Parse a JSON config. Missing fields take their defaults.
    pub fn from_json_str(s: &str) -> FrameviewResult<Self> {
        serde_json::from_str(s).map_err(|e| FrameviewError::config(format!("parse JSON: {e}")))
    }

    /// Parse a JSON config from a reader.
    pub fn from_reader(r: impl Read) -> FrameviewResult<Self> {
        serde_json::from_reader(r).map_err(|e| FrameviewError::config(format!("parse JSON: {e}")))
    }

    /// Load a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> FrameviewResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            FrameviewError::config(format!("open display config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/display/config.rs"]
mod tests;
