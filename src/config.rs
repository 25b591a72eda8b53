use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::EditorError;

const DEFAULT_FILE: &str = "out.txt";
const PLACEHOLDER: &str = "Created Successfully!";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// File edited when no path is given on the command line.
    pub default_file: PathBuf,
    /// Text written into that freshly created file.
    pub placeholder: String,
    /// Show cursor position and raw rows above the status line.
    pub show_debug_line: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            default_file: PathBuf::from(DEFAULT_FILE),
            placeholder: PLACEHOLDER.to_string(),
            show_debug_line: false,
        }
    }
}

impl EditorConfig {
    pub fn from_file(path: &Path) -> Result<Self, EditorError> {
        let content = std::fs::read_to_string(path).map_err(|e| EditorError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| EditorError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// `<config dir>/tailpad/config.toml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tailpad").join("config.toml"))
    }

    /// Load the user config, falling back to defaults when there is none.
    pub fn load() -> Result<Self, EditorError> {
        match Self::default_path() {
            Some(path) if path.is_file() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }
}
