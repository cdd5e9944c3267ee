use std::fs;
use std::path::{Path, PathBuf};

use crate::model::settings::Settings;

/// Error type for settings loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse settings: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Read settings from a `taskdown.toml` file. A missing file is not an
/// error; it yields the defaults (no global filter, no global query).
pub fn read_settings(path: &Path) -> Result<Settings, ConfigError> {
    if !path.exists() {
        return Ok(Settings::default());
    }
    let text = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    let settings: Settings = toml::from_str(&text)?;
    Ok(settings)
}
