//! Loading [`LayoutOptions`] from TOML or JSON files.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::options::{LayoutOptions, OptionsError};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read options file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid TOML in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Unsupported options file extension: {0}")]
    UnsupportedFormat(PathBuf),
    #[error(transparent)]
    Invalid(#[from] OptionsError),
}

/// Parse options from TOML text. Missing fields take their defaults.
pub fn parse_toml(source: &str) -> Result<LayoutOptions, toml::de::Error> {
    toml::from_str(source)
}

/// Read options from `path`, choosing the format by extension, then validate.
pub fn load_options(path: &Path) -> Result<LayoutOptions, ConfigError> {
    let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let options = match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => parse_toml(&source).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })?,
        Some("json") => serde_json::from_str(&source).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })?,
        _ => return Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
    };

    options.validate()?;
    debug!(path = %path.display(), "loaded layout options");
    Ok(options)
}
