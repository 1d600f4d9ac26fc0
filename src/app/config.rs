use super::keymap::KeyConfig;
use crate::domain::models::Section;
use crate::theme::PaletteType;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// User preferences. Every field is optional in the file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub theme: Option<PaletteType>,
    pub start_section: Option<Section>,
    pub keys: KeyConfig,
}

pub fn get_config_path() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".config");
        path.push("gitref");
        path.push("config.toml");
        path
    })
}

/// Loads the default config file. A missing file yields defaults; an
/// unreadable or malformed one yields defaults and a warning.
pub fn load_config() -> AppConfig {
    get_config_path()
        .map(|path| load_config_or_default(&path))
        .unwrap_or_default()
}

fn load_config_or_default(path: &Path) -> AppConfig {
    if !path.exists() {
        return AppConfig::default();
    }
    match load_config_from(path) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "falling back to default config");
            AppConfig::default()
        }
    }
}

pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}
