use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::answers::AnswerRecord;
use crate::error::{MsgenError, Result};

/// User-level configuration loaded from `~/.config/msgen/config.toml`.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserConfig {
    /// Template directory used when `--templates` is not given.
    #[serde(default)]
    pub templates: Option<PathBuf>,

    /// Answer defaults, keyed like an answers file (e.g. `registry = "..."`).
    #[serde(default)]
    pub defaults: toml::Table,
}

impl UserConfig {
    /// Layer the configured defaults over the built-in ones.
    pub fn defaults_over(&self, base: &AnswerRecord, path: &Path) -> Result<AnswerRecord> {
        base.overlay(self.defaults.clone())
            .map_err(|e| MsgenError::ConfigParse {
                path: path.to_path_buf(),
                source: e,
            })
    }
}

/// Get the path to the user config file.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("msgen").join("config.toml"))
}

/// Load user configuration from the XDG config directory.
///
/// Returns `Ok(None)` if the config file does not exist.
/// Returns `Err` if the file exists but cannot be read or parsed.
pub fn load_user_config() -> Result<Option<(PathBuf, UserConfig)>> {
    let path = match config_path() {
        Some(p) => p,
        None => return Ok(None),
    };

    Ok(load_user_config_from(&path)?.map(|config| (path, config)))
}

pub fn load_user_config_from(path: &Path) -> Result<Option<UserConfig>> {
    if !path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(path).map_err(|e| MsgenError::Io {
        context: format!("reading user config {}", path.display()),
        source: e,
    })?;

    let config: UserConfig = toml::from_str(&content).map_err(|e| MsgenError::ConfigParse {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(Some(config))
}
