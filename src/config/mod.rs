pub mod user;

use std::path::PathBuf;

use crate::answers::AnswerRecord;
use crate::error::Result;

pub use user::{config_path, load_user_config, load_user_config_from, UserConfig};

/// Answer defaults and template directory after applying the user config.
pub struct Settings {
    pub defaults: AnswerRecord,
    pub templates: Option<PathBuf>,
}

/// Resolve built-in defaults against `~/.config/msgen/config.toml`, if any.
pub fn load_settings() -> Result<Settings> {
    let builtin = AnswerRecord::default();

    match load_user_config()? {
        Some((path, config)) => {
            tracing::debug!("loaded user config from {}", path.display());
            Ok(Settings {
                defaults: config.defaults_over(&builtin, &path)?,
                templates: config.templates,
            })
        }
        None => Ok(Settings {
            defaults: builtin,
            templates: None,
        }),
    }
}
