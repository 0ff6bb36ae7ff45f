use std::borrow::Cow;
use std::fmt;
use std::path::{Path, PathBuf};

use super::embedded;
use crate::error::{MsgenError, Result};

/// Where template bodies are read from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TemplateSource {
    /// The templates shipped inside the binary.
    #[default]
    Embedded,
    /// A directory holding one file per template id.
    Directory(PathBuf),
}

impl TemplateSource {
    pub fn from_option(dir: Option<&Path>) -> Self {
        match dir {
            Some(d) => Self::Directory(d.to_path_buf()),
            None => Self::Embedded,
        }
    }

    /// Read a template's raw bytes. Copy jobs write these unchanged.
    pub fn load(&self, name: &str) -> Result<Cow<'static, [u8]>> {
        match self {
            Self::Embedded => embedded::get(name)
                .map(|s| Cow::Borrowed(s.as_bytes()))
                .ok_or_else(|| MsgenError::TemplateMissing {
                    name: name.to_string(),
                    dir: PathBuf::from("<embedded>"),
                }),
            Self::Directory(dir) => {
                let path = dir.join(name);
                if !path.is_file() {
                    return Err(MsgenError::TemplateMissing {
                        name: name.to_string(),
                        dir: dir.clone(),
                    });
                }
                std::fs::read(&path)
                    .map(Cow::Owned)
                    .map_err(|e| MsgenError::Io {
                        context: format!("reading template {}", path.display()),
                        source: e,
                    })
            }
        }
    }

    /// Read a template that is going to be rendered.
    pub fn load_text(&self, name: &str) -> Result<Cow<'static, str>> {
        match self.load(name)? {
            Cow::Borrowed(bytes) => std::str::from_utf8(bytes).map(Cow::Borrowed).map_err(|e| {
                invalid_utf8(name, std::io::Error::new(std::io::ErrorKind::InvalidData, e))
            }),
            Cow::Owned(bytes) => String::from_utf8(bytes).map(Cow::Owned).map_err(|e| {
                invalid_utf8(name, std::io::Error::new(std::io::ErrorKind::InvalidData, e))
            }),
        }
    }

    /// Template ids from `names` this source cannot provide.
    pub fn missing<'a>(&self, names: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
        names
            .into_iter()
            .filter(|name| match self {
                Self::Embedded => embedded::get(name).is_none(),
                Self::Directory(dir) => !dir.join(name).is_file(),
            })
            .collect()
    }
}

impl fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Embedded => f.write_str("built-in templates"),
            Self::Directory(dir) => write!(f, "{}", dir.display()),
        }
    }
}

fn invalid_utf8(name: &str, source: std::io::Error) -> MsgenError {
    MsgenError::Io {
        context: format!("template {name} is not valid UTF-8"),
        source,
    }
}
