#![allow(unused_assignments)]

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum MsgenError {
    #[error("Prompt cancelled by user")]
    PromptCancelled,

    #[error("Cannot prompt for '{key}': input is not interactive")]
    #[diagnostic(help(
        "Use --defaults, --answers <FILE> or -d key=value to answer without a terminal"
    ))]
    PromptUnavailable { key: String },

    #[error("Unknown question '{key}'")]
    #[diagnostic(help("Run `msgen questions` to list the accepted keys"))]
    UnknownQuestion { key: String },

    #[error("Invalid answer for '{key}': {message}")]
    InvalidAnswer { key: String, message: String },

    #[error("Failed to parse answers file {path}")]
    #[diagnostic(help("Answers files use the same keys as `msgen questions`"))]
    AnswersParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize answers")]
    AnswersSerialize {
        #[source]
        source: toml::ser::Error,
    },

    #[error("Failed to parse user config {path}")]
    #[diagnostic(help("Check the TOML syntax in your msgen config.toml"))]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Template '{name}' not found in {dir}")]
    #[diagnostic(help("Run `msgen templates --templates <DIR>` to see which templates are missing"))]
    TemplateMissing { name: String, dir: PathBuf },

    #[error("Template rendering failed: {file}")]
    #[diagnostic(help("Check your Tera template syntax"))]
    RenderError {
        file: String,
        #[source]
        source: tera::Error,
    },

    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, MsgenError>;
