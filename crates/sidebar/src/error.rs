//! CLI error types.

use std::path::PathBuf;

use sidebar_config::ConfigError;
use sidebar_content::ContentError;
use sidebar_shell::ShellError;
use sidebar_tree::SchemaError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Schema(#[from] SchemaError),

    #[error("{0}")]
    Content(#[from] ContentError),

    #[error("{0}")]
    Shell(#[from] ShellError),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Validation(String),
}
