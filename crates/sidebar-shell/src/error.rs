//! Error type for the page shell.

/// Error raised while initializing the page shell.
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    /// Process-wide component was already installed.
    #[error("{0} is already initialized")]
    AlreadyInitialized(&'static str),
    /// Highlighter has no grammar for the requested language.
    #[error("Unknown highlight language: {0}")]
    UnknownLanguage(String),
    /// Stylesheet path is empty.
    #[error("Stylesheet path cannot be empty")]
    EmptyStylesheet,
}
