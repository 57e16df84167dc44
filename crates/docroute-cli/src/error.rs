//! Error types for docroute-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from docroute-content
    #[error(transparent)]
    Content(#[from] docroute_content::Error),

    /// Error from docroute-fs
    #[error(transparent)]
    Fs(#[from] docroute_fs::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Failed to encode output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to encode configuration: {0}")]
    Toml(#[from] toml::ser::Error),

    /// The URL matched no document. Carries no path on purpose.
    #[error("no matching document")]
    NotFound,

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}
