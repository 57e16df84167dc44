//! Error types for docroute-content

use std::path::PathBuf;

/// Result type for docroute-content operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in docroute-content operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The file was resolved but could not be read afterwards.
    #[error("Failed to read document {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid front matter in {path}: {message}")]
    FrontMatter { path: PathBuf, message: String },

    #[error("Failed to serialize metadata: {message}")]
    Serialize { message: String },

    #[error("No document path can be derived from URL {url:?}")]
    InvalidTarget { url: String },

    #[error("Pre-parse transform failed: {message}")]
    Transform { message: String },

    #[error(transparent)]
    Fs(#[from] docroute_fs::Error),
}

impl Error {
    pub fn transform(message: impl Into<String>) -> Self {
        Self::Transform {
            message: message.into(),
        }
    }

    /// Reclassify a filesystem error raised while loading a document.
    pub(crate) fn from_read(err: docroute_fs::Error) -> Self {
        match err {
            docroute_fs::Error::Io { path, source } => Self::Read { path, source },
            other => Self::Fs(other),
        }
    }
}
