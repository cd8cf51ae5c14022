use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when serving a configuration file from disk
#[derive(Debug, Clone, Error)]
pub enum ConfigFileError {
    /// No regular file exists at the resolved path
    #[error("File not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// Any other filesystem failure (permission denied, read error, ...)
    #[error("I/O error on {}: {message}", path.display())]
    Io { path: PathBuf, message: String },
}

impl ConfigFileError {
    /// Build an error from a failed filesystem call on `path`.
    ///
    /// Errors meaning "no file at this path" collapse into
    /// [`ConfigFileError::NotFound`]: a missing entry, or a path component
    /// that is not a directory.
    pub fn from_io(path: impl Into<PathBuf>, err: &std::io::Error) -> Self {
        let path = path.into();
        match err.kind() {
            std::io::ErrorKind::NotFound | std::io::ErrorKind::NotADirectory => {
                ConfigFileError::NotFound { path }
            }
            _ => ConfigFileError::Io {
                path,
                message: err.to_string(),
            },
        }
    }

    /// The on-disk path the error refers to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            ConfigFileError::NotFound { path } | ConfigFileError::Io { path, .. } => path,
        }
    }
}
