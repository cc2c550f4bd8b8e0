use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failures of a single log file operation.
///
/// None of these reach the caller of the silent operations; they are only
/// returned by the `try_*` variants on [`crate::manager::LogFileManager`].
#[derive(Error, Debug)]
pub enum LogFileError {
    #[error("Cannot open existing log file '{}': {source}", .path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error("Cannot create log file '{}': {source}", .path.display())]
    Create { path: PathBuf, source: io::Error },

    #[error("Cannot write log file '{}': {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// Result type alias for log file operations
pub type LogFileResult<T> = Result<T, LogFileError>;

impl LogFileError {
    pub fn open<P: AsRef<Path>>(path: P, source: io::Error) -> Self {
        Self::Open {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn create<P: AsRef<Path>>(path: P, source: io::Error) -> Self {
        Self::Create {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn write<P: AsRef<Path>>(path: P, source: io::Error) -> Self {
        Self::Write {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Path of the log file the failed operation targeted
    pub fn path(&self) -> &Path {
        match self {
            Self::Open { path, .. } | Self::Create { path, .. } | Self::Write { path, .. } => path,
        }
    }
}

/// Main application error type for the configuration and host layers
#[derive(Error, Debug)]
pub enum AppError {
    #[error("File system error: {0}")]
    FileSystem(#[from] io::Error),

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Get a user-friendly message for display
    pub fn user_message(&self) -> String {
        match self {
            AppError::FileSystem(e) => match e.kind() {
                io::ErrorKind::NotFound => "File or directory not found".to_string(),
                io::ErrorKind::PermissionDenied => "Permission denied".to_string(),
                _ => format!("File system error: {}", e),
            },
            AppError::Configuration { message } => format!("Configuration issue: {}", message),
        }
    }
}
