use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FileNavError {
    #[error("Path not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    #[error("Cannot read directory {}: {reason}", path.display())]
    Unreadable { path: PathBuf, reason: String },

    #[error("Cannot create {}: {reason}", path.display())]
    CreateFailed { path: PathBuf, reason: String },

    #[error("Cannot remove {}: {reason}", path.display())]
    RemoveFailed { path: PathBuf, reason: String },

    #[error("Invalid name: '{name}'")]
    InvalidName { name: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, FileNavError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_include_path() {
        let err = FileNavError::NotFound {
            path: PathBuf::from("/nonexistent/path"),
        };
        assert_eq!(err.to_string(), "Path not found: /nonexistent/path");

        let err = FileNavError::RemoveFailed {
            path: PathBuf::from("/tmp/x"),
            reason: "Directory not empty".to_string(),
        };
        assert_eq!(err.to_string(), "Cannot remove /tmp/x: Directory not empty");
    }
}
