use std::path::PathBuf;
use thiserror::Error;

/// Unified error type for cmake-bump operations
#[derive(Error, Debug)]
pub enum BumpError {
    #[error("No version declaration found: {0}")]
    NotFound(String),

    #[error("Version parsing error: {0}")]
    Parse(String),

    #[error("Cannot write {}: {reason}", .path.display())]
    Write { path: PathBuf, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in cmake-bump
pub type Result<T> = std::result::Result<T, BumpError>;

impl BumpError {
    /// Create a not-found error with context
    pub fn not_found(msg: impl Into<String>) -> Self {
        BumpError::NotFound(msg.into())
    }

    /// Create a parse error with context
    pub fn parse(msg: impl Into<String>) -> Self {
        BumpError::Parse(msg.into())
    }

    /// Create a write error for the given target
    pub fn write(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        BumpError::Write {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        BumpError::Config(msg.into())
    }

    /// Process exit code reported by the binary for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            BumpError::NotFound(_) => 2,
            BumpError::Parse(_) => 3,
            BumpError::Write { .. } => 4,
            BumpError::Config(_) => 5,
            BumpError::Io(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BumpError::config("bad pattern");
        assert_eq!(err.to_string(), "Configuration error: bad pattern");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: BumpError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_write_error_mentions_path() {
        let err = BumpError::write("/tmp/CMakeLists.txt", "read-only file");
        let msg = err.to_string();
        assert!(msg.contains("/tmp/CMakeLists.txt"));
        assert!(msg.contains("read-only file"));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (BumpError::not_found("x"), "No version declaration found"),
            (BumpError::parse("x"), "Version parsing error"),
            (BumpError::write("f", "x"), "Cannot write"),
            (BumpError::config("x"), "Configuration error"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }

    #[test]
    fn test_exit_codes_are_distinct() {
        let mut codes = vec![
            BumpError::not_found("").exit_code(),
            BumpError::parse("").exit_code(),
            BumpError::write("", "").exit_code(),
            BumpError::config("").exit_code(),
        ];
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), 4);
        assert!(!codes.contains(&0));
    }
}
