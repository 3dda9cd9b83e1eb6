//! Error types for quickadd.
//!
//! The parser itself never fails; these errors cover everything around it
//! (configuration, task-draft validation, the HTTP endpoint, formatting).

use thiserror::Error;

/// The crate-wide error type.
#[derive(Debug, Error)]
pub enum QuickAddError {
    /// Configuration could not be located, read or written.
    #[error("configuration error: {0}")]
    Config(String),

    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML (config file) serialization failure.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A caller-supplied value was rejected.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The task draft ended up without a title.
    #[error("no task title found")]
    EmptyTitle,

    /// The parse endpoint could not be started or crashed.
    #[error("server error: {0}")]
    Server(String),
}

impl QuickAddError {
    /// Process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgument(_) | Self::EmptyTitle => 2,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(QuickAddError::EmptyTitle.to_string(), "no task title found");
        assert_eq!(
            QuickAddError::Config("missing home".to_string()).to_string(),
            "configuration error: missing home"
        );
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: QuickAddError = io.into();
        assert!(matches!(err, QuickAddError::Io(_)));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_validation_exit_code() {
        assert_eq!(QuickAddError::EmptyTitle.exit_code(), 2);
        assert_eq!(QuickAddError::InvalidArgument("x".into()).exit_code(), 2);
    }
}
