//! Errors raised at the I/O edges.
//!
//! The scoring core never fails: malformed payloads degrade to default
//! values. Only reading files, parsing JSON from disk, configuration, and
//! command-line arguments produce errors.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// File system related errors
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Output file could not be created or written
    #[error("Failed to write {}: {source}", .path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input file is not valid JSON
    #[error("Invalid JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid command-line argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        let message = message.into();
        log::warn!("invalid argument: {message}");
        Self::InvalidArgument(message)
    }

    /// True when the user can fix the problem by changing input or flags.
    pub fn is_user_fixable(&self) -> bool {
        matches!(
            self,
            Self::Json { .. } | Self::Config(_) | Self::InvalidArgument(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_include_path() {
        let err = Error::Io {
            path: PathBuf::from("firm.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(err.to_string(), "Failed to read firm.json: missing");
        assert!(!err.is_user_fixable());
    }

    #[test]
    fn test_output_errors_name_the_write_side() {
        let err = Error::Output {
            path: PathBuf::from("/dev/full"),
            source: std::io::Error::other("no space left on device"),
        };
        assert_eq!(
            err.to_string(),
            "Failed to write /dev/full: no space left on device"
        );
    }

    #[test]
    fn test_json_errors_are_user_fixable() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = Error::Json {
            path: PathBuf::from("bad.json"),
            source,
        };
        assert!(err.to_string().starts_with("Invalid JSON in bad.json"));
        assert!(err.is_user_fixable());
    }
}
