//! Error types for the front-desk ledger.
//!
//! Every failure a desk operation can hit is recoverable: the caller reports
//! it and the stored ledger stays as it was.

use std::path::PathBuf;
use thiserror::Error;

use crate::model::section::Section;

/// The main error type for front-desk operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Input Errors ===
    /// A required field is missing or malformed.
    #[error("invalid input: {message}")]
    Validation {
        /// Description of what is wrong with the input.
        message: String,
    },

    /// The room already has a check-in for the day.
    #[error("room {room} is already occupied")]
    DuplicateRoom {
        /// The room that was rejected.
        room: String,
    },

    /// An edit or delete targeted an entry that does not exist.
    #[error("no {section} entry #{} (the list has {len})", .index + 1)]
    IndexOutOfRange {
        /// Section that was addressed.
        section: Section,
        /// Zero-based index that was requested.
        index: usize,
        /// Length of the list at the time of the request.
        len: usize,
    },

    // === Import Errors ===
    /// An imported backup is not a valid ledger document.
    #[error("invalid backup file: {0}")]
    InvalidFormat(#[source] serde_json::Error),

    // === Storage Errors ===
    /// The ledger file or its directory cannot be written.
    #[error("storage unavailable at {path}: {source}")]
    StorageUnavailable {
        /// Path that could not be accessed.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Encoding Errors ===
    /// JSON encoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for front-desk operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a new validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Whether the error was caused by what the user typed rather than by
    /// the environment.
    #[must_use]
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::Validation { .. }
                | Self::DuplicateRoom { .. }
                | Self::IndexOutOfRange { .. }
                | Self::InvalidFormat(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display() {
        let err = Error::validation("room is required");
        assert_eq!(err.to_string(), "invalid input: room is required");
    }

    #[test]
    fn test_duplicate_room_display() {
        let err = Error::DuplicateRoom {
            room: "101".to_string(),
        };
        assert_eq!(err.to_string(), "room 101 is already occupied");
    }

    #[test]
    fn test_index_out_of_range_is_one_based() {
        let err = Error::IndexOutOfRange {
            section: Section::Checkout,
            index: 3,
            len: 2,
        };
        assert_eq!(err.to_string(), "no Check-Out entry #4 (the list has 2)");
    }

    #[test]
    fn test_from_json_error() {
        let json_result: std::result::Result<i32, serde_json::Error> =
            serde_json::from_str("not valid json");
        if let Err(json_err) = json_result {
            let err: Error = json_err.into();
            assert!(matches!(err, Error::Json(_)));
        }
    }

    #[test]
    fn test_storage_unavailable_display() {
        let err = Error::StorageUnavailable {
            path: PathBuf::from("/tmp/ledger.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/ledger.json"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn test_is_user_error() {
        assert!(Error::validation("x").is_user_error());
        assert!(Error::DuplicateRoom { room: "1".into() }.is_user_error());
        assert!(!Error::StorageUnavailable {
            path: PathBuf::from("/tmp"),
            source: std::io::Error::new(std::io::ErrorKind::Other, "disk"),
        }
        .is_user_error());
        assert!(!Error::ConfigValidation { message: "x".into() }.is_user_error());
    }
}
