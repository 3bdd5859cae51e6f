//! Error types for review document loading and export.
//!
//! Every variant carries the path involved and offers a user-facing message
//! plus an optional remediation hint for the presentation layer.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or writing a review document.
#[derive(Debug, Error)]
pub enum IngestError {
    // === Load Errors ===
    /// The document could not be opened or read.
    #[error("failed to read review document {path}: {source}")]
    UnreadablePath {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The content is not a well-formed review document.
    #[error("malformed review document {path}: {reason}")]
    MalformedDocument { path: PathBuf, reason: String },

    // === Export Errors ===
    /// The session could not be serialized.
    #[error("failed to serialize review session: {source}")]
    Serialization {
        #[source]
        source: serde_json::Error,
    },

    /// File I/O error while writing.
    #[error("failed to {operation} file {path}: {source}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The temp file could not be moved over the target.
    #[error("failed to move {temp_path} to {target_path}: {source}")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl IngestError {
    /// Check if this error came from a failed load.
    pub fn is_load_failure(&self) -> bool {
        matches!(
            self,
            Self::UnreadablePath { .. } | Self::MalformedDocument { .. }
        )
    }

    /// Get a user-friendly message for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::UnreadablePath { path, .. } => {
                format!("Could not open the review document at {}", path.display())
            }
            Self::MalformedDocument { path, reason } => {
                format!(
                    "The file at {} is not a valid review document: {}",
                    path.display(),
                    reason
                )
            }
            Self::Serialization { .. } => {
                "An error occurred while preparing the review session for saving.".to_string()
            }
            Self::Io {
                operation, path, ..
            } => {
                format!("Could not {} the file at {}", operation, path.display())
            }
            Self::AtomicWriteFailed { target_path, .. } => {
                format!(
                    "Could not save the review to {}. Please check disk space and permissions.",
                    target_path.display()
                )
            }
        }
    }

    /// Get a suggestion for how to resolve this error.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::UnreadablePath { .. } => {
                Some("Check that the file exists and you have permission to read it.".into())
            }
            Self::MalformedDocument { .. } => Some(
                "Make sure you selected the JSON file produced by the analysis step.".into(),
            ),
            Self::Serialization { .. } => None,
            Self::Io { .. } => {
                Some("Check that you have permission to write to this location.".into())
            }
            Self::AtomicWriteFailed { .. } => {
                Some("Free up disk space or try saving to a different location.".into())
            }
        }
    }
}

/// Result type for ingest operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::MalformedDocument {
            path: PathBuf::from("/review/session.json"),
            reason: "missing field `features`".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "malformed review document /review/session.json: missing field `features`"
        );
        assert!(err.is_load_failure());
    }

    #[test]
    fn test_unreadable_path_hint() {
        let err = IngestError::UnreadablePath {
            path: PathBuf::from("/missing.json"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(err.user_message().contains("/missing.json"));
        assert!(err.suggestion().is_some());
    }
}
