//! Error types for the review session model.

use thiserror::Error;

use crate::ids::RecordKind;

/// Errors raised when addressing or assembling session records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// A mutation or lookup referenced an id outside the current collection.
    #[error("unknown {kind} id {id}")]
    UnknownId { kind: RecordKind, id: u32 },

    /// A record's id does not match its position in the collection.
    #[error("{kind} at position {position} has id {found}, expected {expected}")]
    IdSequence {
        kind: RecordKind,
        position: usize,
        expected: usize,
        found: u32,
    },
}

impl ModelError {
    /// Check if this is an unknown id error.
    pub fn is_unknown_id(&self) -> bool {
        matches!(self, Self::UnknownId { .. })
    }
}

/// Result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ModelError::UnknownId {
            kind: RecordKind::Feature,
            id: 9,
        };
        assert_eq!(err.to_string(), "unknown feature id 9");

        let err = ModelError::IdSequence {
            kind: RecordKind::File,
            position: 1,
            expected: 2,
            found: 3,
        };
        assert_eq!(err.to_string(), "file at position 1 has id 3, expected 2");
    }
}
