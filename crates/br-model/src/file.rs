//! File records from the acquisition.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::ids::FileId;

/// One file found in the acquisition.
///
/// `verified` is the only reviewer state; all producer fields live in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct File {
    id: FileId,
    #[serde(default)]
    verified: bool,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl File {
    pub fn new(id: u32) -> Self {
        Self {
            id: FileId::new(id),
            verified: false,
            extra: Map::new(),
        }
    }

    #[must_use]
    pub fn with_verified(mut self, verified: bool) -> Self {
        self.verified = verified;
        self
    }

    /// Attach a producer-supplied field.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    pub fn id(&self) -> FileId {
        self.id
    }

    pub fn is_verified(&self) -> bool {
        self.verified
    }

    /// Flip the verified flag and return the new value.
    pub fn toggle_verified(&mut self) -> bool {
        self.verified = !self.verified;
        self.verified
    }

    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }

    pub fn field(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }

    /// Path relative to the acquisition source.
    pub fn filepath(&self) -> Option<&str> {
        self.field("filepath").and_then(Value::as_str)
    }

    pub fn filename(&self) -> Option<&str> {
        self.field("filename").and_then(Value::as_str)
    }

    /// Whether the file is allocated in the filesystem. Absent means allocated.
    pub fn is_allocated(&self) -> bool {
        self.field("allocated")
            .and_then(Value::as_bool)
            .unwrap_or(true)
    }
}
