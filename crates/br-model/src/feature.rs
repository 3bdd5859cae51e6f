//! Flagged findings produced by the upstream analysis pass.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::ids::FeatureId;

/// One flagged finding.
///
/// Only `dismissed` and `note` are reviewer state. Every other key supplied by
/// the producer (feature type, forensic path, context, ...) is kept in
/// `extra` and written back untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    id: FeatureId,
    #[serde(default)]
    dismissed: bool,
    #[serde(default)]
    note: Option<String>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl Feature {
    /// Create an open feature with no note and no producer fields.
    pub fn new(id: u32) -> Self {
        Self {
            id: FeatureId::new(id),
            dismissed: false,
            note: None,
            extra: Map::new(),
        }
    }

    #[must_use]
    pub fn with_dismissed(mut self, dismissed: bool) -> Self {
        self.dismissed = dismissed;
        self
    }

    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Attach a producer-supplied field.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    // ========================================================================
    // Reviewer state
    // ========================================================================

    pub fn id(&self) -> FeatureId {
        self.id
    }

    pub fn is_dismissed(&self) -> bool {
        self.dismissed
    }

    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    pub fn set_dismissed(&mut self, dismissed: bool) {
        self.dismissed = dismissed;
    }

    /// Flip the dismissed flag and return the new value.
    pub fn toggle_dismissed(&mut self) -> bool {
        self.dismissed = !self.dismissed;
        self.dismissed
    }

    pub fn set_note(&mut self, note: impl Into<String>) {
        self.note = Some(note.into());
    }

    /// Remove the note, returning the previous one.
    pub fn clear_note(&mut self) -> Option<String> {
        self.note.take()
    }

    // ========================================================================
    // Producer fields (read-only)
    // ========================================================================

    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }

    pub fn field(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }

    /// Kind of finding, e.g. `"email.txt"` or `"ccn.txt"`.
    pub fn feature_type(&self) -> Option<&str> {
        self.field("feature_type").and_then(Value::as_str)
    }

    /// Path of the file the finding was located in.
    pub fn filepath(&self) -> Option<&str> {
        self.field("filepath").and_then(Value::as_str)
    }

    /// The matched text itself.
    pub fn value(&self) -> Option<&str> {
        self.field("feature").and_then(Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_reviewer_fields_default() {
        let feature: Feature =
            serde_json::from_value(json!({ "id": 4, "feature_type": "pii.txt" }))
                .expect("deserialize feature");
        assert_eq!(feature.id(), FeatureId::new(4));
        assert!(!feature.is_dismissed());
        assert_eq!(feature.note(), None);
        assert_eq!(feature.feature_type(), Some("pii.txt"));
    }

    #[test]
    fn toggle_returns_new_value() {
        let mut feature = Feature::new(1);
        assert!(feature.toggle_dismissed());
        assert!(!feature.toggle_dismissed());
    }

    #[test]
    fn clear_note_returns_previous() {
        let mut feature = Feature::new(1).with_note("first");
        feature.set_note("second");
        assert_eq!(feature.clear_note(), Some("second".to_string()));
        assert_eq!(feature.note(), None);
    }

    #[test]
    fn producer_fields_round_trip() {
        let input = json!({
            "id": 1,
            "feature_type": "email.txt",
            "forensic_path": "1024",
            "feature": "someone@example.org",
            "context": "To: someone@example.org",
            "note": null,
            "dismissed": false,
            "file": 3,
            "filepath": "docs/letter.txt"
        });
        let feature: Feature = serde_json::from_value(input.clone()).expect("deserialize");
        assert_eq!(feature.value(), Some("someone@example.org"));
        assert_eq!(feature.filepath(), Some("docs/letter.txt"));
        let output = serde_json::to_value(&feature).expect("serialize");
        assert_eq!(output, input);
    }
}
