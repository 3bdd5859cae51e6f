//! The review session aggregate.
//!
//! A `Session` can only be built through validation: ids in each collection
//! must run `1..=N` in document order. Lookups afterwards are plain
//! bounds-checked indexing by `id - 1`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{ModelError, Result};
use crate::feature::Feature;
use crate::file::File;
use crate::ids::{FeatureId, FileId, RecordKind};

/// The shape of a review document before id validation.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionDocument {
    pub features: Vec<Feature>,
    pub files: Vec<File>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One loaded review: features, files, and the producer's session metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SessionDocument")]
pub struct Session {
    #[serde(flatten)]
    extra: Map<String, Value>,
    files: Vec<File>,
    features: Vec<Feature>,
}

impl Session {
    /// Build a session from features and files, validating id order.
    pub fn new(features: Vec<Feature>, files: Vec<File>) -> Result<Self> {
        Self::from_parts(features, files, Map::new())
    }

    /// Build a session carrying producer metadata alongside the records.
    pub fn from_parts(
        features: Vec<Feature>,
        files: Vec<File>,
        extra: Map<String, Value>,
    ) -> Result<Self> {
        check_sequence(RecordKind::Feature, features.iter().map(|f| f.id().get()))?;
        check_sequence(RecordKind::File, files.iter().map(|f| f.id().get()))?;
        Ok(Self {
            extra,
            files,
            features,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty() && self.files.is_empty()
    }

    // ========================================================================
    // Record Access
    // ========================================================================

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn files(&self) -> &[File] {
        &self.files
    }

    pub fn feature(&self, id: FeatureId) -> Result<&Feature> {
        id.index()
            .and_then(|index| self.features.get(index))
            .ok_or_else(|| unknown_feature(id))
    }

    pub fn feature_mut(&mut self, id: FeatureId) -> Result<&mut Feature> {
        id.index()
            .and_then(|index| self.features.get_mut(index))
            .ok_or_else(|| unknown_feature(id))
    }

    pub fn file(&self, id: FileId) -> Result<&File> {
        id.index()
            .and_then(|index| self.files.get(index))
            .ok_or_else(|| unknown_file(id))
    }

    pub fn file_mut(&mut self, id: FileId) -> Result<&mut File> {
        id.index()
            .and_then(|index| self.files.get_mut(index))
            .ok_or_else(|| unknown_file(id))
    }

    /// Check that every id addresses an existing feature.
    ///
    /// Reports the first unknown id in input order.
    pub fn check_feature_ids(&self, ids: &[FeatureId]) -> Result<()> {
        for &id in ids {
            self.feature(id)?;
        }
        Ok(())
    }

    // ========================================================================
    // Session Metadata
    // ========================================================================

    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }

    pub fn field(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }

    pub fn name(&self) -> Option<&str> {
        self.field("name").and_then(Value::as_str)
    }

    /// Directory or disk image the acquisition was taken from.
    pub fn source_path(&self) -> Option<&str> {
        self.field("source_path").and_then(Value::as_str)
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Ids of all features matching `predicate`, in document order.
    pub fn feature_ids_where<P>(&self, mut predicate: P) -> Vec<FeatureId>
    where
        P: FnMut(&Feature) -> bool,
    {
        self.features
            .iter()
            .filter(|feature| predicate(feature))
            .map(Feature::id)
            .collect()
    }

    pub fn feature_ids_of_type(&self, feature_type: &str) -> Vec<FeatureId> {
        self.feature_ids_where(|f| f.feature_type() == Some(feature_type))
    }

    pub fn feature_ids_in_file(&self, filepath: &str) -> Vec<FeatureId> {
        self.feature_ids_where(|f| f.filepath() == Some(filepath))
    }
}

impl TryFrom<SessionDocument> for Session {
    type Error = ModelError;

    fn try_from(document: SessionDocument) -> Result<Self> {
        Self::from_parts(document.features, document.files, document.extra)
    }
}

fn check_sequence(kind: RecordKind, ids: impl Iterator<Item = u32>) -> Result<()> {
    for (position, found) in ids.enumerate() {
        let expected = position + 1;
        if found as usize != expected {
            return Err(ModelError::IdSequence {
                kind,
                position,
                expected,
                found,
            });
        }
    }
    Ok(())
}

fn unknown_feature(id: FeatureId) -> ModelError {
    ModelError::UnknownId {
        kind: RecordKind::Feature,
        id: id.get(),
    }
}

fn unknown_file(id: FileId) -> ModelError {
    ModelError::UnknownId {
        kind: RecordKind::File,
        id: id.get(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_gap_in_feature_ids() {
        let err = Session::new(vec![Feature::new(1), Feature::new(3)], vec![]).unwrap_err();
        assert_eq!(
            err,
            ModelError::IdSequence {
                kind: RecordKind::Feature,
                position: 1,
                expected: 2,
                found: 3,
            }
        );
    }

    #[test]
    fn rejects_zero_file_id() {
        let err = Session::new(vec![], vec![File::new(0)]).unwrap_err();
        assert!(matches!(
            err,
            ModelError::IdSequence {
                kind: RecordKind::File,
                position: 0,
                ..
            }
        ));
    }

    #[test]
    fn lookup_is_bounds_checked() {
        let session = Session::new(vec![Feature::new(1)], vec![File::new(1)]).unwrap();
        assert!(session.feature(FeatureId::new(1)).is_ok());
        assert!(session.feature(FeatureId::new(0)).unwrap_err().is_unknown_id());
        assert!(session.feature(FeatureId::new(2)).unwrap_err().is_unknown_id());
        assert!(session.file(FileId::new(2)).unwrap_err().is_unknown_id());
    }

    #[test]
    fn check_feature_ids_reports_first_unknown() {
        let session = Session::new(vec![Feature::new(1), Feature::new(2)], vec![]).unwrap();
        assert!(session.check_feature_ids(&[]).is_ok());
        let err = session
            .check_feature_ids(&[FeatureId::new(2), FeatureId::new(5), FeatureId::new(7)])
            .unwrap_err();
        assert_eq!(
            err,
            ModelError::UnknownId {
                kind: RecordKind::Feature,
                id: 5,
            }
        );
    }

    #[test]
    fn default_session_is_empty() {
        let session = Session::default();
        assert!(session.is_empty());
        assert!(session.features().is_empty());
        assert!(session.source_path().is_none());
    }
}
