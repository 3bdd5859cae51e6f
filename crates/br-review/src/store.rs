//! The session state store.
//!
//! `SessionStore` owns the one current [`Session`] for a review. The
//! presentation layer reads it through [`SessionStore::session`] and changes
//! it only through the named operations below. Every operation validates its
//! target ids before writing anything, so a failed call leaves the session
//! exactly as it was.

use br_model::{FeatureId, FileId, ModelError, Result, Session};

/// Owner of the current review session.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    session: Session,
    loaded: bool,
    revision: u64,
}

impl SessionStore {
    /// Create a store holding an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with `session` already loaded.
    pub fn with_session(session: Session) -> Self {
        let mut store = Self::new();
        store.load_session(session);
        store
    }

    // ========================================================================
    // Read Access
    // ========================================================================

    /// The current session, for display.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Whether a document has been loaded since the store was created.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Counter bumped by every successful load or mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Give up the store and take the session, e.g. for export.
    pub fn into_session(self) -> Session {
        self.session
    }

    // ========================================================================
    // Operations
    // ========================================================================

    /// Replace the current session wholesale. Nothing of the previous session
    /// is kept.
    pub fn load_session(&mut self, session: Session) {
        tracing::info!(
            features = session.features().len(),
            files = session.files().len(),
            replaced = self.loaded,
            "Loaded review session"
        );
        self.session = session;
        self.loaded = true;
        self.bump();
    }

    /// Flip `dismissed` on one feature and return the new value.
    pub fn toggle_feature_dismissed(&mut self, id: FeatureId) -> Result<bool> {
        let feature = self.session.feature_mut(id).inspect_err(log_rejected)?;
        let dismissed = feature.toggle_dismissed();
        tracing::debug!(feature_id = %id, dismissed, "Toggled feature dismissed");
        self.bump();
        Ok(dismissed)
    }

    /// Set `dismissed = value` on every listed feature.
    ///
    /// All ids are checked first. If any is unknown the call fails with
    /// [`ModelError::UnknownId`] and no feature changes. Duplicate ids are
    /// harmless. Returns how many features actually changed value.
    pub fn set_features_dismissed(&mut self, ids: &[FeatureId], value: bool) -> Result<usize> {
        self.session
            .check_feature_ids(ids)
            .inspect_err(log_rejected)?;

        let mut changed = 0;
        for &id in ids {
            let feature = self.session.feature_mut(id)?;
            if feature.is_dismissed() != value {
                feature.set_dismissed(value);
                changed += 1;
            }
        }
        tracing::debug!(
            requested = ids.len(),
            changed,
            dismissed = value,
            "Set features dismissed"
        );
        self.bump();
        Ok(changed)
    }

    /// Flip `verified` on one file and return the new value.
    pub fn toggle_file_verified(&mut self, id: FileId) -> Result<bool> {
        let file = self.session.file_mut(id).inspect_err(log_rejected)?;
        let verified = file.toggle_verified();
        tracing::debug!(file_id = %id, verified, "Toggled file verified");
        self.bump();
        Ok(verified)
    }

    /// Set the note on one feature, replacing any previous note.
    pub fn edit_feature_note(&mut self, id: FeatureId, note: impl Into<String>) -> Result<()> {
        let feature = self.session.feature_mut(id).inspect_err(log_rejected)?;
        let note = note.into();
        // Note text is reviewer free text about sensitive findings; log its size only.
        tracing::debug!(feature_id = %id, note_len = note.len(), "Edited feature note");
        feature.set_note(note);
        self.bump();
        Ok(())
    }

    /// Remove the note from one feature.
    pub fn delete_feature_note(&mut self, id: FeatureId) -> Result<()> {
        let feature = self.session.feature_mut(id).inspect_err(log_rejected)?;
        let had_note = feature.clear_note().is_some();
        tracing::debug!(feature_id = %id, had_note, "Deleted feature note");
        self.bump();
        Ok(())
    }

    fn bump(&mut self) {
        self.revision += 1;
    }
}

fn log_rejected(err: &ModelError) {
    tracing::warn!(error = %err, "Rejected review operation");
}

#[cfg(test)]
mod tests {
    use super::*;
    use br_model::{Feature, File, RecordKind};

    fn two_feature_store() -> SessionStore {
        let session = Session::new(
            vec![Feature::new(1), Feature::new(2).with_dismissed(true)],
            vec![File::new(1), File::new(2)],
        )
        .unwrap();
        SessionStore::with_session(session)
    }

    #[test]
    fn new_store_is_empty_and_unloaded() {
        let store = SessionStore::new();
        assert!(store.session().is_empty());
        assert!(!store.is_loaded());
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn toggle_feature_returns_new_value() {
        let mut store = two_feature_store();
        assert!(store.toggle_feature_dismissed(FeatureId::new(1)).unwrap());
        assert!(!store.toggle_feature_dismissed(FeatureId::new(2)).unwrap());
    }

    #[test]
    fn unknown_id_does_not_bump_revision() {
        let mut store = two_feature_store();
        let before = store.revision();
        let err = store
            .toggle_feature_dismissed(FeatureId::new(3))
            .unwrap_err();
        assert_eq!(
            err,
            ModelError::UnknownId {
                kind: RecordKind::Feature,
                id: 3,
            }
        );
        assert_eq!(store.revision(), before);
    }

    #[test]
    fn bulk_set_counts_changes() {
        let mut store = two_feature_store();
        let ids = [FeatureId::new(1), FeatureId::new(2), FeatureId::new(1)];
        assert_eq!(store.set_features_dismissed(&ids, true).unwrap(), 1);
        assert_eq!(store.set_features_dismissed(&ids, true).unwrap(), 0);
        assert_eq!(store.set_features_dismissed(&ids, false).unwrap(), 2);
    }

    #[test]
    fn bulk_set_with_empty_ids_is_ok() {
        let mut store = two_feature_store();
        assert_eq!(store.set_features_dismissed(&[], true).unwrap(), 0);
    }

    #[test]
    fn file_toggle_rejects_zero() {
        let mut store = two_feature_store();
        assert!(
            store
                .toggle_file_verified(FileId::new(0))
                .unwrap_err()
                .is_unknown_id()
        );
    }

    #[test]
    fn note_operations_reject_unknown_ids() {
        let mut store = two_feature_store();
        assert!(store.edit_feature_note(FeatureId::new(9), "x").is_err());
        assert!(store.delete_feature_note(FeatureId::new(9)).is_err());
    }
}
