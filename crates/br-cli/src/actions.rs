//! Reviewer actions requested on the command line.
//!
//! Actions are applied to a [`SessionStore`] in a fixed order: bulk dismiss,
//! bulk restore, dismissed toggles, verified toggles, note edits, note
//! deletions. The first failing action stops the run.

use std::fmt;
use std::str::FromStr;

use anyhow::{Context, Result};
use br_model::{FeatureId, FileId};
use br_review::SessionStore;
use tracing::{debug, warn};

use crate::logging::redact_value;

/// A note to attach to a feature, written as `ID=TEXT`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteEdit {
    pub id: FeatureId,
    pub text: String,
}

/// Why a `NoteEdit` could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteEditParseError(String);

impl fmt::Display for NoteEditParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for NoteEditParseError {}

impl FromStr for NoteEdit {
    type Err = NoteEditParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (id, text) = s
            .split_once('=')
            .ok_or_else(|| NoteEditParseError(format!("expected ID=TEXT, got '{s}'")))?;
        let id = id
            .parse()
            .map_err(|_| NoteEditParseError(format!("invalid feature id '{id}'")))?;
        Ok(Self {
            id,
            text: text.to_string(),
        })
    }
}

/// Everything the reviewer asked for in one run.
#[derive(Debug, Clone, Default)]
pub struct ReviewActions {
    pub dismiss: Vec<FeatureId>,
    pub dismiss_types: Vec<String>,
    pub dismiss_files: Vec<String>,
    pub restore: Vec<FeatureId>,
    pub toggle_dismissed: Vec<FeatureId>,
    pub toggle_verified: Vec<FileId>,
    pub notes: Vec<NoteEdit>,
    pub clear_notes: Vec<FeatureId>,
}

impl ReviewActions {
    pub fn is_empty(&self) -> bool {
        self.dismiss.is_empty()
            && self.dismiss_types.is_empty()
            && self.dismiss_files.is_empty()
            && self.restore.is_empty()
            && self.toggle_dismissed.is_empty()
            && self.toggle_verified.is_empty()
            && self.notes.is_empty()
            && self.clear_notes.is_empty()
    }
}

/// Counts of what a run changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AppliedActions {
    pub dismissed: usize,
    pub restored: usize,
    pub toggled_features: usize,
    pub toggled_files: usize,
    pub notes_edited: usize,
    pub notes_deleted: usize,
}

/// Apply `actions` to the store in order.
///
/// # Errors
///
/// Fails on the first action that references an unknown id. Each individual
/// operation is all-or-nothing, but operations already applied earlier in
/// the run stay applied in `store`.
pub fn apply_actions(store: &mut SessionStore, actions: &ReviewActions) -> Result<AppliedActions> {
    let mut applied = AppliedActions::default();

    let to_dismiss = dismiss_targets(store, actions);
    if !to_dismiss.is_empty() {
        applied.dismissed = store
            .set_features_dismissed(&to_dismiss, true)
            .context("dismiss features")?;
    }
    if !actions.restore.is_empty() {
        applied.restored = store
            .set_features_dismissed(&actions.restore, false)
            .context("restore features")?;
    }

    for &id in &actions.toggle_dismissed {
        store
            .toggle_feature_dismissed(id)
            .with_context(|| format!("toggle dismissed on feature {id}"))?;
        applied.toggled_features += 1;
    }
    for &id in &actions.toggle_verified {
        store
            .toggle_file_verified(id)
            .with_context(|| format!("toggle verified on file {id}"))?;
        applied.toggled_files += 1;
    }

    for edit in &actions.notes {
        debug!(feature_id = %edit.id, note = redact_value(&edit.text), "Applying note");
        store
            .edit_feature_note(edit.id, edit.text.as_str())
            .with_context(|| format!("edit note on feature {}", edit.id))?;
        applied.notes_edited += 1;
    }
    for &id in &actions.clear_notes {
        store
            .delete_feature_note(id)
            .with_context(|| format!("delete note on feature {id}"))?;
        applied.notes_deleted += 1;
    }

    Ok(applied)
}

/// Explicit ids plus every feature matching a requested type or file.
fn dismiss_targets(store: &SessionStore, actions: &ReviewActions) -> Vec<FeatureId> {
    let session = store.session();
    let mut ids = actions.dismiss.clone();
    for feature_type in &actions.dismiss_types {
        let matched = session.feature_ids_of_type(feature_type);
        if matched.is_empty() {
            warn!(%feature_type, "No features of this type");
        }
        ids.extend(matched);
    }
    for filepath in &actions.dismiss_files {
        let matched = session.feature_ids_in_file(filepath);
        if matched.is_empty() {
            warn!(%filepath, "No features located in this file");
        }
        ids.extend(matched);
    }
    ids.sort_unstable();
    ids.dedup();
    ids
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_note_edit() {
        let edit: NoteEdit = "3=checked, benign".parse().unwrap();
        assert_eq!(edit.id, FeatureId::new(3));
        assert_eq!(edit.text, "checked, benign");
    }

    #[test]
    fn note_text_may_contain_equals() {
        let edit: NoteEdit = "1=a=b".parse().unwrap();
        assert_eq!(edit.text, "a=b");
    }

    #[test]
    fn rejects_malformed_note_edit() {
        assert!("no separator".parse::<NoteEdit>().is_err());
        assert!("x=text".parse::<NoteEdit>().is_err());
    }

    #[test]
    fn default_actions_are_empty() {
        assert!(ReviewActions::default().is_empty());
    }
}
