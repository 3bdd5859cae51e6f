//! Review document export.
//!
//! Writes a session back in the same JSON shape the loader accepts. Producer
//! fields are emitted exactly as they were read.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use br_model::Session;

use crate::error::{IngestError, Result};

/// Serialize a session as pretty-printed JSON (two-space indent).
pub fn session_to_json(session: &Session) -> Result<Vec<u8>> {
    serde_json::to_vec_pretty(session).map_err(|source| IngestError::Serialization { source })
}

/// Save a session to a JSON review document.
///
/// Uses atomic write (temp file + rename) so an interrupted save never leaves
/// a truncated document behind.
pub fn save_session(session: &Session, path: &Path) -> Result<()> {
    let mut bytes = session_to_json(session)?;
    bytes.push(b'\n');

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| IngestError::Io {
            operation: "create directory",
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let temp_path = path.with_extension("json.tmp");

    let mut file = File::create(&temp_path).map_err(|e| IngestError::Io {
        operation: "create",
        path: temp_path.clone(),
        source: e,
    })?;

    file.write_all(&bytes).map_err(|e| IngestError::Io {
        operation: "write",
        path: temp_path.clone(),
        source: e,
    })?;

    file.sync_all().map_err(|e| IngestError::Io {
        operation: "sync",
        path: temp_path.clone(),
        source: e,
    })?;
    drop(file);

    fs::rename(&temp_path, path).map_err(|e| IngestError::AtomicWriteFailed {
        temp_path: temp_path.clone(),
        target_path: path.to_path_buf(),
        source: e,
    })?;

    tracing::info!(
        path = %path.display(),
        features = session.features().len(),
        files = session.files().len(),
        "Saved review document"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use br_model::{Feature, File as FileRecord};
    use tempfile::tempdir;

    #[test]
    fn test_save_session_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/out/review.json");
        let session = Session::new(vec![Feature::new(1)], vec![FileRecord::new(1)]).unwrap();

        save_session(&session, &path).unwrap();

        assert!(path.exists());
        assert!(!path.with_extension("json.tmp").exists());
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.ends_with('\n'));
        assert!(content.contains("\n  \"files\": ["));
    }

    #[test]
    fn test_save_overwrites_existing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("review.json");
        fs::write(&path, "stale").unwrap();

        save_session(&Session::default(), &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "{\n  \"files\": [],\n  \"features\": []\n}\n");
    }
}
