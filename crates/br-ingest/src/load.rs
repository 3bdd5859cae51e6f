//! Review document loading.

use std::fs;
use std::path::Path;

use br_model::{Session, SessionDocument};

use crate::error::{IngestError, Result};

/// Load a review session from a JSON document on disk.
///
/// The whole file is read and validated before anything is returned, so a
/// caller never sees a partially built session. Nothing outside the returned
/// value is touched; installing it into a store is the caller's job.
///
/// # Errors
///
/// - [`IngestError::UnreadablePath`] if the file cannot be opened or read.
/// - [`IngestError::MalformedDocument`] if the content is not JSON, lacks
///   `features` or `files`, or has ids that do not run `1..=N`.
///
/// # Example
///
/// ```ignore
/// use std::path::Path;
/// use br_ingest::load_session;
///
/// let session = load_session(Path::new("reviews/accession.json"))?;
/// println!("{} features to review", session.features().len());
/// ```
pub fn load_session(path: &Path) -> Result<Session> {
    let bytes = fs::read(path).map_err(|source| {
        tracing::warn!(path = %path.display(), error = %source, "Review document unreadable");
        IngestError::UnreadablePath {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let session = parse_session(&bytes, path)?;

    tracing::info!(
        path = %path.display(),
        features = session.features().len(),
        files = session.files().len(),
        "Loaded review document"
    );
    Ok(session)
}

/// Parse review document bytes. `path` is only used for error reporting.
pub fn parse_session(bytes: &[u8], path: &Path) -> Result<Session> {
    let malformed = |reason: String| {
        tracing::warn!(path = %path.display(), %reason, "Rejected review document");
        IngestError::MalformedDocument {
            path: path.to_path_buf(),
            reason,
        }
    };

    let document: SessionDocument =
        serde_json::from_slice(bytes).map_err(|err| malformed(err.to_string()))?;
    Session::try_from(document).map_err(|err| malformed(err.to_string()))
}
