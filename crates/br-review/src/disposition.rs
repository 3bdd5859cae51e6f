//! Which acquisition files still hold unresolved findings.
//!
//! A file is flagged while at least one feature located in it is not
//! dismissed. Everything else is clear and can be released.

use std::collections::HashSet;
use std::path::Path;

use br_model::{FileId, Session};

/// Partition of the session's files into flagged and clear, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileDisposition {
    pub flagged: Vec<FileId>,
    pub clear: Vec<FileId>,
}

impl FileDisposition {
    pub fn from_session(session: &Session) -> Self {
        let open_paths: HashSet<&str> = session
            .features()
            .iter()
            .filter(|f| !f.is_dismissed())
            .filter_map(|f| f.filepath())
            .collect();

        let mut disposition = Self::default();
        for file in session.files() {
            let flagged = file
                .filepath()
                .is_some_and(|path| open_paths.contains(path));
            if flagged {
                disposition.flagged.push(file.id());
            } else {
                disposition.clear.push(file.id());
            }
        }
        disposition
    }

    pub fn is_flagged(&self, id: FileId) -> bool {
        self.flagged.contains(&id)
    }
}

/// Full paths of flagged files, for use as a tar exclude list.
///
/// Paths are joined onto the session's `source_path` when it has one.
pub fn exclusion_list(session: &Session) -> Vec<String> {
    let disposition = FileDisposition::from_session(session);
    let source = session.source_path().map(Path::new);

    disposition
        .flagged
        .iter()
        .filter_map(|&id| session.file(id).ok())
        .filter_map(|file| file.filepath())
        .map(|path| match source {
            Some(root) => root.join(path).display().to_string(),
            None => path.to_string(),
        })
        .collect()
}
