//! Review session model for Bulk Reviewer.
//!
//! A session is the reviewer's working copy of an analysis report: an ordered
//! list of flagged features, an ordered list of acquisition files, and
//! whatever metadata the producer attached. Records are addressed by 1-based
//! ids that match their position, which `Session` validates on construction.

pub mod error;
pub mod feature;
pub mod file;
pub mod ids;
pub mod session;

pub use error::{ModelError, Result};
pub use feature::Feature;
pub use file::File;
pub use ids::{FeatureId, FileId, RecordKind};
pub use session::{Session, SessionDocument};
