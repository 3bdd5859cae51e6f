//! Review session state for Bulk Reviewer.
//!
//! [`SessionStore`] holds the current session and applies the reviewer's
//! actions: dismissing features, verifying files, and annotating features
//! with notes. [`SharedSessionStore`] puts the same operations behind one
//! lock for multi-threaded hosts. [`ReviewSummary`] and [`FileDisposition`]
//! are read-only views used to report progress.
//!
//! # Example
//!
//! ```ignore
//! use br_model::FeatureId;
//! use br_review::{ReviewSummary, SessionStore};
//!
//! let mut store = SessionStore::new();
//! store.load_session(br_ingest::load_session(path)?);
//! store.set_features_dismissed(&[FeatureId::new(1), FeatureId::new(2)], true)?;
//! store.edit_feature_note(FeatureId::new(3), "checked, benign")?;
//! println!("{:?}", ReviewSummary::from_session(store.session()));
//! ```

mod disposition;
mod shared;
mod store;
mod summary;

pub use disposition::{FileDisposition, exclusion_list};
pub use shared::SharedSessionStore;
pub use store::SessionStore;
pub use summary::{FeatureTypeCount, ReviewSummary, UNKNOWN_FEATURE_TYPE, feature_type_label};
