//! Review document ingestion for Bulk Reviewer.
//!
//! This crate reads the JSON document produced by the analysis step into a
//! validated [`br_model::Session`], and writes a reviewed session back out in
//! the same shape.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use br_ingest::{load_session, save_session};
//!
//! let session = load_session(Path::new("reviews/accession.json"))?;
//! save_session(&session, Path::new("reviews/accession-reviewed.json"))?;
//! ```

mod error;
mod load;
mod save;

// === Error Types ===
pub use error::{IngestError, Result};

// === Loading ===
pub use load::{load_session, parse_session};

// === Export ===
pub use save::{save_session, session_to_json};
