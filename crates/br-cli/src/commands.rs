use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use br_cli::actions::{AppliedActions, apply_actions};
use br_ingest::{load_session, save_session};
use br_model::Session;
use br_review::{ReviewSummary, SessionStore, exclusion_list};

use crate::cli::{ExclusionArgs, ReviewArgs, SummaryArgs};

pub fn run_summary(args: &SummaryArgs) -> Result<Session> {
    let span = info_span!("summary", document = %args.document.display());
    let _guard = span.enter();
    load_document(&args.document)
}

/// Outcome of a review run.
pub struct ReviewOutcome {
    pub session: Session,
    pub applied: AppliedActions,
    pub saved: bool,
}

pub fn run_review(args: &ReviewArgs) -> Result<ReviewOutcome> {
    let span = info_span!("review", document = %args.document.display());
    let _guard = span.enter();

    let mut store = SessionStore::new();
    store.load_session(load_document(&args.document)?);

    let actions = args.actions();
    let applied = apply_actions(&mut store, &actions)?;
    info!(
        revision = store.revision(),
        dismissed = applied.dismissed,
        restored = applied.restored,
        "Review actions applied"
    );

    let session = store.into_session();
    let saved = match &args.output {
        Some(output) => {
            save_session(&session, output)
                .with_context(|| format!("save review document {}", output.display()))?;
            true
        }
        None => false,
    };
    Ok(ReviewOutcome {
        session,
        applied,
        saved,
    })
}

pub fn run_exclusions(args: &ExclusionArgs) -> Result<usize> {
    let span = info_span!("exclusions", document = %args.document.display());
    let _guard = span.enter();

    let session = load_document(&args.document)?;
    let paths = exclusion_list(&session);
    match &args.output {
        Some(output) => {
            let mut contents = paths.join("\n");
            if !contents.is_empty() {
                contents.push('\n');
            }
            fs::write(output, contents)
                .with_context(|| format!("write exclusion list {}", output.display()))?;
            info!(path = %output.display(), count = paths.len(), "Wrote exclusion list");
        }
        None => {
            for path in &paths {
                println!("{path}");
            }
        }
    }
    Ok(paths.len())
}

fn load_document(path: &Path) -> Result<Session> {
    let session = load_session(path)?;
    let summary = ReviewSummary::from_session(&session);
    info!(
        features = summary.features_total,
        open = summary.features_open,
        files = summary.files_total,
        "Document ready"
    );
    Ok(session)
}
