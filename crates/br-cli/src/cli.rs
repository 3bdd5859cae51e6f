//! CLI argument definitions for Bulk Reviewer.

use std::path::PathBuf;

use br_cli::actions::{NoteEdit, ReviewActions};
use br_model::{FeatureId, FileId};
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "bulk-reviewer",
    version,
    about = "Bulk Reviewer - Triage features and files found in a digital acquisition",
    long_about = "Review the JSON report produced by the Bulk Reviewer analysis step.\n\n\
                  Dismiss or restore flagged features, annotate them with notes,\n\
                  mark files as verified, and list the files that still hold\n\
                  unresolved findings."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow notes and matched feature values to appear in logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show review progress for a document.
    Summary(SummaryArgs),

    /// Apply reviewer actions to a document and optionally save the result.
    Review(ReviewArgs),

    /// List files that still hold findings which are not dismissed.
    Exclusions(ExclusionArgs),
}

#[derive(Args)]
pub struct SummaryArgs {
    /// Path to the review document (JSON).
    #[arg(value_name = "DOCUMENT")]
    pub document: PathBuf,
}

#[derive(Args)]
pub struct ReviewArgs {
    /// Path to the review document (JSON).
    #[arg(value_name = "DOCUMENT")]
    pub document: PathBuf,

    /// Dismiss these features (comma-separated ids).
    #[arg(long = "dismiss", value_name = "IDS", value_delimiter = ',')]
    pub dismiss: Vec<FeatureId>,

    /// Dismiss every feature of this type (e.g. email.txt).
    #[arg(long = "dismiss-type", value_name = "TYPE")]
    pub dismiss_types: Vec<String>,

    /// Dismiss every feature located in this file path.
    #[arg(long = "dismiss-file", value_name = "PATH")]
    pub dismiss_files: Vec<String>,

    /// Restore (un-dismiss) these features (comma-separated ids).
    #[arg(long = "restore", value_name = "IDS", value_delimiter = ',')]
    pub restore: Vec<FeatureId>,

    /// Flip the dismissed flag on a feature.
    #[arg(long = "toggle-dismissed", value_name = "ID")]
    pub toggle_dismissed: Vec<FeatureId>,

    /// Flip the verified flag on a file.
    #[arg(long = "toggle-verified", value_name = "ID")]
    pub toggle_verified: Vec<FileId>,

    /// Set a feature note, replacing any existing one.
    #[arg(long = "note", value_name = "ID=TEXT")]
    pub notes: Vec<NoteEdit>,

    /// Remove the note from a feature.
    #[arg(long = "clear-note", value_name = "ID")]
    pub clear_notes: Vec<FeatureId>,

    /// Save the reviewed document here. Nothing is written when omitted.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

impl ReviewArgs {
    pub fn actions(&self) -> ReviewActions {
        ReviewActions {
            dismiss: self.dismiss.clone(),
            dismiss_types: self.dismiss_types.clone(),
            dismiss_files: self.dismiss_files.clone(),
            restore: self.restore.clone(),
            toggle_dismissed: self.toggle_dismissed.clone(),
            toggle_verified: self.toggle_verified.clone(),
            notes: self.notes.clone(),
            clear_notes: self.clear_notes.clone(),
        }
    }
}

#[derive(Args)]
pub struct ExclusionArgs {
    /// Path to the review document (JSON).
    #[arg(value_name = "DOCUMENT")]
    pub document: PathBuf,

    /// Write the list here (one path per line) instead of stdout.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
