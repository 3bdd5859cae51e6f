use std::path::Path;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use br_cli::actions::AppliedActions;
use br_model::Session;
use br_review::{FileDisposition, ReviewSummary, feature_type_label};

pub fn print_summary(document: &Path, session: &Session) {
    let summary = ReviewSummary::from_session(session);
    let disposition = FileDisposition::from_session(session);

    println!("Document: {}", document.display());
    if let Some(name) = session.name() {
        println!("Session: {name}");
    }
    if let Some(source) = session.source_path() {
        println!("Source: {source}");
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Feature type"),
        header_cell("Description"),
        header_cell("Open"),
        header_cell("Dismissed"),
        header_cell("Total"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 2..=4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for counts in &summary.by_type {
        table.add_row(vec![
            Cell::new(&counts.feature_type)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(feature_type_label(&counts.feature_type)),
            count_cell(counts.open, Color::Yellow),
            count_cell(counts.dismissed, Color::Green),
            Cell::new(counts.total()),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!("{} annotated", summary.features_annotated))
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        count_cell(summary.features_open, Color::Yellow).add_attribute(Attribute::Bold),
        count_cell(summary.features_dismissed, Color::Green).add_attribute(Attribute::Bold),
        Cell::new(summary.features_total).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    let mut files = Table::new();
    files.set_header(vec![
        header_cell("Files"),
        header_cell("Verified"),
        header_cell("Flagged"),
        header_cell("Clear"),
    ]);
    apply_summary_table_style(&mut files);
    for index in 0..=3 {
        align_column(&mut files, index, CellAlignment::Right);
    }
    files.add_row(vec![
        Cell::new(summary.files_total),
        count_cell(summary.files_verified, Color::Green),
        count_cell(disposition.flagged.len(), Color::Red),
        Cell::new(disposition.clear.len()),
    ]);
    println!("{files}");

    if summary.is_complete() {
        println!("Review complete.");
    }
}

pub fn print_applied(applied: &AppliedActions) {
    println!(
        "Applied: {} dismissed, {} restored, {} feature toggles, {} file toggles, \
         {} notes edited, {} notes deleted",
        applied.dismissed,
        applied.restored,
        applied.toggled_features,
        applied.toggled_files,
        applied.notes_edited,
        applied.notes_deleted,
    );
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
