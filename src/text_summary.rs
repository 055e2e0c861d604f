//! Text table builder for CLI output.
//!
//! This module formats the projected page into aligned, human-readable
//! lines for text mode.

use crate::render::{PageMeta, RowDescriptor};

/// Pre-formatted lines for text output.
pub(crate) struct TextSummary {
    pub lines: Vec<String>,
}

const HEADERS: [&str; 6] = ["ID", "Name", "Email", "Stage", "Source", "Last Update"];

fn cells(row: &RowDescriptor) -> [String; 6] {
    [
        row.id.to_string(),
        row.name.clone(),
        row.email.clone(),
        row.stage.clone(),
        row.source.clone(),
        row.last_update.clone(),
    ]
}

/// Build an aligned text table plus a pagination summary line.
pub(crate) fn build_text_table(rows: &[RowDescriptor], meta: &PageMeta) -> TextSummary {
    let mut lines = Vec::new();

    if rows.is_empty() {
        lines.push("No applicants found".to_string());
        return TextSummary { lines };
    }

    let mut widths: Vec<usize> = HEADERS.iter().map(|h| h.chars().count()).collect();
    let table: Vec<[String; 6]> = rows.iter().map(cells).collect();
    for row in &table {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let format_line = |cells: &[String]| {
        cells
            .iter()
            .enumerate()
            .map(|(i, c)| format!("{:<width$}", c, width = widths[i]))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let header: Vec<String> = HEADERS.iter().map(|h| h.to_string()).collect();
    lines.push(format_line(&header));
    lines.push(widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>().join("  "));
    for row in &table {
        lines.push(format_line(row));
    }

    let (start, end) = meta.shown_range();
    lines.push(String::new());
    lines.push(format!(
        "Showing {start}-{end} of {} (page {} of {})",
        meta.total, meta.page, meta.total_pages
    ));

    TextSummary { lines }
}
