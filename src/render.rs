//! Pure projection from view-model output to renderable descriptors.
//!
//! Descriptors carry display-shaped text; the HTML writer escapes every
//! user-controlled field as it emits markup, and the TUI adapter consumes
//! the same descriptors for terminal rows. Keeping both behind one
//! projection is what makes the table renderable without a live UI.

use crate::model::{parse_timestamp, ApplicantRecord};
use crate::view::PAGE_SIZE;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;

/// One table row, shaped for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowDescriptor {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub stage: String,
    /// CSS badge class derived from the stage, e.g. `status-under-review`.
    pub stage_class: String,
    pub source: String,
    pub tags: String,
    pub last_update: String,
    pub detail_url: String,
}

/// Pagination strip elements, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageControl {
    Previous { enabled: bool },
    Page { number: usize, active: bool },
    Ellipsis,
    Next { enabled: bool },
}

/// Pagination metadata for footers and summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMeta {
    pub page: usize,
    pub total_pages: usize,
    pub total: usize,
}

impl PageMeta {
    /// 1-based inclusive range of the rows shown, (0, 0) when empty.
    pub fn shown_range(&self) -> (usize, usize) {
        if self.total == 0 {
            return (0, 0);
        }
        let start = (self.page - 1) * PAGE_SIZE + 1;
        let end = (self.page * PAGE_SIZE).min(self.total);
        (start.min(self.total), end)
    }
}

/// Escape text for HTML insertion. Security contract for every
/// user-controlled field: applicant data must never become markup.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Badge class for a stage: lowercased, whitespace collapsed to dashes.
pub fn status_class(stage: &str) -> String {
    if stage.is_empty() {
        return String::new();
    }
    let slug = stage
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");
    format!("status-{slug}")
}

/// Render an ISO-8601 timestamp as `YYYY-MM-DD HH:MM`, falling back to the
/// raw text when it will not parse and `N/A` when absent.
pub fn format_timestamp(value: Option<&str>) -> String {
    let Some(raw) = value else {
        return "N/A".to_string();
    };
    let display = format_description!("[year]-[month]-[day] [hour]:[minute]");
    match parse_timestamp(raw) {
        Some(unix) => time::OffsetDateTime::from_unix_timestamp(unix)
            .ok()
            .and_then(|dt| dt.format(display).ok())
            .unwrap_or_else(|| raw.trim().to_string()),
        None => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                "N/A".to_string()
            } else {
                trimmed.to_string()
            }
        }
    }
}

/// Browser-facing detail page for a record.
pub fn detail_url(base_url: &str, id: i64) -> String {
    format!("{}/ats/applicant/{}/", base_url.trim_end_matches('/'), id)
}

/// Project the visible page into row descriptors.
pub fn project_rows(page: &[&ApplicantRecord], base_url: &str) -> Vec<RowDescriptor> {
    page.iter()
        .map(|r| RowDescriptor {
            id: r.ident(),
            name: r.name.clone(),
            email: r.email.clone(),
            stage: r.current_stage.clone(),
            stage_class: status_class(&r.current_stage),
            source: r.source.clone().unwrap_or_else(|| "N/A".to_string()),
            tags: r.tags.join(", "),
            last_update: format_timestamp(r.last_update()),
            detail_url: detail_url(base_url, r.ident()),
        })
        .collect()
}

/// Build the pagination strip. Nothing renders for a single page;
/// otherwise: Previous (disabled on the first page), the first and last
/// pages, every page within ±2 of current with an ellipsis where the
/// window breaks, and Next (disabled on the last page).
pub fn pagination_controls(page: usize, total_pages: usize) -> Vec<PageControl> {
    if total_pages <= 1 {
        return Vec::new();
    }

    let mut controls = vec![PageControl::Previous { enabled: page > 1 }];
    for n in 1..=total_pages {
        let near = n + 2 >= page && n <= page + 2;
        if n == 1 || n == total_pages || near {
            controls.push(PageControl::Page {
                number: n,
                active: n == page,
            });
        } else if n + 3 == page || n == page + 3 {
            controls.push(PageControl::Ellipsis);
        }
    }
    controls.push(PageControl::Next {
        enabled: page < total_pages,
    });
    controls
}

/// Render an HTML snapshot of the visible page.
pub fn render_html(rows: &[RowDescriptor], meta: &PageMeta) -> Vec<u8> {
    let body = if rows.is_empty() {
        r#"      <tr><td colspan="7" class="empty">No applicants found</td></tr>"#.to_string()
    } else {
        rows.iter().map(html_row).collect::<Vec<_>>().join("\n")
    };

    let (start, end) = meta.shown_range();
    let range = if meta.total == 0 {
        "Showing 0-0".to_string()
    } else {
        format!("Showing {start}-{end} of {}", meta.total)
    };
    let strip = html_pagination(&pagination_controls(meta.page, meta.total_pages));
    let generated = time::OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| "now".into());

    let html = format!(
        r####"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8"/>
  <meta content="width=device-width, initial-scale=1.0" name="viewport"/>
  <title>HireHub Applicants</title>
  <style>
    body {{ font-family: system-ui, sans-serif; margin: 2rem; color: #1e293b; }}
    table {{ width: 100%; border-collapse: collapse; }}
    th, td {{ text-align: left; padding: 8px 12px; border-bottom: 1px solid #e2e8f0; }}
    th {{ background: #f8fafc; font-size: 12px; text-transform: uppercase; letter-spacing: 0.05em; }}
    .status-badge {{ background: #e2e8f0; border-radius: 9999px; padding: 2px 10px; font-size: 12px; }}
    .empty {{ text-align: center; padding: 40px; color: #64748b; }}
    .pagination {{ margin-top: 1rem; }}
    .pagination span {{ display: inline-block; padding: 4px 10px; margin-right: 4px; border: 1px solid #e2e8f0; border-radius: 4px; }}
    .pagination .active {{ background: #135bec; color: #fff; }}
    .pagination .disabled {{ color: #94a3b8; }}
    .pagination .gap {{ border: none; }}
    .summary {{ color: #64748b; font-size: 13px; margin-top: 0.5rem; }}
  </style>
</head>
<body>
  <h1>Applicants</h1>
  <table>
    <thead>
      <tr><th>ID</th><th>Name</th><th>Email</th><th>Stage</th><th>Source</th><th>Last Update</th><th></th></tr>
    </thead>
    <tbody>
{body}
    </tbody>
  </table>
  <div class="pagination">{strip}</div>
  <p class="summary">{range} &middot; page {page} of {total_pages} &middot; snapshot {generated}</p>
</body>
</html>"####,
        page = meta.page,
        total_pages = meta.total_pages,
    );

    html.into_bytes()
}

fn html_row(row: &RowDescriptor) -> String {
    format!(
        r#"      <tr>
        <td>{id}</td>
        <td title="{tags}">{name}</td>
        <td>{email}</td>
        <td><span class="status-badge {stage_class}">{stage}</span></td>
        <td>{source}</td>
        <td>{updated}</td>
        <td><a href="{url}">View Details</a></td>
      </tr>"#,
        id = row.id,
        tags = escape_html(&row.tags),
        name = escape_html(&row.name),
        email = escape_html(&row.email),
        stage_class = escape_html(&row.stage_class),
        stage = escape_html(&row.stage),
        source = escape_html(&row.source),
        updated = escape_html(&row.last_update),
        url = escape_html(&row.detail_url),
    )
}

fn html_pagination(controls: &[PageControl]) -> String {
    controls
        .iter()
        .map(|c| match c {
            PageControl::Previous { enabled } => {
                let class = if *enabled { "" } else { " class=\"disabled\"" };
                format!("<span{class}>Previous</span>")
            }
            PageControl::Next { enabled } => {
                let class = if *enabled { "" } else { " class=\"disabled\"" };
                format!("<span{class}>Next</span>")
            }
            PageControl::Page { number, active } => {
                let class = if *active { " class=\"active\"" } else { "" };
                format!("<span{class}>{number}</span>")
            }
            PageControl::Ellipsis => "<span class=\"gap\">…</span>".to_string(),
        })
        .collect::<Vec<_>>()
        .join("")
}
