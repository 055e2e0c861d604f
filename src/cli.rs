use crate::api::ApiClient;
use crate::model::ApplicantRecord;
use crate::render;
use crate::store::RecordStore;
use crate::view::{Dashboard, SortDirection, SortField, ViewState};
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser, Clone)]
#[command(
    name = "hirehub-cli",
    version,
    about = "HireHub applicant-tracking dashboard with optional TUI"
)]
pub struct Cli {
    /// Base URL of the HireHub server
    #[arg(long, default_value = "http://localhost:8000")]
    pub base_url: String,

    /// Seed the record store from a JSON file instead of fetching
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// CSRF token for mutating requests (falls back to the csrftoken cookie)
    #[arg(long)]
    pub csrf_token: Option<String>,

    /// Print fetched applicants as JSON and exit (no TUI)
    #[arg(long)]
    pub json: bool,

    /// Print the visible page as a text table and exit (no TUI)
    #[arg(long)]
    pub text: bool,

    /// Print a single applicant as JSON and exit (no TUI)
    #[arg(long)]
    pub detail: Option<i64>,

    /// Initial search term
    #[arg(long, default_value = "")]
    pub search: String,

    /// Initial stage filter (exact match, empty for all)
    #[arg(long, default_value = "")]
    pub stage: String,

    /// Initial source filter (exact match, empty for all)
    #[arg(long, default_value = "")]
    pub source: String,

    /// Initial sort field (id, name, email, stage, source, updated)
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort descending instead of ascending
    #[arg(long)]
    pub desc: bool,

    /// Initial page number
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Export the visible page as an HTML snapshot
    #[arg(long)]
    pub export_html: Option<PathBuf>,

    /// Delay before navigating to a freshly created applicant's detail view
    #[arg(long, default_value = "2s")]
    pub redirect_delay: humantime::Duration,
}

pub async fn run(args: Cli) -> Result<()> {
    if let Some(id) = args.detail {
        return run_detail(&args, id).await;
    }

    if !args.json && !args.text {
        #[cfg(feature = "tui")]
        {
            return crate::tui::run(args).await;
        }
        #[cfg(not(feature = "tui"))]
        {
            // Fallback when built without TUI support.
            return run_text(args).await;
        }
    }

    if args.json {
        return run_json(args).await;
    }

    run_text(args).await
}

/// Seed the initial view state from CLI flags, the analog of
/// server-rendered initial filter values.
pub fn initial_view_state(args: &Cli) -> Result<ViewState> {
    let sort = match args.sort.as_deref() {
        None => None,
        Some(raw) => {
            let field = SortField::parse(raw)
                .with_context(|| format!("unknown sort field '{raw}'"))?;
            let direction = if args.desc {
                SortDirection::Descending
            } else {
                SortDirection::Ascending
            };
            Some((field, direction))
        }
    };
    Ok(ViewState {
        search: args.search.clone(),
        stage: args.stage.clone(),
        source: args.source.clone(),
        sort,
        page: 1,
    })
}

async fn load_records(args: &Cli) -> Result<Vec<ApplicantRecord>> {
    let client = ApiClient::new(&args.base_url, args.csrf_token.clone())?;
    let store = RecordStore::new(args.data.clone());
    store
        .load_initial(&client)
        .await
        .context("failed to load applicants")
}

/// Build the dashboard a non-interactive mode works against.
fn build_dashboard(args: &Cli, records: Vec<ApplicantRecord>) -> Result<Dashboard> {
    let mut dashboard = Dashboard::new(initial_view_state(args)?);
    dashboard.replace_records(records);
    if args.page > 1 {
        // Out-of-range requests are no-ops, same as interactive paging.
        dashboard.change_page(args.page);
    }
    Ok(dashboard)
}

async fn run_json(args: Cli) -> Result<()> {
    let records = load_records(&args).await?;
    println!("{}", serde_json::to_string_pretty(&records)?);
    Ok(())
}

async fn run_detail(args: &Cli, id: i64) -> Result<()> {
    let client = ApiClient::new(&args.base_url, args.csrf_token.clone())?;
    let record = client
        .get(id)
        .await
        .with_context(|| format!("failed to load applicant {id}"))?;
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}

async fn run_text(args: Cli) -> Result<()> {
    let records = load_records(&args).await?;
    let dashboard = build_dashboard(&args, records)?;

    let page = dashboard.visible_page();
    let rows = render::project_rows(&page, &args.base_url);
    let meta = render::PageMeta {
        page: dashboard.view.page,
        total_pages: dashboard.total_pages(),
        total: dashboard.total(),
    };

    if let Some(path) = args.export_html.as_deref() {
        std::fs::write(path, render::render_html(&rows, &meta))
            .with_context(|| format!("failed to write {}", path.display()))?;
        eprintln!("Exported: {}", path.display());
    }

    let summary = crate::text_summary::build_text_table(&rows, &meta);
    for line in summary.lines {
        println!("{line}");
    }
    Ok(())
}
