use crate::render;
use crate::view::Dashboard;
use anyhow::{Context, Result};
use std::sync::mpsc as std_mpsc;
use std::sync::OnceLock;
use std::time::Duration;

// Global clipboard manager channel - initialized once on first use
static CLIPBOARD_SENDER: OnceLock<std_mpsc::Sender<String>> = OnceLock::new();

/// Export the current visible page as an HTML snapshot in the working
/// directory. Returns the absolute path of the written file.
pub fn export_page_html(dashboard: &Dashboard, base_url: &str) -> Result<std::path::PathBuf> {
    let page = dashboard.visible_page();
    let rows = render::project_rows(&page, base_url);
    let meta = render::PageMeta {
        page: dashboard.view.page,
        total_pages: dashboard.total_pages(),
        total: dashboard.total(),
    };

    // Generate a default filename based on timestamp
    let timestamp = time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| "now".into());
    let default_name = format!(
        "hirehub-applicants-{}.html",
        timestamp.replace(':', "-").replace('T', "_")
    );

    let current_dir = std::env::current_dir().context("get current directory")?;
    let path = current_dir.join(default_name);
    std::fs::write(&path, render::render_html(&rows, &meta))
        .with_context(|| format!("write {}", path.display()))?;
    Ok(path)
}

/// Initialize the clipboard manager thread if not already initialized.
/// A dedicated thread processes clipboard operations sequentially and
/// keeps each clipboard instance alive long enough for clipboard managers
/// to read the contents on Linux.
fn init_clipboard_manager() -> Result<&'static std_mpsc::Sender<String>> {
    CLIPBOARD_SENDER.get_or_init(|| {
        let (tx, rx) = std_mpsc::channel::<String>();

        std::thread::spawn(move || {
            use arboard::Clipboard;

            for text in rx {
                if let Ok(mut clipboard) = Clipboard::new() {
                    if clipboard.set_text(&text).is_ok() {
                        std::thread::sleep(Duration::from_secs(2));
                    }
                }
            }
        });

        tx
    });

    CLIPBOARD_SENDER
        .get()
        .ok_or_else(|| anyhow::anyhow!("Failed to initialize clipboard manager"))
}

/// Copy text to the clipboard without blocking the UI thread.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let sender = init_clipboard_manager()?;
    sender
        .send(text.to_string())
        .map_err(|_| anyhow::anyhow!("Clipboard manager channel closed"))?;
    Ok(())
}
