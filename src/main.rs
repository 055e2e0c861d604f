mod api;
mod cli;
mod form;
mod model;
mod orchestrator;
mod render;
mod store;
mod text_summary;
#[cfg(feature = "tui")]
mod tui;
mod view;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    init_telemetry();
    let args = cli::Cli::parse();
    let is_non_tui = args.json || args.text || args.detail.is_some();

    match cli::run(args).await {
        Ok(()) => {
            // Explicitly exit with code 0 on success, especially for non-TUI modes
            if is_non_tui {
                std::process::exit(0);
            }
            Ok(())
        }
        Err(e) => Err(e),
    }
}

/// Quiet by default so diagnostics never corrupt the TUI; RUST_LOG
/// overrides the filter.
fn init_telemetry() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .with_writer(std::io::stderr)
        .try_init();
}
