// Portfolio render entry point
//
// Purpose: load the project dataset, render the three listings and mount them
// into the page shell
// Usage: PROJECTS_PATH=... PAGE_PATH=... OUTPUT_PATH=... cargo run --bin render_portfolio

use std::fs;

use anyhow::Context;
use portfolio_renderer::{load_projects, mount, HtmlDocument, ProjectRenderer, RenderConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "portfolio_renderer=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = RenderConfig::from_env();
    tracing::info!("Configuration:");
    tracing::info!("  PROJECTS_PATH: {}", config.projects_path.display());
    tracing::info!("  PAGE_PATH: {}", config.page_path.display());
    tracing::info!("  OUTPUT_PATH: {}", config.output_path.display());

    let projects = load_projects(&config.projects_path)
        .with_context(|| format!("loading {}", config.projects_path.display()))?;

    let sections = ProjectRenderer::new().render_all(&projects);

    let shell = fs::read_to_string(&config.page_path)
        .with_context(|| format!("reading page shell {}", config.page_path.display()))?;
    let mut page = HtmlDocument::new(shell);
    let report = mount(&sections, &mut page);
    tracing::info!(
        "Mounted {} sections ({} skipped)",
        report.applied.len(),
        report.skipped.len()
    );

    if let Some(parent) = config.output_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    fs::write(&config.output_path, page.into_string())
        .with_context(|| format!("writing {}", config.output_path.display()))?;

    tracing::info!("Wrote {}", config.output_path.display());
    Ok(())
}
