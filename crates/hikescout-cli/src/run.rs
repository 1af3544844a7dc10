//! Command handlers for the CLI.
//!
//! Only setup and teardown errors propagate out of here. Per-site failures
//! are absorbed by the strategies and show up as empty report sections.

use std::path::Path;

use anyhow::Context;
use hikescout_core::{
    default_sites, load_sites, render_report, resolve_date_window, AppConfig, SiteConfig,
};
use hikescout_scraper::{run_sites, PageSettings, RemoteSession, SessionOptions};

/// Resolve the site list: an explicit file wins, then the configured file,
/// then the built-in operators.
pub(crate) fn load_site_list(
    config: &AppConfig,
    override_path: Option<&Path>,
) -> anyhow::Result<Vec<SiteConfig>> {
    match override_path.or(config.sites_path.as_deref()) {
        Some(path) => {
            let file = load_sites(path)
                .with_context(|| format!("failed to load sites from {}", path.display()))?;
            Ok(file.sites)
        }
        None => Ok(default_sites()),
    }
}

/// Scrape every site on one shared browser session and print the report.
///
/// # Errors
///
/// Returns an error if the site list cannot be loaded, a session credential
/// is missing, or the browser session cannot be started or closed. A close
/// failure is reported after the report has been printed.
pub(crate) async fn run_scrape(
    config: &AppConfig,
    sites_path: Option<&Path>,
    dates_path: Option<&Path>,
) -> anyhow::Result<()> {
    let window = resolve_date_window(dates_path.unwrap_or(&config.dates_path));
    let sites = load_site_list(config, sites_path)?;
    let options =
        SessionOptions::from_config(config).context("cannot start a browser session")?;
    let settings = PageSettings::from(config);

    tracing::info!(
        window = %window,
        sites = sites.len(),
        env = %config.env,
        "starting hike scrape"
    );

    let session = RemoteSession::start(&options)
        .await
        .context("failed to start browser session")?;

    let results = run_sites(&session, &sites, &window, &settings).await;
    print!("{}", render_report(&results, &window));

    tracing::info!(session_id = session.session_id(), "closing browser session");

    session
        .close()
        .await
        .context("failed to close browser session")?;

    println!();
    println!("Scraping completed.");
    Ok(())
}

/// Print the configured sites and their strategies.
///
/// # Errors
///
/// Returns an error if a sites file is configured but cannot be loaded.
pub(crate) fn list_sites(config: &AppConfig, sites_path: Option<&Path>) -> anyhow::Result<()> {
    let sites = load_site_list(config, sites_path)?;
    print!("{}", format_site_listing(&sites));
    Ok(())
}

pub(crate) fn format_site_listing(sites: &[SiteConfig]) -> String {
    let mut lines: Vec<String> = Vec::with_capacity(sites.len() * 2 + 1);
    for (idx, site) in sites.iter().enumerate() {
        lines.push(format!("{}. {} [{}]", idx + 1, site.company, site.strategy));
        lines.push(format!("   {}", site.url));
    }
    lines.push(format!("{} site(s) configured", sites.len()));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
