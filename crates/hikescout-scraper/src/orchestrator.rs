//! Sequential run over every configured site.

use hikescout_core::{ScrapedResult, SiteConfig, TargetDateWindow};

use crate::capability::{BrowserPage, Extractor};
use crate::page::PageSettings;
use crate::strategy::scrape_site;

/// Scrape `sites` one after another on the shared `session`.
///
/// Returns exactly one result per site, in configuration order. Each site
/// finishes completely before the next one starts; strategies absorb their
/// own failures, so a bad site only ever contributes an empty or partial
/// result.
pub async fn run_sites<S>(
    session: &S,
    sites: &[SiteConfig],
    window: &TargetDateWindow,
    settings: &PageSettings,
) -> Vec<ScrapedResult>
where
    S: BrowserPage + Extractor + ?Sized,
{
    let mut results = Vec::with_capacity(sites.len());

    for (idx, site) in sites.iter().enumerate() {
        tracing::info!(
            site = idx + 1,
            total = sites.len(),
            company = %site.company,
            "starting site"
        );
        results.push(scrape_site(session, site, window, settings).await);
    }

    let empty_sites = results.iter().filter(|r| r.hikes.is_empty()).count();
    if empty_sites > 0 {
        tracing::info!(
            empty_sites,
            total_sites = sites.len(),
            "some sites returned no hikes for the window"
        );
    }

    results
}
