//! Per-site scraping strategies.
//!
//! Every strategy follows the same contract: given one site and the target
//! window, produce exactly one [`ScrapedResult`] and never return an error.
//! Failures are logged with the phase they occurred in and turn into an
//! empty (or, for the calendar drilldown, partial) result.

mod calendar;
mod list_page;

use hikescout_core::{ScrapedResult, SiteConfig, StrategyKind, TargetDateWindow};

use crate::capability::{BrowserPage, Extractor, WaitUntil};
use crate::error::ScraperError;
use crate::page::{dismiss_overlays, scroll_to_load, PageSettings};

/// Progress of a single site scrape.
///
/// `EventOpened`, `DetailExtracted` and `ReturnedToList` repeat once per
/// calendar event between the first `Extracted` and `Done`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrapePhase {
    NotStarted,
    Navigated,
    OverlaysHandled,
    ContentSettled,
    Extracted,
    EventOpened,
    DetailExtracted,
    ReturnedToList,
    Done,
}

impl std::fmt::Display for ScrapePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ScrapePhase::NotStarted => "not_started",
            ScrapePhase::Navigated => "navigated",
            ScrapePhase::OverlaysHandled => "overlays_handled",
            ScrapePhase::ContentSettled => "content_settled",
            ScrapePhase::Extracted => "extracted",
            ScrapePhase::EventOpened => "event_opened",
            ScrapePhase::DetailExtracted => "detail_extracted",
            ScrapePhase::ReturnedToList => "returned_to_list",
            ScrapePhase::Done => "done",
        };
        f.write_str(name)
    }
}

/// An error tagged with the phase whose transition failed.
#[derive(Debug)]
pub(crate) struct PhaseFailure {
    pub phase: ScrapePhase,
    pub source: ScraperError,
}

pub(crate) trait DuringPhase<T> {
    fn during(self, phase: ScrapePhase) -> Result<T, PhaseFailure>;
}

impl<T> DuringPhase<T> for Result<T, ScraperError> {
    fn during(self, phase: ScrapePhase) -> Result<T, PhaseFailure> {
        self.map_err(|source| PhaseFailure { phase, source })
    }
}

fn reached(site: &SiteConfig, phase: ScrapePhase) {
    tracing::debug!(company = %site.company, phase = %phase, "scrape phase reached");
}

/// Scrape one site with the strategy it is configured for.
///
/// Always returns a result for `site`; see the module docs for how
/// failures are absorbed.
pub async fn scrape_site<S>(
    session: &S,
    site: &SiteConfig,
    window: &TargetDateWindow,
    settings: &PageSettings,
) -> ScrapedResult
where
    S: BrowserPage + Extractor + ?Sized,
{
    tracing::info!(
        company = %site.company,
        url = %site.url,
        strategy = %site.strategy,
        window = %window,
        "scraping site"
    );
    reached(site, ScrapePhase::NotStarted);

    let result = match site.strategy {
        StrategyKind::ListPage => list_page::scrape(session, site, window, settings).await,
        StrategyKind::CalendarDrilldown => {
            calendar::scrape(session, site, window, settings).await
        }
    };

    reached(site, ScrapePhase::Done);
    tracing::info!(
        company = %site.company,
        hikes = result.hikes.len(),
        "found {} hike(s) on {}",
        result.hikes.len(),
        site.company
    );
    result
}

/// Navigation, overlay handling and scroll-to-load shared by both strategies.
async fn prepare<P>(page: &P, site: &SiteConfig, settings: &PageSettings) -> Result<(), PhaseFailure>
where
    P: BrowserPage + ?Sized,
{
    page.navigate(&site.url, WaitUntil::DomContentLoaded)
        .await
        .during(ScrapePhase::Navigated)?;
    tokio::time::sleep(settings.page_settle).await;
    reached(site, ScrapePhase::Navigated);

    dismiss_overlays(page, settings).await;
    reached(site, ScrapePhase::OverlaysHandled);

    scroll_to_load(page, settings)
        .await
        .during(ScrapePhase::ContentSettled)?;
    reached(site, ScrapePhase::ContentSettled);
    Ok(())
}

fn log_site_failure(site: &SiteConfig, failure: &PhaseFailure) {
    tracing::error!(
        company = %site.company,
        url = %site.url,
        phase = %failure.phase,
        error = %failure.source,
        "error scraping {}",
        site.company
    );
}
