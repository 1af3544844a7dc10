//! Single-pass strategy for sites that list upcoming hikes on one page.

use hikescout_core::{HikeRecord, ScrapedResult, SiteConfig, TargetDateWindow};

use super::{log_site_failure, prepare, reached, DuringPhase, PhaseFailure, ScrapePhase};
use crate::capability::{BrowserPage, Extractor};
use crate::instructions;
use crate::page::PageSettings;
use crate::schema::{decode_hike_list, ExtractionSchema};

pub(super) async fn scrape<S>(
    session: &S,
    site: &SiteConfig,
    window: &TargetDateWindow,
    settings: &PageSettings,
) -> ScrapedResult
where
    S: BrowserPage + Extractor + ?Sized,
{
    match extract_hikes(session, site, window, settings).await {
        Ok(hikes) => ScrapedResult::new(site, hikes),
        Err(failure) => {
            log_site_failure(site, &failure);
            ScrapedResult::empty(site)
        }
    }
}

async fn extract_hikes<S>(
    session: &S,
    site: &SiteConfig,
    window: &TargetDateWindow,
    settings: &PageSettings,
) -> Result<Vec<HikeRecord>, PhaseFailure>
where
    S: BrowserPage + Extractor + ?Sized,
{
    prepare(session, site, settings).await?;

    let raw = session
        .extract(&instructions::list_page(window), ExtractionSchema::HikeList)
        .await
        .during(ScrapePhase::Extracted)?;
    let hikes = decode_hike_list(raw).during(ScrapePhase::Extracted)?;
    reached(site, ScrapePhase::Extracted);

    Ok(hikes)
}
