//! Two-phase strategy for sites that show events on a calendar grid.
//!
//! Phase one extracts the names and dates of matching events from the grid.
//! Phase two opens each event in turn, extracts its detail page, and goes
//! back to the grid. A failure on one event yields a degraded record built
//! from its stub, so the result always holds one record per matched event.

use hikescout_core::{CalendarEventStub, HikeRecord, ScrapedResult, SiteConfig, TargetDateWindow};

use super::{log_site_failure, prepare, reached, DuringPhase, PhaseFailure, ScrapePhase};
use crate::capability::{BrowserPage, Extractor};
use crate::instructions;
use crate::page::{scroll_to_load, PageSettings};
use crate::schema::{decode_calendar_events, decode_hike_detail, ExtractionSchema};

pub(super) async fn scrape<S>(
    session: &S,
    site: &SiteConfig,
    window: &TargetDateWindow,
    settings: &PageSettings,
) -> ScrapedResult
where
    S: BrowserPage + Extractor + ?Sized,
{
    let events = match find_events(session, site, window, settings).await {
        Ok(events) => events,
        Err(failure) => {
            log_site_failure(site, &failure);
            return ScrapedResult::empty(site);
        }
    };

    if events.is_empty() {
        tracing::info!(company = %site.company, "no calendar events match the window");
        return ScrapedResult::empty(site);
    }

    tracing::info!(
        company = %site.company,
        events = events.len(),
        "opening matched calendar events"
    );

    let mut hikes = Vec::with_capacity(events.len());
    for event in &events {
        hikes.push(drill_into(session, site, event, settings).await);
    }

    ScrapedResult::new(site, hikes)
}

async fn find_events<S>(
    session: &S,
    site: &SiteConfig,
    window: &TargetDateWindow,
    settings: &PageSettings,
) -> Result<Vec<CalendarEventStub>, PhaseFailure>
where
    S: BrowserPage + Extractor + ?Sized,
{
    prepare(session, site, settings).await?;

    let raw = session
        .extract(
            &instructions::calendar_events(window),
            ExtractionSchema::CalendarEventList,
        )
        .await
        .during(ScrapePhase::Extracted)?;
    let events = decode_calendar_events(raw).during(ScrapePhase::Extracted)?;
    reached(site, ScrapePhase::Extracted);

    Ok(events)
}

/// Open one event, read its details, and return to the calendar.
async fn drill_into<S>(
    session: &S,
    site: &SiteConfig,
    event: &CalendarEventStub,
    settings: &PageSettings,
) -> HikeRecord
where
    S: BrowserPage + Extractor + ?Sized,
{
    let (record, opened) = match read_event_detail(session, site, event, settings).await {
        Ok(detail) => (detail, true),
        Err(failure) => {
            tracing::warn!(
                company = %site.company,
                event = %event.name,
                phase = %failure.phase,
                error = %failure.source,
                "error extracting details for {}; keeping name and date only",
                event.name
            );
            (
                HikeRecord::degraded(event),
                failure.phase != ScrapePhase::EventOpened,
            )
        }
    };

    if opened {
        return_to_calendar(session, site, settings).await;
    }

    record
}

async fn read_event_detail<S>(
    session: &S,
    site: &SiteConfig,
    event: &CalendarEventStub,
    settings: &PageSettings,
) -> Result<HikeRecord, PhaseFailure>
where
    S: BrowserPage + Extractor + ?Sized,
{
    session
        .act(&instructions::open_calendar_event(&event.name), None)
        .await
        .during(ScrapePhase::EventOpened)?;
    tokio::time::sleep(settings.detail_settle).await;
    reached(site, ScrapePhase::EventOpened);

    scroll_to_load(session, settings)
        .await
        .during(ScrapePhase::DetailExtracted)?;

    let raw = session
        .extract(instructions::HIKE_DETAIL, ExtractionSchema::HikeDetail)
        .await
        .during(ScrapePhase::DetailExtracted)?;
    let detail = decode_hike_detail(raw).during(ScrapePhase::DetailExtracted)?;
    reached(site, ScrapePhase::DetailExtracted);

    Ok(detail)
}

async fn return_to_calendar<P>(page: &P, site: &SiteConfig, settings: &PageSettings)
where
    P: BrowserPage + ?Sized,
{
    match page.go_back().await {
        Ok(()) => {
            tokio::time::sleep(settings.back_settle).await;
            reached(site, ScrapePhase::ReturnedToList);
        }
        Err(e) => {
            tracing::warn!(
                company = %site.company,
                error = %e,
                "failed to return to the calendar view"
            );
        }
    }
}
