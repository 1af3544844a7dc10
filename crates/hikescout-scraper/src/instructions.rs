//! Natural-language instructions sent to the session service.
//!
//! Date filtering happens here, at the instruction level: the extraction
//! service is told to return only listings for the target window and an
//! empty list otherwise. Results are not re-filtered locally. The wording
//! is pinned by tests; change it deliberately.

use hikescout_core::TargetDateWindow;

/// Action used to clear popups before scrolling or extracting.
pub const DISMISS_OVERLAYS: &str = "close any popup, cookie banner, or accept button if visible";

/// Extraction instruction for a flat listing page.
#[must_use]
pub fn list_page(window: &TargetDateWindow) -> String {
    format!(
        "Find ONLY hikes, adventures, or expeditions listed on this page that are scheduled for {window}.

IMPORTANT RULES:
- ONLY include hikes happening on {window} - no other dates
- If there are NO hikes scheduled for these specific dates, return an EMPTY array
- DO NOT return hikes for other dates if the target dates have no events
- Look for dates that match: {window}, or phrases like \"this weekend\", \"this Saturday\", \"this Sunday\"

For each matching hike ONLY, extract:
- Name of the hike/adventure
- Location or destination
- Date (exact date if available)
- Time (meeting time or departure time)
- Meeting point or pickup location
- Cost/price
- Contact information (phone, email, WhatsApp, etc.)

If no hikes match {window}, return an empty hikes array."
    )
}

/// Extraction instruction for the first pass over a calendar grid.
#[must_use]
pub fn calendar_events(window: &TargetDateWindow) -> String {
    format!(
        "Look at this calendar and find ONLY events scheduled for {window}.

IMPORTANT RULES:
- ONLY include events happening on {window} - no other dates
- If there are NO events on these specific dates, return an EMPTY array
- DO NOT return events for other dates

Return the event names and their exact dates from the calendar.
If no events match {window}, return an empty events array."
    )
}

/// Extraction instruction for an opened event's detail page.
pub const HIKE_DETAIL: &str = "Extract all details about this hike/event from this page:
- Name of the hike
- Location or destination
- Date
- Time (meeting time, departure time)
- Meeting point or pickup location
- Cost/price
- Contact information (phone, email, WhatsApp)";

/// Action that opens one event from the calendar grid.
#[must_use]
pub fn open_calendar_event(event_name: &str) -> String {
    format!("click on the \"{event_name}\" event link on the calendar")
}
