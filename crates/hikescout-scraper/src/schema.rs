//! Result contracts for the extraction capability.
//!
//! Each [`ExtractionSchema`] has a JSON Schema definition that is sent with
//! the extraction request, and a decoder that checks whatever came back.
//! Decoders fail closed: a value that does not fit the contract becomes
//! [`ScraperError::SchemaViolation`], never a partially-filled record.
//!
//! Decoded strings are normalized: surrounding whitespace trimmed, internal
//! runs of whitespace collapsed to one space, and empty strings treated as
//! absent. Listing pages are noisy, so a hike-list record with a blank name
//! is kept with an empty name; a blank required field anywhere else is a
//! violation.

use std::sync::LazyLock;

use hikescout_core::{CalendarEventStub, HikeRecord};
use regex::Regex;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ScraperError;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionSchema {
    /// `{ hikes: HikeRecord[] }`
    HikeList,
    /// `{ events: { name, date }[] }`
    CalendarEventList,
    /// A single `HikeRecord`.
    HikeDetail,
}

impl std::fmt::Display for ExtractionSchema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExtractionSchema::HikeList => write!(f, "hike list"),
            ExtractionSchema::CalendarEventList => write!(f, "calendar event list"),
            ExtractionSchema::HikeDetail => write!(f, "hike detail"),
        }
    }
}

impl ExtractionSchema {
    /// JSON Schema sent alongside the extraction instruction.
    #[must_use]
    pub fn definition(self) -> Value {
        match self {
            ExtractionSchema::HikeList => json!({
                "type": "object",
                "properties": {
                    "hikes": {
                        "type": "array",
                        "items": hike_record_definition(),
                    }
                },
                "required": ["hikes"],
            }),
            ExtractionSchema::CalendarEventList => json!({
                "type": "object",
                "properties": {
                    "events": {
                        "type": "array",
                        "items": {
                            "type": "object",
                            "properties": {
                                "name": {
                                    "type": "string",
                                    "description": "Name of the event/hike",
                                },
                                "date": {
                                    "type": "string",
                                    "description": "Date of the event",
                                },
                            },
                            "required": ["name", "date"],
                        },
                    }
                },
                "required": ["events"],
            }),
            ExtractionSchema::HikeDetail => hike_record_definition(),
        }
    }
}

fn hike_record_definition() -> Value {
    let field = |description: &str| json!({ "type": "string", "description": description });
    json!({
        "type": "object",
        "properties": {
            "name": { "type": "string", "description": "Name of the hike or adventure" },
            "location": field("Location or destination of the hike"),
            "date": field("Date of the hike"),
            "time": field("Meeting or departure time"),
            "meetingPoint": field("Meeting point or pickup location"),
            "cost": field("Cost or price of the hike"),
            "contact": field("Contact information (phone, email, or social media)"),
        },
        "required": ["name"],
    })
}

#[derive(Debug, Deserialize)]
struct HikeListShape {
    hikes: Vec<HikeRecord>,
}

#[derive(Debug, Deserialize)]
struct CalendarEventListShape {
    events: Vec<CalendarEventStub>,
}

/// Decode a [`ExtractionSchema::HikeList`] result.
///
/// # Errors
///
/// Returns [`ScraperError::SchemaViolation`] if `value` is not an object with
/// a `hikes` array of records. Blank names do not reject the list.
pub fn decode_hike_list(value: Value) -> Result<Vec<HikeRecord>, ScraperError> {
    let shape: HikeListShape = conform(ExtractionSchema::HikeList, value)?;
    Ok(shape
        .hikes
        .into_iter()
        .map(|hike| {
            let name = optional(Some(hike.name.as_str())).unwrap_or_default();
            normalize_fields(name, &hike)
        })
        .collect())
}

/// Decode a [`ExtractionSchema::CalendarEventList`] result.
///
/// # Errors
///
/// Returns [`ScraperError::SchemaViolation`] if `value` is not an object with
/// an `events` array, or if any event lacks a non-blank name and date.
pub fn decode_calendar_events(value: Value) -> Result<Vec<CalendarEventStub>, ScraperError> {
    let schema = ExtractionSchema::CalendarEventList;
    let shape: CalendarEventListShape = conform(schema, value)?;
    shape
        .events
        .into_iter()
        .map(|event| {
            let name = required(schema, "name", &event.name)?;
            let date = required(schema, "date", &event.date)?;
            Ok(CalendarEventStub { name, date })
        })
        .collect()
}

/// Decode a [`ExtractionSchema::HikeDetail`] result.
///
/// # Errors
///
/// Returns [`ScraperError::SchemaViolation`] if `value` is not a hike record
/// with a non-blank name.
pub fn decode_hike_detail(value: Value) -> Result<HikeRecord, ScraperError> {
    let schema = ExtractionSchema::HikeDetail;
    let hike: HikeRecord = conform(schema, value)?;
    let name = required(schema, "name", &hike.name)?;
    Ok(normalize_fields(name, &hike))
}

fn conform<T: DeserializeOwned>(schema: ExtractionSchema, value: Value) -> Result<T, ScraperError> {
    serde_json::from_value(value).map_err(|e| ScraperError::SchemaViolation {
        schema,
        reason: e.to_string(),
    })
}

fn normalize_fields(name: String, hike: &HikeRecord) -> HikeRecord {
    HikeRecord {
        name,
        location: optional(hike.location.as_deref()),
        date: optional(hike.date.as_deref()),
        time: optional(hike.time.as_deref()),
        meeting_point: optional(hike.meeting_point.as_deref()),
        cost: optional(hike.cost.as_deref()),
        contact: optional(hike.contact.as_deref()),
    }
}

fn required(schema: ExtractionSchema, field: &str, raw: &str) -> Result<String, ScraperError> {
    optional(Some(raw)).ok_or_else(|| ScraperError::SchemaViolation {
        schema,
        reason: format!("required field `{field}` is blank"),
    })
}

fn optional(raw: Option<&str>) -> Option<String> {
    let collapsed = WHITESPACE_RUN.replace_all(raw?.trim(), " ");
    if collapsed.is_empty() {
        None
    } else {
        Some(collapsed.into_owned())
    }
}
