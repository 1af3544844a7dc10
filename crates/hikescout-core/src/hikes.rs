//! Hike listing records produced by a scrape run.
//!
//! Field names serialize in camelCase (`meetingPoint`) because the same
//! shapes are sent to the extraction service as result contracts.

use serde::{Deserialize, Serialize};

use crate::sites::SiteConfig;

/// A single guided hike as found on an operator's page.
///
/// Only `name` is guaranteed. Every other field is absent when the source
/// page does not show it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HikeRecord {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meeting_point: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
}

impl HikeRecord {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Record built from a calendar stub when its detail page could not be read.
    #[must_use]
    pub fn degraded(stub: &CalendarEventStub) -> Self {
        Self {
            name: stub.name.clone(),
            date: Some(stub.date.clone()),
            ..Self::default()
        }
    }
}

/// Name and date of an event spotted on a calendar grid, before its detail
/// page has been opened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEventStub {
    pub name: String,
    pub date: String,
}

/// Everything collected from one configured site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapedResult {
    pub company: String,
    pub url: String,
    pub hikes: Vec<HikeRecord>,
}

impl ScrapedResult {
    #[must_use]
    pub fn new(site: &SiteConfig, hikes: Vec<HikeRecord>) -> Self {
        Self {
            company: site.company.clone(),
            url: site.url.clone(),
            hikes,
        }
    }

    #[must_use]
    pub fn empty(site: &SiteConfig) -> Self {
        Self::new(site, Vec::new())
    }
}
