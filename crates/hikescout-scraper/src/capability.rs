//! The two external capabilities a scrape depends on.
//!
//! [`BrowserPage`] drives a single shared page; [`Extractor`] turns the
//! current page into structured data matching an [`ExtractionSchema`].
//! Both are implemented by [`crate::RemoteSession`]; tests use in-memory
//! fakes. Every method is a suspension point and callers never issue two
//! calls concurrently against the same session.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

use crate::error::ScraperError;
use crate::schema::ExtractionSchema;

/// Page lifecycle event to wait for after navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WaitUntil {
    DomContentLoaded,
}

#[async_trait]
pub trait BrowserPage: Send + Sync {
    /// Load `url` in the shared page.
    async fn navigate(&self, url: &str, wait_until: WaitUntil) -> Result<(), ScraperError>;

    /// Perform a natural-language action on the page ("click on the ... link").
    ///
    /// `timeout` bounds the action on the service side when given.
    async fn act(&self, instruction: &str, timeout: Option<Duration>) -> Result<(), ScraperError>;

    /// Run `script` in the page with `args` passed as its single argument.
    async fn evaluate(
        &self,
        script: &str,
        args: serde_json::Value,
    ) -> Result<serde_json::Value, ScraperError>;

    /// Go back one entry in the page history.
    async fn go_back(&self) -> Result<(), ScraperError>;
}

#[async_trait]
pub trait Extractor: Send + Sync {
    /// Extract data from the current page as instructed.
    ///
    /// The returned value is unvalidated; callers check it against `schema`
    /// with the decoders in [`crate::schema`].
    async fn extract(
        &self,
        instruction: &str,
        schema: ExtractionSchema,
    ) -> Result<serde_json::Value, ScraperError>;
}
