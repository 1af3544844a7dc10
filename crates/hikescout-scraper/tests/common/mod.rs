//! In-memory session fake shared by the strategy and end-to-end tests.
//!
//! `ScriptedSession` records every call it receives and answers extraction
//! requests from a queue, in order. Navigation and action failures are
//! configured up front.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use hikescout_core::{SiteConfig, StrategyKind};
use hikescout_scraper::{BrowserPage, ExtractionSchema, Extractor, ScraperError, WaitUntil};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Navigate(String),
    Act(String),
    Evaluate,
    Extract(ExtractionSchema),
    GoBack,
}

#[derive(Default)]
pub struct ScriptedSession {
    calls: Mutex<Vec<Call>>,
    extractions: Mutex<VecDeque<Result<Value, String>>>,
    failing_urls: Vec<String>,
    failing_acts: Vec<String>,
    fail_go_back: bool,
}

impl ScriptedSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful extraction result.
    pub fn extraction(self, value: Value) -> Self {
        self.extractions.lock().unwrap().push_back(Ok(value));
        self
    }

    /// Queue an extraction that fails with `message`.
    pub fn extraction_error(self, message: &str) -> Self {
        self.extractions
            .lock()
            .unwrap()
            .push_back(Err(message.to_string()));
        self
    }

    /// Make navigation to `url` fail.
    pub fn fail_navigation_to(mut self, url: &str) -> Self {
        self.failing_urls.push(url.to_string());
        self
    }

    /// Make any action whose instruction contains `needle` fail.
    pub fn fail_act_containing(mut self, needle: &str) -> Self {
        self.failing_acts.push(needle.to_string());
        self
    }

    pub fn fail_go_back(mut self) -> Self {
        self.fail_go_back = true;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, predicate: impl Fn(&Call) -> bool) -> usize {
        self.calls().iter().filter(|c| predicate(c)).count()
    }

    pub fn remaining_extractions(&self) -> usize {
        self.extractions.lock().unwrap().len()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

fn session_error(operation: &str, message: &str) -> ScraperError {
    ScraperError::Session {
        operation: operation.to_string(),
        message: message.to_string(),
    }
}

#[async_trait]
impl BrowserPage for ScriptedSession {
    async fn navigate(&self, url: &str, _wait_until: WaitUntil) -> Result<(), ScraperError> {
        self.record(Call::Navigate(url.to_string()));
        if self.failing_urls.iter().any(|u| u == url) {
            return Err(session_error("navigate", "net::ERR_NAME_NOT_RESOLVED"));
        }
        Ok(())
    }

    async fn act(&self, instruction: &str, _timeout: Option<Duration>) -> Result<(), ScraperError> {
        self.record(Call::Act(instruction.to_string()));
        if self.failing_acts.iter().any(|n| instruction.contains(n.as_str())) {
            return Err(session_error("act", "element not found"));
        }
        Ok(())
    }

    async fn evaluate(&self, _script: &str, _args: Value) -> Result<Value, ScraperError> {
        self.record(Call::Evaluate);
        Ok(Value::Null)
    }

    async fn go_back(&self) -> Result<(), ScraperError> {
        self.record(Call::GoBack);
        if self.fail_go_back {
            return Err(session_error("back", "no history entry"));
        }
        Ok(())
    }
}

#[async_trait]
impl Extractor for ScriptedSession {
    async fn extract(
        &self,
        _instruction: &str,
        schema: ExtractionSchema,
    ) -> Result<Value, ScraperError> {
        self.record(Call::Extract(schema));
        match self.extractions.lock().unwrap().pop_front() {
            Some(Ok(value)) => Ok(value),
            Some(Err(message)) => Err(session_error("extract", &message)),
            None => Err(session_error("extract", "no scripted extraction left")),
        }
    }
}

pub fn list_site(company: &str, url: &str) -> SiteConfig {
    SiteConfig::new(company, url, StrategyKind::ListPage)
}

pub fn calendar_site(company: &str, url: &str) -> SiteConfig {
    SiteConfig::new(company, url, StrategyKind::CalendarDrilldown)
}
