//! Request and response shapes for the hosted session API.

use hikescout_core::AppConfig;
use serde::{Deserialize, Serialize};

use crate::capability::WaitUntil;
use crate::error::ScraperError;

/// Everything needed to open a hosted browser session.
#[derive(Clone)]
pub struct SessionOptions {
    pub base_url: String,
    pub api_key: String,
    pub project_id: String,
    pub model_api_key: String,
    pub model_name: String,
    pub request_timeout_secs: u64,
    pub dom_settle_timeout_ms: u64,
    pub viewport_width: u32,
    pub viewport_height: u32,
    pub block_ads: bool,
    pub use_proxies: bool,
}

impl SessionOptions {
    /// Build session options from the application config.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::MissingCredential`] naming the first unset
    /// credential variable.
    pub fn from_config(config: &AppConfig) -> Result<Self, ScraperError> {
        let api_key = config
            .browser_api_key
            .clone()
            .ok_or(ScraperError::MissingCredential("BROWSERBASE_API_KEY"))?;
        let project_id = config
            .browser_project_id
            .clone()
            .ok_or(ScraperError::MissingCredential("BROWSERBASE_PROJECT_ID"))?;
        let model_api_key = config
            .model_api_key
            .clone()
            .ok_or(ScraperError::MissingCredential("ANTHROPIC_API_KEY"))?;

        Ok(Self {
            base_url: config.session_api_url.clone(),
            api_key,
            project_id,
            model_api_key,
            model_name: config.model_name.clone(),
            request_timeout_secs: config.request_timeout_secs,
            dom_settle_timeout_ms: config.dom_settle_timeout_ms,
            viewport_width: config.viewport_width,
            viewport_height: config.viewport_height,
            block_ads: config.block_ads,
            use_proxies: config.use_proxies,
        })
    }
}

impl std::fmt::Debug for SessionOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionOptions")
            .field("base_url", &self.base_url)
            .field("api_key", &"[redacted]")
            .field("project_id", &self.project_id)
            .field("model_api_key", &"[redacted]")
            .field("model_name", &self.model_name)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("dom_settle_timeout_ms", &self.dom_settle_timeout_ms)
            .field("viewport_width", &self.viewport_width)
            .field("viewport_height", &self.viewport_height)
            .field("block_ads", &self.block_ads)
            .field("use_proxies", &self.use_proxies)
            .finish()
    }
}

/// Every endpoint wraps its payload in this envelope.
#[derive(Debug, Deserialize)]
pub(super) struct ApiEnvelope<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct StartSessionRequest<'a> {
    pub model_name: &'a str,
    pub dom_settle_timeout_ms: u64,
    pub browserbase_session_create_params: SessionCreateParams<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct SessionCreateParams<'a> {
    pub project_id: &'a str,
    pub proxies: bool,
    pub browser_settings: BrowserSettings,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct BrowserSettings {
    pub block_ads: bool,
    pub viewport: Viewport,
}

#[derive(Debug, Serialize)]
pub(super) struct Viewport {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct StartSessionData {
    pub session_id: String,
}

#[derive(Debug, Serialize)]
pub(super) struct NavigateRequest<'a> {
    pub url: &'a str,
    pub options: NavigateOptions,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct NavigateOptions {
    pub wait_until: WaitUntil,
}

#[derive(Debug, Serialize)]
pub(super) struct ActRequest<'a> {
    pub input: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<ActOptions>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ActOptions {
    pub timeout_ms: u64,
}

#[derive(Debug, Serialize)]
pub(super) struct ExtractRequest<'a> {
    pub instruction: &'a str,
    pub schema: serde_json::Value,
}

#[derive(Debug, Serialize)]
pub(super) struct EvaluateRequest<'a> {
    pub script: &'a str,
    pub args: serde_json::Value,
}
