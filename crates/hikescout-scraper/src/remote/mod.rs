//! HTTP adapter for the hosted browser-session service.
//!
//! A [`RemoteSession`] owns one remote browser page for its whole lifetime.
//! Every endpoint is a JSON `POST` and answers with the envelope
//! `{ "success": bool, "data": ..., "message": ... }`; a `success: false`
//! envelope or a non-2xx status surfaces as [`ScraperError::Session`].

mod types;

pub use types::SessionOptions;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Serialize;

use crate::capability::{BrowserPage, Extractor, WaitUntil};
use crate::error::ScraperError;
use crate::schema::ExtractionSchema;
use types::{
    ActOptions, ActRequest, ApiEnvelope, BrowserSettings, EvaluateRequest, ExtractRequest,
    NavigateOptions, NavigateRequest, SessionCreateParams, StartSessionData, StartSessionRequest,
    Viewport,
};

const USER_AGENT: &str = "hikescout/0.1 (weekend-hike-listings)";

/// Plain HTTP plumbing shared by every session call.
struct ApiClient {
    client: Client,
    base_url: Url,
    api_key: String,
    project_id: String,
    model_api_key: String,
}

impl ApiClient {
    fn new(options: &SessionOptions) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(options.request_timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(USER_AGENT)
            .build()?;

        // Exactly one trailing slash, so `join` appends to the base path
        // instead of replacing its last segment.
        let normalised = format!("{}/", options.base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| ScraperError::InvalidBaseUrl {
            base_url: options.base_url.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            base_url,
            api_key: options.api_key.clone(),
            project_id: options.project_id.clone(),
            model_api_key: options.model_api_key.clone(),
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, ScraperError> {
        self.base_url
            .join(path)
            .map_err(|e| ScraperError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: format!("cannot join '{path}': {e}"),
            })
    }

    /// POSTs `body` to `path` and unwraps the response envelope.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::Http`] on network failure.
    /// - [`ScraperError::Session`] on a non-2xx status or `success: false`.
    /// - [`ScraperError::Deserialize`] if the envelope does not parse.
    async fn post<B, T>(
        &self,
        path: &str,
        operation: &str,
        body: &B,
    ) -> Result<Option<T>, ScraperError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        let response = self
            .client
            .post(url)
            .header("x-bb-api-key", &self.api_key)
            .header("x-bb-project-id", &self.project_id)
            .header("x-model-api-key", &self.model_api_key)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiEnvelope<IgnoredAny>>(&text)
                .ok()
                .and_then(|envelope| envelope.message)
                .unwrap_or(text);
            return Err(ScraperError::Session {
                operation: operation.to_owned(),
                message: format!("HTTP {status}: {message}"),
            });
        }

        let envelope: ApiEnvelope<T> =
            serde_json::from_str(&text).map_err(|e| ScraperError::Deserialize {
                context: operation.to_owned(),
                source: e,
            })?;

        if !envelope.success {
            return Err(ScraperError::Session {
                operation: operation.to_owned(),
                message: envelope
                    .message
                    .unwrap_or_else(|| "unknown error".to_string()),
            });
        }

        Ok(envelope.data)
    }
}

/// One hosted browser session driving a single shared page.
///
/// Open with [`RemoteSession::start`] and release with
/// [`RemoteSession::close`]. Calls must not overlap; the scrape pipeline
/// awaits each one before issuing the next.
pub struct RemoteSession {
    api: ApiClient,
    session_id: String,
}

impl RemoteSession {
    /// Opens a new remote browser session.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::InvalidBaseUrl`] if `options.base_url` does not parse.
    /// - [`ScraperError::Http`] on network failure.
    /// - [`ScraperError::Session`] if the service refuses the session or
    ///   returns no session id.
    pub async fn start(options: &SessionOptions) -> Result<Self, ScraperError> {
        let api = ApiClient::new(options)?;

        let request = StartSessionRequest {
            model_name: &options.model_name,
            dom_settle_timeout_ms: options.dom_settle_timeout_ms,
            browserbase_session_create_params: SessionCreateParams {
                project_id: &options.project_id,
                proxies: options.use_proxies,
                browser_settings: BrowserSettings {
                    block_ads: options.block_ads,
                    viewport: Viewport {
                        width: options.viewport_width,
                        height: options.viewport_height,
                    },
                },
            },
        };

        let data: StartSessionData = api
            .post("sessions/start", "start", &request)
            .await?
            .ok_or_else(|| ScraperError::Session {
                operation: "start".to_string(),
                message: "response carried no session id".to_string(),
            })?;

        tracing::info!(session_id = %data.session_id, "browser session started");

        Ok(Self {
            api,
            session_id: data.session_id,
        })
    }

    #[must_use]
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Ends the remote session.
    ///
    /// # Errors
    ///
    /// Returns the service or transport error if teardown fails; the remote
    /// session may then linger until the service times it out.
    pub async fn close(self) -> Result<(), ScraperError> {
        self.call::<_, IgnoredAny>("end", &serde_json::json!({}))
            .await?;
        tracing::info!(session_id = %self.session_id, "browser session closed");
        Ok(())
    }

    async fn call<B, T>(&self, operation: &str, body: &B) -> Result<Option<T>, ScraperError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let path = format!("sessions/{}/{operation}", self.session_id);
        self.api.post(&path, operation, body).await
    }
}

#[async_trait]
impl BrowserPage for RemoteSession {
    async fn navigate(&self, url: &str, wait_until: WaitUntil) -> Result<(), ScraperError> {
        let request = NavigateRequest {
            url,
            options: NavigateOptions { wait_until },
        };
        self.call::<_, IgnoredAny>("navigate", &request).await?;
        Ok(())
    }

    async fn act(&self, instruction: &str, timeout: Option<Duration>) -> Result<(), ScraperError> {
        let request = ActRequest {
            input: instruction,
            options: timeout.map(|t| ActOptions {
                timeout_ms: u64::try_from(t.as_millis()).unwrap_or(u64::MAX),
            }),
        };
        self.call::<_, IgnoredAny>("act", &request).await?;
        Ok(())
    }

    async fn evaluate(
        &self,
        script: &str,
        args: serde_json::Value,
    ) -> Result<serde_json::Value, ScraperError> {
        let request = EvaluateRequest { script, args };
        let data = self.call("evaluate", &request).await?;
        Ok(data.unwrap_or(serde_json::Value::Null))
    }

    async fn go_back(&self) -> Result<(), ScraperError> {
        self.call::<_, IgnoredAny>("back", &serde_json::json!({}))
            .await?;
        Ok(())
    }
}

#[async_trait]
impl Extractor for RemoteSession {
    async fn extract(
        &self,
        instruction: &str,
        schema: ExtractionSchema,
    ) -> Result<serde_json::Value, ScraperError> {
        let request = ExtractRequest {
            instruction,
            schema: schema.definition(),
        };
        tracing::debug!(session_id = %self.session_id, schema = %schema, "extracting");
        let data = self.call("extract", &request).await?;
        Ok(data.unwrap_or(serde_json::Value::Null))
    }
}
