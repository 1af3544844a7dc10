use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// `None` selects the built-in operator list.
    pub sites_path: Option<PathBuf>,
    pub dates_path: PathBuf,
    pub session_api_url: String,
    pub browser_api_key: Option<String>,
    pub browser_project_id: Option<String>,
    pub model_api_key: Option<String>,
    pub model_name: String,
    pub request_timeout_secs: u64,
    pub dom_settle_timeout_ms: u64,
    pub page_settle_ms: u64,
    pub overlay_timeout_ms: u64,
    pub scroll_steps: u32,
    pub scroll_viewport_pct: u32,
    pub scroll_settle_ms: u64,
    pub detail_settle_ms: u64,
    pub back_settle_ms: u64,
    pub viewport_width: u32,
    pub viewport_height: u32,
    pub block_ads: bool,
    pub use_proxies: bool,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field("sites_path", &self.sites_path)
            .field("dates_path", &self.dates_path)
            .field("session_api_url", &self.session_api_url)
            .field(
                "browser_api_key",
                &self.browser_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("browser_project_id", &self.browser_project_id)
            .field(
                "model_api_key",
                &self.model_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("model_name", &self.model_name)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("dom_settle_timeout_ms", &self.dom_settle_timeout_ms)
            .field("page_settle_ms", &self.page_settle_ms)
            .field("overlay_timeout_ms", &self.overlay_timeout_ms)
            .field("scroll_steps", &self.scroll_steps)
            .field("scroll_viewport_pct", &self.scroll_viewport_pct)
            .field("scroll_settle_ms", &self.scroll_settle_ms)
            .field("detail_settle_ms", &self.detail_settle_ms)
            .field("back_settle_ms", &self.back_settle_ms)
            .field("viewport_width", &self.viewport_width)
            .field("viewport_height", &self.viewport_height)
            .field("block_ads", &self.block_ads)
            .field("use_proxies", &self.use_proxies)
            .finish()
    }
}
