use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

pub const DEFAULT_SESSION_API_URL: &str = "https://api.stagehand.browserbase.com/v1";
pub const DEFAULT_MODEL_NAME: &str = "anthropic/claude-sonnet-4-20250514";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but cannot be parsed.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but cannot be parsed.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Credentials are optional here; the run command checks for them before
/// starting a session so that read-only commands work without secrets.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let optional = |var: &str| -> Option<String> {
        lookup(var).ok().filter(|v| !v.trim().is_empty())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_flag = |var: &str, default: bool| -> Result<bool, ConfigError> {
        match lookup(var) {
            Ok(raw) => parse_bool(&raw).ok_or_else(|| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: format!("expected true/false, got '{raw}'"),
            }),
            Err(_) => Ok(default),
        }
    };

    let env = parse_environment(&or_default("HIKESCOUT_ENV", "development"))?;
    let log_level = or_default("HIKESCOUT_LOG_LEVEL", "info");
    let sites_path = optional("HIKESCOUT_SITES_PATH").map(PathBuf::from);
    let dates_path = PathBuf::from(or_default("HIKESCOUT_DATES_PATH", "./weekend_dates.md"));

    let session_api_url = or_default("HIKESCOUT_SESSION_API_URL", DEFAULT_SESSION_API_URL);
    let browser_api_key = optional("BROWSERBASE_API_KEY");
    let browser_project_id = optional("BROWSERBASE_PROJECT_ID");
    let model_api_key = optional("ANTHROPIC_API_KEY");
    let model_name = or_default("HIKESCOUT_MODEL_NAME", DEFAULT_MODEL_NAME);

    let request_timeout_secs = parse_u64("HIKESCOUT_REQUEST_TIMEOUT_SECS", "120")?;
    let dom_settle_timeout_ms = parse_u64("HIKESCOUT_DOM_SETTLE_TIMEOUT_MS", "30000")?;
    let page_settle_ms = parse_u64("HIKESCOUT_PAGE_SETTLE_MS", "2000")?;
    let overlay_timeout_ms = parse_u64("HIKESCOUT_OVERLAY_TIMEOUT_MS", "5000")?;
    let scroll_steps = parse_u32("HIKESCOUT_SCROLL_STEPS", "5")?;
    let scroll_viewport_pct = parse_u32("HIKESCOUT_SCROLL_VIEWPORT_PCT", "80")?;
    if scroll_viewport_pct == 0 || scroll_viewport_pct > 100 {
        return Err(ConfigError::InvalidEnvVar {
            var: "HIKESCOUT_SCROLL_VIEWPORT_PCT".to_string(),
            reason: format!("must be between 1 and 100, got {scroll_viewport_pct}"),
        });
    }
    let scroll_settle_ms = parse_u64("HIKESCOUT_SCROLL_SETTLE_MS", "500")?;
    let detail_settle_ms = parse_u64("HIKESCOUT_DETAIL_SETTLE_MS", "2000")?;
    let back_settle_ms = parse_u64("HIKESCOUT_BACK_SETTLE_MS", "1500")?;

    let viewport_width = parse_u32("HIKESCOUT_VIEWPORT_WIDTH", "1024")?;
    let viewport_height = parse_u32("HIKESCOUT_VIEWPORT_HEIGHT", "768")?;
    let block_ads = parse_flag("HIKESCOUT_BLOCK_ADS", true)?;
    let use_proxies = parse_flag("HIKESCOUT_USE_PROXIES", true)?;

    Ok(AppConfig {
        env,
        log_level,
        sites_path,
        dates_path,
        session_api_url,
        browser_api_key,
        browser_project_id,
        model_api_key,
        model_name,
        request_timeout_secs,
        dom_settle_timeout_ms,
        page_settle_ms,
        overlay_timeout_ms,
        scroll_steps,
        scroll_viewport_pct,
        scroll_settle_ms,
        detail_settle_ms,
        back_settle_ms,
        viewport_width,
        viewport_height,
        block_ads,
        use_proxies,
    })
}

/// Parse a string into an `Environment` variant.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidEnvVar`] for anything other than
/// `development`, `test`, or `production`.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "HIKESCOUT_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
