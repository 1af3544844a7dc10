//! Page helpers shared by every strategy: overlay dismissal and
//! scroll-to-load, plus the delays that pace them.

use std::time::Duration;

use hikescout_core::AppConfig;
use serde_json::json;

use crate::capability::BrowserPage;
use crate::error::ScraperError;
use crate::instructions::DISMISS_OVERLAYS;

/// Scrolls the window by a percentage of the viewport height.
pub const SCROLL_SCRIPT: &str =
    "(args) => { window.scrollBy(0, (window.innerHeight * args.percentage) / 100); }";

/// Delays and scroll geometry used while driving a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSettings {
    pub page_settle: Duration,
    pub overlay_timeout: Duration,
    pub scroll_steps: u32,
    pub scroll_viewport_pct: u32,
    pub scroll_settle: Duration,
    pub detail_settle: Duration,
    pub back_settle: Duration,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            page_settle: Duration::from_millis(2000),
            overlay_timeout: Duration::from_millis(5000),
            scroll_steps: 5,
            scroll_viewport_pct: 80,
            scroll_settle: Duration::from_millis(500),
            detail_settle: Duration::from_millis(2000),
            back_settle: Duration::from_millis(1500),
        }
    }
}

impl PageSettings {
    /// Same scroll geometry as the defaults, with every delay set to zero.
    #[must_use]
    pub fn immediate() -> Self {
        Self {
            page_settle: Duration::ZERO,
            scroll_settle: Duration::ZERO,
            detail_settle: Duration::ZERO,
            back_settle: Duration::ZERO,
            ..Self::default()
        }
    }
}

impl From<&AppConfig> for PageSettings {
    fn from(config: &AppConfig) -> Self {
        Self {
            page_settle: Duration::from_millis(config.page_settle_ms),
            overlay_timeout: Duration::from_millis(config.overlay_timeout_ms),
            scroll_steps: config.scroll_steps,
            scroll_viewport_pct: config.scroll_viewport_pct,
            scroll_settle: Duration::from_millis(config.scroll_settle_ms),
            detail_settle: Duration::from_millis(config.detail_settle_ms),
            back_settle: Duration::from_millis(config.back_settle_ms),
        }
    }
}

/// Best-effort popup and cookie-banner dismissal.
///
/// Most pages have nothing to dismiss, so a failed action is expected and
/// only logged at debug level.
pub async fn dismiss_overlays<P>(page: &P, settings: &PageSettings)
where
    P: BrowserPage + ?Sized,
{
    if let Err(e) = page
        .act(DISMISS_OVERLAYS, Some(settings.overlay_timeout))
        .await
    {
        tracing::debug!(error = %e, "no overlay dismissed");
    }
}

/// Scroll down in `scroll_steps` fixed increments, pausing after each.
///
/// # Errors
///
/// Returns the first error raised by the page while scrolling.
pub async fn scroll_to_load<P>(page: &P, settings: &PageSettings) -> Result<(), ScraperError>
where
    P: BrowserPage + ?Sized,
{
    let args = json!({ "percentage": settings.scroll_viewport_pct });
    for _ in 0..settings.scroll_steps {
        page.evaluate(SCROLL_SCRIPT, args.clone()).await?;
        tokio::time::sleep(settings.scroll_settle).await;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_operator_tuning() {
        let settings = PageSettings::default();
        assert_eq!(settings.scroll_steps, 5);
        assert_eq!(settings.scroll_viewport_pct, 80);
        assert_eq!(settings.scroll_settle, Duration::from_millis(500));
        assert_eq!(settings.overlay_timeout, Duration::from_secs(5));
    }

    #[test]
    fn immediate_keeps_geometry_and_overlay_timeout() {
        let settings = PageSettings::immediate();
        assert_eq!(settings.scroll_steps, 5);
        assert_eq!(settings.page_settle, Duration::ZERO);
        assert_eq!(settings.back_settle, Duration::ZERO);
        assert_eq!(settings.overlay_timeout, Duration::from_secs(5));
    }

    #[test]
    fn scroll_script_uses_percentage_argument() {
        assert!(SCROLL_SCRIPT.contains("args.percentage"));
        assert!(SCROLL_SCRIPT.contains("window.innerHeight"));
    }
}
