//! Target date window for a run.
//!
//! The window is a free-form phrase ("this weekend", "Saturday 18th and
//! Sunday 19th October") embedded verbatim into extraction instructions.
//! It is never parsed into dates.

use std::path::Path;

/// Phrase used when the dates file is missing or unreadable.
pub const DEFAULT_DATE_WINDOW: &str = "this weekend";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetDateWindow(String);

impl TargetDateWindow {
    #[must_use]
    pub fn new(phrase: impl Into<String>) -> Self {
        Self(phrase.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TargetDateWindow {
    fn default() -> Self {
        Self::new(DEFAULT_DATE_WINDOW)
    }
}

impl std::fmt::Display for TargetDateWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Read the target date window from `path`, trimming surrounding whitespace.
///
/// Never fails: a missing or unreadable file logs a warning and yields
/// [`DEFAULT_DATE_WINDOW`]. A readable file is used as-is after trimming,
/// even when that leaves an empty phrase.
#[must_use]
pub fn resolve_date_window(path: &Path) -> TargetDateWindow {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            let phrase = content.trim();
            if phrase.is_empty() {
                tracing::warn!(path = %path.display(), "dates file is empty");
            }
            TargetDateWindow::new(phrase)
        }
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                fallback = DEFAULT_DATE_WINDOW,
                "failed to read dates file; using fallback window"
            );
            TargetDateWindow::default()
        }
    }
}
