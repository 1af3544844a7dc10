pub mod app_config;
pub mod config;
pub mod date_window;
pub mod hikes;
pub mod report;
pub mod sites;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use date_window::{resolve_date_window, TargetDateWindow, DEFAULT_DATE_WINDOW};
pub use hikes::{CalendarEventStub, HikeRecord, ScrapedResult};
pub use report::{render_report, ReportTotals};
pub use sites::{default_sites, load_sites, SiteConfig, SitesFile, StrategyKind};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read sites file {path}: {source}")]
    SitesFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse sites file: {0}")]
    SitesFileParse(#[source] serde_yaml::Error),

    #[error("sites validation failed: {0}")]
    Validation(String),
}
