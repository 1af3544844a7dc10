pub mod capability;
pub mod error;
pub mod instructions;
pub mod orchestrator;
pub mod page;
pub mod remote;
pub mod schema;
pub mod strategy;

pub use capability::{BrowserPage, Extractor, WaitUntil};
pub use error::ScraperError;
pub use orchestrator::run_sites;
pub use page::PageSettings;
pub use remote::{RemoteSession, SessionOptions};
pub use schema::ExtractionSchema;
pub use strategy::{scrape_site, ScrapePhase};
