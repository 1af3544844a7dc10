use thiserror::Error;

use crate::schema::ExtractionSchema;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The session service answered with `success: false`.
    #[error("session API error during {operation}: {message}")]
    Session { operation: String, message: String },

    #[error("extraction result does not match {schema} contract: {reason}")]
    SchemaViolation {
        schema: ExtractionSchema,
        reason: String,
    },

    #[error("invalid session API base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },

    #[error("missing session credential: {0}")]
    MissingCredential(&'static str),
}
