// Error types for mozillians-e2e

use std::time::Duration;
use thiserror::Error;

/// Result type alias for page-object and scenario operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while driving the Mozillians site
#[derive(Debug, Error)]
pub enum Error {
    /// An element never appeared within the wait timeout
    ///
    /// Indicates either a UI regression or a broken selector. Never retried.
    #[error("Element not found after {timeout_ms}ms: selector '{selector}'")]
    ElementNotFound { selector: String, timeout_ms: u64 },

    /// An action did not land on the view it is documented to produce
    #[error("Expected the {expected} view, but the browser is at '{url}'")]
    UnexpectedPage { expected: String, url: String },

    /// A filtered search produced no profiles to pick from
    #[error("Search results are empty: {0}")]
    EmptySearchResults(String),

    /// A scenario check did not hold
    ///
    /// The message pairs the expected and the actual value.
    #[error("Assertion failed: {0}")]
    AssertionFailed(String),

    /// Configuration is missing or malformed
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Error reported by the Playwright driver
    #[error("Browser error: {0}")]
    Browser(#[from] playwright_rs::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL could not be parsed or joined
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// Error with additional context
    #[error("{0}: {1}")]
    Context(String, #[source] Box<Error>),
}

impl Error {
    /// Adds context to the error
    pub fn context(self, msg: impl Into<String>) -> Self {
        Error::Context(msg.into(), Box::new(self))
    }

    pub(crate) fn element_not_found(selector: &str, timeout: Duration) -> Self {
        Error::ElementNotFound {
            selector: selector.to_string(),
            timeout_ms: timeout.as_millis() as u64,
        }
    }
}
