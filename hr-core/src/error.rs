/// Error types for the HR UI widgets
use thiserror::Error;

/// Main error type for widget operations.
///
/// None of these are fatal to a page: callers log them and leave the
/// affected widget unrendered or stale.
#[derive(Error, Debug)]
pub enum HrError {
    /// The request never produced a response
    #[error("Request to {url} failed: {reason}")]
    Fetch { url: String, reason: String },

    /// The endpoint answered with a non-success status
    #[error("Request to {url} returned HTTP {status}")]
    Http { url: String, status: u16 },

    /// Response body was not the expected JSON shape
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A call into the charting glue threw or returned garbage
    #[error("Chart bridge call failed: {0}")]
    Bridge(String),

    /// A DOM element the widget attaches to is not on the page
    #[error("Element not found: {0}")]
    MissingElement(String),

    /// No widget is registered under the given name
    #[error("Unknown widget: {0}")]
    UnknownWidget(String),
}

/// Type alias for Results using HrError
pub type Result<T> = std::result::Result<T, HrError>;
