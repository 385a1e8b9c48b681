//! Error types for card-scout.
//!
//! Detection never fails for lack of candidates (that is `Ok(None)`); errors
//! here come from the host tree or from caller-supplied input.

/// Error type for detection and selector operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A selector could not be parsed by the host tree's query engine.
    #[error("Invalid selector: {0}")]
    InvalidSelector(String),

    /// A URL supplied by the caller could not be parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Options failed validation or could not be deserialized.
    #[error("Invalid options: {0}")]
    InvalidOptions(String),
}

/// Result type alias for card-scout operations.
pub type Result<T> = std::result::Result<T, Error>;
