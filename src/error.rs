//! Error types for rs-unfurl.
//!
//! Only structurally invalid requests surface as errors. Extraction misses
//! (selector matches nothing, a URL fails to resolve) are represented as
//! absent fields in the result, never as errors.

/// Error type for extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request carried no source URL.
    #[error("missing required field: source_url")]
    MissingSourceUrl,
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
