//! Error types for rs-htmlutil.
//!
//! Searches that find nothing are not errors; only the `try_*` variants
//! report [`Error::NotFound`].

/// Error type for tree queries and rendering.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A strict search or removal matched no nodes.
    #[error("no nodes found")]
    NotFound,

    /// The serializer could not produce markup for a node.
    #[error("Serialization failed: {0}")]
    Serialization(String),

    /// Match criteria could not be decoded.
    #[error("Invalid match criteria: {0}")]
    InvalidCriteria(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidCriteria(err.to_string())
    }
}

/// Result type alias for fallible operations.
pub type Result<T> = std::result::Result<T, Error>;
