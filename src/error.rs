//! Error types for the cache adapter
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache adapter.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Cache key failed the legality check; raised before any request is sent
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Connection-level failure reported by the transport
    #[error("Transport failure: {0}")]
    Transport(String),

    /// The store answered with a client-side error status (4xx)
    #[error("Remote store rejected the request with status {status}")]
    RemoteRejected { status: u16 },

    /// The store answered with a server-side error status (5xx)
    #[error("Remote store failed with status {status}")]
    RemoteFailure { status: u16 },

    /// A successful read did not carry the expected envelope
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// TTL cannot be expressed as whole, non-negative seconds
    #[error("Invalid TTL: {0}")]
    InvalidTtl(String),
}

impl CacheError {
    /// Returns true for the one class that `set` and `delete` fold into `false`.
    pub fn is_rejection(&self) -> bool {
        matches!(self, CacheError::RemoteRejected { .. })
    }

    /// Status code carried by the error, if the store answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            CacheError::RemoteRejected { status } | CacheError::RemoteFailure { status } => {
                Some(*status)
            }
            _ => None,
        }
    }
}

impl From<reqwest::Error> for CacheError {
    fn from(err: reqwest::Error) -> Self {
        CacheError::Transport(err.to_string())
    }
}

// == Result Type Alias ==
/// Convenience Result type for the cache adapter.
pub type Result<T> = std::result::Result<T, CacheError>;
