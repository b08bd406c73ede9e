//! Transport Module
//!
//! The HTTP seam between the cache adapter and the remote store. The adapter
//! only needs GET, HEAD, form-encoded PUT and DELETE against absolute URLs,
//! plus access to the status code and, for GET, the body.

mod http;

#[cfg(test)]
pub(crate) mod fake;

use async_trait::async_trait;

use crate::error::{CacheError, Result};
use crate::models::WriteForm;

pub use http::ReqwestTransport;

// == Transport Response ==
/// Status and body of a completed exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// A response with an empty body.
    pub fn status_only(status: u16) -> Self {
        Self::new(status, Vec::new())
    }

    /// Turns error statuses into errors.
    ///
    /// 4xx becomes `RemoteRejected`, 5xx becomes `RemoteFailure`, anything
    /// else is handed back unchanged.
    pub fn error_for_status(self) -> Result<Self> {
        match self.status {
            400..=499 => Err(CacheError::RemoteRejected {
                status: self.status,
            }),
            500..=599 => Err(CacheError::RemoteFailure {
                status: self.status,
            }),
            _ => Ok(self),
        }
    }
}

// == Transport Trait ==
/// HTTP client capable of the four verbs the store protocol uses.
///
/// Implementations report every answer the store gives as a `TransportResponse`,
/// whatever its status; `Err` is reserved for exchanges that never completed.
/// Deadlines and cancellation are the implementation's business.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str) -> Result<TransportResponse>;

    async fn head(&self, url: &str) -> Result<TransportResponse>;

    /// PUT with a form-encoded body.
    async fn put_form(&self, url: &str, form: &WriteForm) -> Result<TransportResponse>;

    async fn delete(&self, url: &str) -> Result<TransportResponse>;
}
