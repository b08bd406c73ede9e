//! Response envelopes returned by the store
//!
//! A read answers with `{"action": "get", "node": {"key": ..., "value": ...}}`.
//! Only `node.value` matters to the cache; the rest is kept for diagnostics.

use serde::Deserialize;

use crate::error::{CacheError, Result};

/// Envelope of a GET on a key.
#[derive(Debug, Clone, Deserialize)]
pub struct KeyResponse {
    /// Store action that produced the response (`get`, `set`, ...)
    #[serde(default)]
    pub action: Option<String>,
    /// The node wrapping the stored value
    #[serde(default)]
    pub node: Option<Node>,
}

/// A single node of the store's key hierarchy.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
    /// Remaining TTL in seconds, as reported by the store
    #[serde(default)]
    pub ttl: Option<i64>,
    /// Expiration timestamp, as reported by the store
    #[serde(default)]
    pub expiration: Option<String>,
    #[serde(default)]
    pub modified_index: Option<u64>,
    #[serde(default)]
    pub created_index: Option<u64>,
}

impl KeyResponse {
    /// Parses a response body.
    ///
    /// A body that is not JSON, or JSON of the wrong shape, is malformed.
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        serde_json::from_slice(body)
            .map_err(|e| CacheError::MalformedResponse(format!("invalid envelope: {}", e)))
    }

    /// Extracts `node.value`, failing hard when either level is missing.
    pub fn into_value(self) -> Result<String> {
        let node = self
            .node
            .ok_or_else(|| CacheError::MalformedResponse("missing `node`".to_string()))?;
        node.value
            .ok_or_else(|| CacheError::MalformedResponse("missing `node.value`".to_string()))
    }
}
