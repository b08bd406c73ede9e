//! Request bodies sent to the store
//!
//! Writes are form-encoded, not JSON.

use serde::Serialize;

use crate::cache::Ttl;

/// Form body for a PUT against an entry leaf.
///
/// # Fields
/// - `value`: The payload to store
/// - `ttl`: Optional TTL in seconds, omitted entirely when there is no expiry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WriteForm {
    /// The value to store
    pub value: String,
    /// TTL in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u64>,
}

impl WriteForm {
    /// Creates a new WriteForm, resolving the TTL to seconds.
    pub fn new(value: impl Into<String>, ttl: Ttl) -> Self {
        Self {
            value: value.into(),
            ttl: ttl.as_seconds(),
        }
    }
}
