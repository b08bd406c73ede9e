//! TTL Module
//!
//! Expiry requested at write time. The adapter never enforces it; it is
//! resolved to whole seconds and forwarded to the store.

use std::time::Duration;

use chrono::TimeDelta;

use crate::error::CacheError;

/// Time-to-live attached to a write.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Ttl {
    /// No `ttl` field is sent; the store applies its own policy
    #[default]
    NoExpiry,
    /// Expire after this many seconds (zero is forwarded as-is)
    Seconds(u64),
}

impl Ttl {
    /// Seconds to send to the store, if any.
    pub fn as_seconds(&self) -> Option<u64> {
        match self {
            Ttl::NoExpiry => None,
            Ttl::Seconds(secs) => Some(*secs),
        }
    }
}

impl From<u64> for Ttl {
    fn from(secs: u64) -> Self {
        Ttl::Seconds(secs)
    }
}

impl From<Option<u64>> for Ttl {
    fn from(secs: Option<u64>) -> Self {
        secs.map_or(Ttl::NoExpiry, Ttl::Seconds)
    }
}

/// Sub-second precision is dropped.
impl From<Duration> for Ttl {
    fn from(duration: Duration) -> Self {
        Ttl::Seconds(duration.as_secs())
    }
}

impl TryFrom<TimeDelta> for Ttl {
    type Error = CacheError;

    fn try_from(delta: TimeDelta) -> Result<Self, Self::Error> {
        let secs = delta.num_seconds();
        u64::try_from(secs)
            .map(Ttl::Seconds)
            .map_err(|_| CacheError::InvalidTtl(format!("negative duration of {}s", secs)))
    }
}
