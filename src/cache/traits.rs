//! SimpleCache trait definition.

use async_trait::async_trait;
use tracing::debug;

use crate::cache::Ttl;
use crate::error::Result;

/// Uniform key-value cache contract.
///
/// Bulk operations are provided in terms of the single-key ones: keys are
/// processed one after another, nothing is batched and nothing is rolled
/// back.
#[async_trait]
pub trait SimpleCache: Send + Sync {
    /// Fetches a value, or `default` when the key is absent.
    async fn get(&self, key: &str, default: Option<String>) -> Result<Option<String>>;

    /// Stores a value. Returns false when the store refuses the write.
    async fn set(&self, key: &str, value: &str, ttl: Ttl) -> Result<bool>;

    /// Removes a value. Returns false when the store refuses the delete.
    async fn delete(&self, key: &str) -> Result<bool>;

    /// Wipes every key of the cache.
    async fn clear(&self) -> bool;

    /// Checks whether a key is present.
    ///
    /// Only suitable for cache warming: the answer can be stale by the time
    /// the caller acts on it.
    async fn has(&self, key: &str) -> Result<bool>;

    /// Fetches several values, in input order.
    ///
    /// A key repeated in `keys` appears once, at its first position. Any error
    /// from `get` aborts the batch.
    async fn get_multiple(
        &self,
        keys: &[&str],
        default: Option<String>,
    ) -> Result<Vec<(String, Option<String>)>> {
        let mut values: Vec<(String, Option<String>)> = Vec::with_capacity(keys.len());
        for key in keys {
            if values.iter().any(|(seen, _)| seen == key) {
                continue;
            }
            let value = self.get(key, default.clone()).await?;
            values.push((key.to_string(), value));
        }
        debug!(requested = keys.len(), returned = values.len(), "get_multiple done");
        Ok(values)
    }

    /// Stores several values with a shared TTL.
    ///
    /// Returns true whatever the individual outcomes; only errors that `set`
    /// itself raises stop the batch.
    async fn set_multiple(&self, values: &[(&str, &str)], ttl: Ttl) -> Result<bool> {
        let mut refused = 0usize;
        for (key, value) in values {
            if !self.set(key, value, ttl).await? {
                refused += 1;
            }
        }
        debug!(total = values.len(), refused, "set_multiple done");
        Ok(true)
    }

    /// Removes several values.
    ///
    /// Returns true whatever the individual outcomes, like `set_multiple`.
    async fn delete_multiple(&self, keys: &[&str]) -> Result<bool> {
        let mut refused = 0usize;
        for key in keys {
            if !self.delete(key).await? {
                refused += 1;
            }
        }
        debug!(total = keys.len(), refused, "delete_multiple done");
        Ok(true)
    }
}
