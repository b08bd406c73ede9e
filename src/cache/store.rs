//! Cache Store Module
//!
//! Adapter exposing an etcd v2 keys API as a `SimpleCache`.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::cache::{entry_path, key_to_path, validate_key, SimpleCache, Ttl};
use crate::config::CacheConfig;
use crate::error::{CacheError, Result};
use crate::models::{KeyResponse, WriteForm};
use crate::transport::{ReqwestTransport, Transport, TransportResponse};

// == Etcd Cache ==
/// Cache backed by a remote etcd v2 key space.
///
/// Holds no state besides its configuration and transport. Every operation
/// is one request (two for a hit on `get`), attempted exactly once.
#[derive(Debug, Clone)]
pub struct EtcdCache<T = ReqwestTransport> {
    transport: T,
    config: CacheConfig,
}

impl EtcdCache<ReqwestTransport> {
    /// Creates a cache talking to the configured store over a default reqwest client.
    pub fn from_config(config: CacheConfig) -> Self {
        Self::new(ReqwestTransport::new(), config)
    }

    /// Creates a cache from `ETCD_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_config(CacheConfig::from_env())
    }
}

impl<T: Transport> EtcdCache<T> {
    // == Constructor ==
    /// Creates a new EtcdCache.
    ///
    /// # Arguments
    /// * `transport` - HTTP client used for every request
    /// * `config` - Location of the store and root prefix of this cache
    pub fn new(transport: T, config: CacheConfig) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Mutable access to the configuration.
    ///
    /// Changes apply to the next operation; keys written under the previous
    /// settings are not moved.
    pub fn config_mut(&mut self) -> &mut CacheConfig {
        &mut self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Sharded store path of `key`, see [`key_to_path`].
    pub fn key_to_path(key: &str) -> String {
        key_to_path(key)
    }

    /// Absolute URL of the value leaf for `key`.
    pub fn entry_url(&self, key: &str) -> Result<String> {
        validate_key(key)?;
        Ok(self.config.key_url(&entry_path(key)))
    }

    /// Folds a refused write or delete into `false`.
    fn acknowledged(op: &str, key: &str, result: Result<TransportResponse>) -> Result<bool> {
        match result.and_then(TransportResponse::error_for_status) {
            Ok(_) => Ok(true),
            Err(err) if err.is_rejection() => {
                warn!(op, key, error = %err, "store refused request");
                Ok(false)
            }
            Err(err) => Err(err),
        }
    }
}

#[async_trait]
impl<T: Transport> SimpleCache for EtcdCache<T> {
    // == Get ==
    /// Retrieves a value by key.
    ///
    /// Absent keys cost a single HEAD and yield `default`. A present key whose
    /// body lacks `node.value` is an error, not a miss.
    async fn get(&self, key: &str, default: Option<String>) -> Result<Option<String>> {
        if !self.has(key).await? {
            return Ok(default);
        }

        let url = self.entry_url(key)?;
        debug!(key, url = %url, "reading entry");
        let response = self.transport.get(&url).await?.error_for_status()?;
        let value = KeyResponse::from_slice(&response.body)?.into_value()?;
        Ok(Some(value))
    }

    // == Set ==
    /// Stores a value, overwriting any previous one.
    ///
    /// # Arguments
    /// * `key` - The key to store
    /// * `value` - The value to store
    /// * `ttl` - Expiry forwarded to the store
    async fn set(&self, key: &str, value: &str, ttl: Ttl) -> Result<bool> {
        let url = self.entry_url(key)?;
        let form = WriteForm::new(value, ttl);
        debug!(key, url = %url, ttl = ?form.ttl, "writing entry");
        Self::acknowledged("set", key, self.transport.put_form(&url, &form).await)
    }

    // == Delete ==
    async fn delete(&self, key: &str) -> Result<bool> {
        let url = self.entry_url(key)?;
        debug!(key, url = %url, "deleting entry");
        Self::acknowledged("delete", key, self.transport.delete(&url).await)
    }

    // == Clear ==
    /// Always false: the keys API has no single request that drops a whole
    /// prefix, and nothing is attempted in its place.
    async fn clear(&self) -> bool {
        debug!(root_prefix = %self.config.root_prefix, "clear is not supported");
        false
    }

    // == Has ==
    /// True only on a 200 answer to a HEAD; 404 is a plain miss and every
    /// other error status is raised.
    async fn has(&self, key: &str) -> Result<bool> {
        let url = self.entry_url(key)?;
        debug!(key, url = %url, "checking entry");
        let response = self.transport.head(&url).await?;

        match response.status {
            200 => Ok(true),
            404 => Ok(false),
            _ => {
                response.error_for_status()?;
                Ok(false)
            }
        }
    }
}
