//! Configuration Module
//!
//! Describes where the remote keyed store lives and which part of its key
//! namespace this cache instance owns.

use std::env;

/// Default key namespace of the etcd v2 HTTP API.
pub const DEFAULT_KEY_BASE_PATH: &str = "/v2/keys/";

/// Adapter configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults,
/// or built up with the `with_*` methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    /// URL scheme of the store (`http` or `https`)
    pub protocol: String,
    /// Store host name or address
    pub host: String,
    /// Store port
    pub port: u16,
    /// Base path of the store's key namespace
    pub key_base_path: String,
    /// Root prefix isolating this cache's keys from other tenants of the store
    pub root_prefix: String,
}

impl CacheConfig {
    /// Creates a new CacheConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `ETCD_PROTOCOL` - URL scheme (default: http)
    /// - `ETCD_HOST` - Store host (default: 127.0.0.1)
    /// - `ETCD_PORT` - Store port (default: 2379)
    /// - `ETCD_KEY_BASE_PATH` - Key namespace base path (default: /v2/keys/)
    /// - `ETCD_ROOT_PREFIX` - Root prefix for this cache (default: empty)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            protocol: env::var("ETCD_PROTOCOL").unwrap_or(defaults.protocol),
            host: env::var("ETCD_HOST").unwrap_or(defaults.host),
            port: env::var("ETCD_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            key_base_path: env::var("ETCD_KEY_BASE_PATH").unwrap_or(defaults.key_base_path),
            root_prefix: env::var("ETCD_ROOT_PREFIX").unwrap_or(defaults.root_prefix),
        }
    }

    pub fn with_protocol(mut self, protocol: impl Into<String>) -> Self {
        self.protocol = protocol.into();
        self
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_key_base_path(mut self, key_base_path: impl Into<String>) -> Self {
        self.key_base_path = key_base_path.into();
        self
    }

    pub fn with_root_prefix(mut self, root_prefix: impl Into<String>) -> Self {
        self.root_prefix = root_prefix.into();
        self
    }

    // == Key URL ==
    /// Builds the absolute URL of a store path.
    ///
    /// Leading and trailing separators are stripped from the base path, the root
    /// prefix and the store path, and empty pieces are skipped, so the result
    /// never contains `//` after the authority. No percent-encoding is applied.
    pub fn key_url(&self, store_path: &str) -> String {
        let mut url = format!("{}://{}:{}", self.protocol, self.host, self.port);
        for segment in [
            self.key_base_path.as_str(),
            self.root_prefix.as_str(),
            store_path,
        ] {
            let trimmed = segment.trim_matches('/');
            if !trimmed.is_empty() {
                url.push('/');
                url.push_str(trimmed);
            }
        }
        url
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            protocol: "http".to_string(),
            host: "127.0.0.1".to_string(),
            port: 2379,
            key_base_path: DEFAULT_KEY_BASE_PATH.to_string(),
            root_prefix: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = CacheConfig::default();
        assert_eq!(config.protocol, "http");
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 2379);
        assert_eq!(config.key_base_path, "/v2/keys/");
        assert_eq!(config.root_prefix, "");
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("ETCD_PROTOCOL");
        env::remove_var("ETCD_HOST");
        env::remove_var("ETCD_PORT");
        env::remove_var("ETCD_KEY_BASE_PATH");
        env::remove_var("ETCD_ROOT_PREFIX");

        let config = CacheConfig::from_env();
        assert_eq!(config, CacheConfig::default());
    }

    #[test]
    fn test_builder_overrides() {
        let config = CacheConfig::default()
            .with_protocol("https")
            .with_host("etcd.internal")
            .with_port(4001)
            .with_key_base_path("/v2/keys")
            .with_root_prefix("sessions");

        assert_eq!(config.protocol, "https");
        assert_eq!(config.host, "etcd.internal");
        assert_eq!(config.port, 4001);
        assert_eq!(config.root_prefix, "sessions");
    }

    #[test]
    fn test_key_url_with_prefix() {
        let config = CacheConfig::default().with_root_prefix("/app/cache/");
        assert_eq!(
            config.key_url("ab/cd/v"),
            "http://127.0.0.1:2379/v2/keys/app/cache/ab/cd/v"
        );
    }

    #[test]
    fn test_key_url_empty_prefix_has_no_double_separator() {
        let config = CacheConfig::default();
        assert_eq!(
            config.key_url("/ab/cd/v"),
            "http://127.0.0.1:2379/v2/keys/ab/cd/v"
        );
    }

    #[test]
    fn test_key_url_custom_endpoint() {
        let config = CacheConfig::default()
            .with_protocol("https")
            .with_host("10.0.0.5")
            .with_port(443)
            .with_key_base_path("keys")
            .with_root_prefix("tenant-a");
        assert_eq!(
            config.key_url("00/ff/v"),
            "https://10.0.0.5:443/keys/tenant-a/00/ff/v"
        );
    }
}
