//! Etcd Cache - a simple key-value cache over the etcd v2 keys API
//!
//! Cache keys are hashed into sharded store paths; values are stored, read
//! and removed with one HTTP request each, with expiry left to the store.

pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod transport;

pub use cache::{key_to_path, EtcdCache, SimpleCache, Ttl};
pub use config::CacheConfig;
pub use error::{CacheError, Result};
pub use transport::{ReqwestTransport, Transport, TransportResponse};
