//! Cache Module
//!
//! Maps cache keys onto a remote etcd v2 key space and exposes it through
//! the `SimpleCache` contract.

mod key;
mod store;
mod traits;
mod ttl;


// Re-export public types
pub use key::{entry_path, key_to_path, validate_key, ENTRY_LEAF, PATH_SEPARATOR};
pub use store::EtcdCache;
pub use traits::SimpleCache;
pub use ttl::Ttl;
