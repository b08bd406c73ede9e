//! Wire models for the etcd v2 keys API
//!
//! This module defines the form body sent on writes and the JSON envelope
//! returned on reads.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::WriteForm;
pub use responses::{KeyResponse, Node};
