//! Key Mapping Module
//!
//! Turns arbitrary cache keys into sharded store paths.

use sha1::{Digest, Sha1};

use crate::error::{CacheError, Result};

/// Separator between segments of a store path.
pub const PATH_SEPARATOR: char = '/';

/// Fixed leaf under which a key's value lives.
pub const ENTRY_LEAF: &str = "v";

/// Width of each hex segment in a sharded path.
const SEGMENT_WIDTH: usize = 2;

// == Validate Key ==
/// Rejects keys that cannot be used, before anything reaches the network.
pub fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(CacheError::InvalidKey("Key cannot be empty".to_string()));
    }
    Ok(())
}

// == Key To Path ==
/// Maps a key to its sharded store path.
///
/// The lowercase hex SHA-1 of the key's bytes is cut into two-character
/// segments joined by `/`, e.g. `"abc"` maps to `a9/99/3e/.../9d`. Entries
/// written by other clients of the same store rely on this exact layout.
pub fn key_to_path(key: &str) -> String {
    let digest = hex::encode(Sha1::digest(key.as_bytes()));

    let mut path = String::with_capacity(digest.len() + digest.len() / SEGMENT_WIDTH);
    for (i, c) in digest.chars().enumerate() {
        if i > 0 && i % SEGMENT_WIDTH == 0 {
            path.push(PATH_SEPARATOR);
        }
        path.push(c);
    }
    path
}

/// Store path of the value leaf for `key`.
pub fn entry_path(key: &str) -> String {
    format!("{}{}{}", key_to_path(key), PATH_SEPARATOR, ENTRY_LEAF)
}
