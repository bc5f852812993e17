//! Token digest utilities.
//!
//! Session rows store a SHA-256 digest of the issued JWT rather than the
//! token itself, so a database leak never exposes usable credentials.

use sha2::{Digest, Sha256};

/// Computes the hex-encoded SHA-256 digest of the given token.
pub fn sha256_hex(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hex::encode(hasher.finalize())
}
