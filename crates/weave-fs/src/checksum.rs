//! SHA-256 checksum utilities
//!
//! Digests are rendered as 64 lowercase hex characters with no prefix, the
//! form embedded in provenance stamps.

use sha2::{Digest, Sha256};

/// Compute the SHA-256 hex digest of raw bytes.
pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}
