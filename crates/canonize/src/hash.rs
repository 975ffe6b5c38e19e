//! SHA256 hashing of canonical text
//!
//! The canonical form exists to feed content addressing, cache keys, and
//! signatures; this module is that last step. Deeply equal values hash
//! identically because their canonical text is byte-identical.

use canonize_core::Value;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fmt::Write;

use crate::canonical::{canonize, canonize_serialize};

/// Hash raw bytes with SHA256.
///
/// Returns a 64-character lowercase hex string.
///
/// # Example
///
/// ```rust
/// use canonize::hash_bytes;
///
/// let hash = hash_bytes(b"Hello, world!");
/// assert_eq!(hash.len(), 64);
/// assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
/// ```
pub fn hash_bytes(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex_encode(&hasher.finalize())
}

/// Hash a string with SHA256, treated as UTF-8 bytes.
pub fn hash_string(s: &str) -> String {
    hash_bytes(s.as_bytes())
}

/// Canonicalize a value and hash the canonical text.
///
/// Infallible: the encoder is total over the supported space.
///
/// # Example
///
/// ```rust
/// use canonize::hash_canonical;
/// use canonize_core::Value;
///
/// let a = Value::from_serialize(&serde_json::json!({"b": 1, "a": 2}));
/// let b = Value::from_serialize(&serde_json::json!({"a": 2, "b": 1}));
///
/// // Insertion order never reaches the digest
/// assert_eq!(hash_canonical(&a), hash_canonical(&b));
/// ```
pub fn hash_canonical(value: &Value) -> String {
    hash_string(&canonize(value))
}

/// Classify a serializable host value, canonicalize, and hash in one step.
pub fn hash_canonical_serialize<T: Serialize>(value: &T) -> String {
    hash_string(&canonize_serialize(value))
}

/// Verify that a hash matches the expected value.
///
/// # Example
///
/// ```rust
/// use canonize::{hash_bytes, verify_hash};
///
/// let data = b"Hello, world!";
/// let hash = hash_bytes(data);
///
/// assert!(verify_hash(data, &hash));
/// assert!(!verify_hash(b"Different data", &hash));
/// ```
pub fn verify_hash(data: &[u8], expected_hash: &str) -> bool {
    constant_time_compare(&hash_bytes(data), expected_hash)
}

/// Validate a SHA256 hash string format.
///
/// Returns `true` for a 64-character hex string.
pub fn is_valid_sha256(hash: &str) -> bool {
    hash.len() == 64 && hash.chars().all(|c| c.is_ascii_hexdigit())
}

/// Constant-time string comparison to prevent timing attacks
fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (x, y) in a.bytes().zip(b.bytes()) {
        result |= x ^ y;
    }
    result == 0
}

/// Convert bytes to lowercase hex
fn hex_encode(bytes: &[u8]) -> String {
    let mut hex = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        write!(hex, "{byte:02x}").expect("writing to a String cannot fail");
    }
    hex
}
