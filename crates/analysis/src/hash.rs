//! Content fingerprinting.
//!
//! A string's identity is the SHA-256 digest of its raw UTF-8 bytes,
//! hex-encoded. Normalization never feeds into the hash: two inputs that
//! differ only in case or whitespace are distinct entities.

use sha2::{Digest, Sha256};

/// Hash raw text with SHA-256 and return a lowercase hex digest.
///
/// This is the sole identity key used by the store: callers hash then look
/// up, never compare raw strings.
///
/// # Returns
///
/// A 64-character hexadecimal string representing the SHA-256 digest.
///
/// # Examples
///
/// ```rust
/// use analysis::hash_text;
///
/// let hash = hash_text("hello world");
/// assert_eq!(hash.len(), 64);
///
/// // Deterministic
/// assert_eq!(hash, hash_text("hello world"));
///
/// // Different inputs produce different hashes
/// assert_ne!(hash, hash_text("hello world!"));
/// ```
pub fn hash_text(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    hex::encode(hasher.finalize())
}
