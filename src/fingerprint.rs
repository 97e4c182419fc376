//! Fingerprint assembly
//!
//! Builds the immutable result record handed back to callers: the verbatim
//! input, the canonical form, the extracted parameters and the SHA-256 of
//! the canonical form. Assembly never fails.

use serde::Serialize;
use sha2::{Digest, Sha256};

/// The immutable record returned by a successful normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizeResult {
    /// The input exactly as received.
    pub original: String,
    /// The canonical single-line form.
    pub normalized: String,
    /// Textual values of the replaced literals, in left-to-right order.
    pub params: Vec<String>,
    /// Lowercase hex SHA-256 of the UTF-8 bytes of `normalized`.
    pub hash: String,
}

/// Lowercase hex SHA-256 of a string's UTF-8 bytes.
pub fn sha256_hex(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Composes the result record, hashing the canonical form.
pub fn assemble(original: &str, normalized: String, params: Vec<String>) -> NormalizeResult {
    let hash = sha256_hex(&normalized);
    NormalizeResult {
        original: original.to_string(),
        normalized,
        params,
        hash,
    }
}
