// src/hasher.rs
//! Content hashing for document identity
//!
//! A document's identity is the SHA-256 digest of its exact raw bytes.
//! Filename, MIME type, and upload time never influence the digest, so the
//! same content always resolves to the same registry key and the digest
//! matches what external sha256 tools produce for the file.

use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use sha2::{Digest, Sha256};

use crate::consts::DATA_URL_BASE64_MARKER;
use crate::error::{CoreError, Result};

/// Hex-encoded SHA-256 digest of a byte slice
pub fn sha256_hex(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

/// Hash a file's full content
///
/// Reads the file into memory in one pass, then digests the raw bytes.
pub fn hash_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let bytes = std::fs::read(path.as_ref())?;
    Ok(sha256_hex(&bytes))
}

/// Decode a browser-style `data:` URL payload into raw bytes
///
/// Upload payloads arrive as `data:<mime>;base64,<content>`. Digests are
/// computed over the decoded bytes, not the base64 text rendering.
pub fn decode_data_url(payload: &str) -> Result<Vec<u8>> {
    let rest = payload
        .strip_prefix("data:")
        .ok_or(CoreError::Payload("missing data: prefix"))?;
    let (_mime, encoded) = rest
        .split_once(DATA_URL_BASE64_MARKER)
        .ok_or(CoreError::Payload("missing base64 marker"))?;
    Ok(STANDARD.decode(encoded)?)
}

/// Hash the decoded content of a `data:` URL payload
pub fn hash_data_url(payload: &str) -> Result<String> {
    Ok(sha256_hex(&decode_data_url(payload)?))
}
