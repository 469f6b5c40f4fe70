// src/consts.rs
//! Shared constants — digest format and export defaults

/// Hex length of a SHA-256 digest
pub const SHA256_HEX_LEN: usize = 64;

/// Marker separating a data-URL header from its base64 content
pub const DATA_URL_BASE64_MARKER: &str = ";base64,";

/// Format tag stamped into JSON ledger reports
pub const EXPORT_FORMAT_JSON_V1: &str = "document-registry-v1";
