// src/notary.rs
//! Register / verify flows over a hash registry
//!
//! The thin orchestration a front end drives: read the document bytes,
//! digest them, then either claim the digest in the registry or check it
//! against prior registrations. Registration is reserved to the admin role;
//! any principal may verify.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CoreError, Result};
use crate::hasher;
use crate::identity::Principal;
use crate::registry::{DocumentRecord, HashRegistry};

/// Outcome of a registration attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub hash: String,
    /// false means the digest was already claimed; the prior record stands
    pub accepted: bool,
}

/// Outcome of a verification check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verification {
    pub verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uploader: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registered_at: Option<DateTime<Utc>>,
}

impl From<Option<DocumentRecord>> for Verification {
    fn from(record: Option<DocumentRecord>) -> Self {
        match record {
            Some(r) => Self {
                verified: true,
                uploader: Some(r.uploader),
                registered_at: Some(r.registered_at),
            },
            None => Self {
                verified: false,
                uploader: None,
                registered_at: None,
            },
        }
    }
}

/// Claim a digest for raw document bytes on behalf of `principal`
pub fn register_bytes(
    registry: &dyn HashRegistry,
    principal: &Principal,
    bytes: &[u8],
) -> Result<Registration> {
    ensure_admin(principal)?;
    let hash = hasher::sha256_hex(bytes);
    let accepted = registry.register(&hash, &principal.name)?;
    Ok(Registration { hash, accepted })
}

/// Claim a digest for a file on disk
pub fn register_file<P: AsRef<Path>>(
    registry: &dyn HashRegistry,
    principal: &Principal,
    path: P,
) -> Result<Registration> {
    let bytes = std::fs::read(path.as_ref())?;
    register_bytes(registry, principal, &bytes)
}

/// Claim a digest for a browser-style `data:` URL upload payload
pub fn register_data_url(
    registry: &dyn HashRegistry,
    principal: &Principal,
    payload: &str,
) -> Result<Registration> {
    let bytes = hasher::decode_data_url(payload)?;
    register_bytes(registry, principal, &bytes)
}

/// Check raw document bytes against the registry
pub fn verify_bytes(registry: &dyn HashRegistry, bytes: &[u8]) -> Result<Verification> {
    let hash = hasher::sha256_hex(bytes);
    debug!(hash, "verifying digest");
    Ok(registry.lookup(&hash)?.into())
}

/// Check a file on disk against the registry
pub fn verify_file<P: AsRef<Path>>(registry: &dyn HashRegistry, path: P) -> Result<Verification> {
    let bytes = std::fs::read(path.as_ref())?;
    verify_bytes(registry, &bytes)
}

fn ensure_admin(principal: &Principal) -> Result<()> {
    if !principal.is_admin() {
        return Err(CoreError::Forbidden(format!(
            "principal '{}' lacks the admin role required to register documents",
            principal.name
        )));
    }
    Ok(())
}
