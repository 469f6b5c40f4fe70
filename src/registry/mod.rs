// src/registry/mod.rs
//! Hash registry — first-registration records per document digest
//!
//! The registry is the single source of truth for "has this document been
//! registered, and by whom". Backends are injected behind the
//! [`HashRegistry`] trait so callers never depend on a concrete store:
//! a process-lifetime in-memory map, or an embedded SQLite database.

mod memory;
mod sqlite;

pub use memory::MemoryRegistry;
pub use sqlite::SqliteRegistry;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::{Config, StorageBackend};
use crate::error::Result;

/// First-registration metadata for one document digest
///
/// At most one record exists per digest, and a record is never updated or
/// removed once written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub hash: String,
    pub uploader: String,
    pub registered_at: DateTime<Utc>,
}

impl DocumentRecord {
    /// Registration instant in milliseconds since the Unix epoch
    pub fn registered_at_millis(&self) -> i64 {
        self.registered_at.timestamp_millis()
    }
}

/// Registry-wide stats for display and reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryInfo {
    pub hash_count: u64,
}

/// Store interface for registration records
///
/// `register` is first-writer-wins per digest: concurrent attempts on the
/// same digest resolve so that exactly one succeeds. There is no update and
/// no delete — the registry models an append-only ledger.
pub trait HashRegistry: Send + Sync {
    /// Record `uploader` as the first registrant of `hash`.
    ///
    /// Returns true if a new record was created, false if the digest was
    /// already registered. The existing record is left untouched either way.
    fn register(&self, hash: &str, uploader: &str) -> Result<bool>;

    /// Fetch the record for `hash`, if any. Absence is not an error.
    fn lookup(&self, hash: &str) -> Result<Option<DocumentRecord>>;

    /// Number of distinct registered digests
    fn count(&self) -> Result<u64>;

    /// Snapshot of all records, oldest registration first
    fn records(&self) -> Result<Vec<DocumentRecord>>;

    fn info(&self) -> Result<RegistryInfo> {
        Ok(RegistryInfo {
            hash_count: self.count()?,
        })
    }
}

/// Build the registry backend selected by `config`
///
/// The sqlite backend only touches disk when file-backed registries are
/// enabled; otherwise it opens an in-memory database, keeping the default
/// lifecycle identical to the map backend.
pub fn open_registry(config: &Config) -> Result<Box<dyn HashRegistry>> {
    match config.storage.backend {
        StorageBackend::Memory => Ok(Box::new(MemoryRegistry::new())),
        StorageBackend::Sqlite if config.features.allow_file_backed_registry => {
            Ok(Box::new(SqliteRegistry::open(&config.storage.registry_db)?))
        }
        StorageBackend::Sqlite => Ok(Box::new(SqliteRegistry::open_in_memory()?)),
    }
}
