// src/registry/memory.rs
//! In-memory registry backend
//!
//! Process-lifetime map from digest to record: empty at startup, entries
//! added only by successful registration, never removed.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::Utc;
use tracing::{debug, info};

use crate::error::Result;
use crate::registry::{DocumentRecord, HashRegistry};

#[derive(Debug, Default)]
pub struct MemoryRegistry {
    records: Mutex<HashMap<String, DocumentRecord>>,
}

impl MemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HashRegistry for MemoryRegistry {
    fn register(&self, hash: &str, uploader: &str) -> Result<bool> {
        // One lock spans the existence check and the insert: a register
        // race on the same digest has exactly one winner.
        let mut records = self.records.lock().unwrap();
        if records.contains_key(hash) {
            debug!(hash, "digest already registered");
            return Ok(false);
        }
        records.insert(
            hash.to_owned(),
            DocumentRecord {
                hash: hash.to_owned(),
                uploader: uploader.to_owned(),
                registered_at: Utc::now(),
            },
        );
        info!(hash, uploader, "digest registered");
        Ok(true)
    }

    fn lookup(&self, hash: &str) -> Result<Option<DocumentRecord>> {
        Ok(self.records.lock().unwrap().get(hash).cloned())
    }

    fn count(&self) -> Result<u64> {
        Ok(self.records.lock().unwrap().len() as u64)
    }

    fn records(&self) -> Result<Vec<DocumentRecord>> {
        let mut all: Vec<DocumentRecord> =
            self.records.lock().unwrap().values().cloned().collect();
        all.sort_by(|a, b| {
            a.registered_at
                .cmp(&b.registered_at)
                .then_with(|| a.hash.cmp(&b.hash))
        });
        Ok(all)
    }
}
