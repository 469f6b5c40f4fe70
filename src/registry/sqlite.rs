// src/registry/sqlite.rs
//! Embedded SQLite registry backend
//!
//! One `documents` table keyed by digest. `INSERT OR IGNORE` against the
//! primary key is the per-digest compare-and-set: the first writer's row
//! stands, later writers change nothing.

use std::path::Path;
use std::sync::Mutex;

use chrono::{TimeZone, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use tracing::{debug, info};

use crate::error::Result;
use crate::registry::{DocumentRecord, HashRegistry};

pub struct SqliteRegistry {
    conn: Mutex<Connection>,
}

impl SqliteRegistry {
    /// Open a registry database at `path`, creating the schema if needed
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        Self::with_connection(Connection::open(path.as_ref())?)
    }

    /// Open a registry that lives only as long as the process
    pub fn open_in_memory() -> Result<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS documents (
                hash          TEXT PRIMARY KEY,
                uploader      TEXT NOT NULL,
                registered_at INTEGER NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_registered_at ON documents(registered_at);
            "#,
        )?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }
}

fn record_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<DocumentRecord> {
    let millis: i64 = row.get(2)?;
    let registered_at = Utc
        .timestamp_millis_opt(millis)
        .single()
        .ok_or(rusqlite::Error::IntegralValueOutOfRange(2, millis))?;
    Ok(DocumentRecord {
        hash: row.get(0)?,
        uploader: row.get(1)?,
        registered_at,
    })
}

impl HashRegistry for SqliteRegistry {
    fn register(&self, hash: &str, uploader: &str) -> Result<bool> {
        let conn = self.conn.lock().unwrap();
        let inserted = conn.execute(
            "INSERT OR IGNORE INTO documents (hash, uploader, registered_at)
             VALUES (?1, ?2, ?3)",
            params![hash, uploader, Utc::now().timestamp_millis()],
        )?;
        if inserted == 1 {
            info!(hash, uploader, "digest registered");
        } else {
            debug!(hash, "digest already registered");
        }
        Ok(inserted == 1)
    }

    fn lookup(&self, hash: &str) -> Result<Option<DocumentRecord>> {
        let conn = self.conn.lock().unwrap();
        let record = conn
            .query_row(
                "SELECT hash, uploader, registered_at FROM documents WHERE hash = ?1",
                [hash],
                record_from_row,
            )
            .optional()?;
        Ok(record)
    }

    fn count(&self) -> Result<u64> {
        let conn = self.conn.lock().unwrap();
        let n: i64 = conn.query_row("SELECT COUNT(*) FROM documents", [], |r| r.get(0))?;
        Ok(n as u64)
    }

    fn records(&self) -> Result<Vec<DocumentRecord>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(
            "SELECT hash, uploader, registered_at FROM documents
             ORDER BY registered_at, hash",
        )?;
        let rows = stmt.query_map([], record_from_row)?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }
        Ok(records)
    }
}
