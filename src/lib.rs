// src/lib.rs
//! document-registry — content-hash document registration and verification
//!
//! Features:
//! - SHA-256 document digests over exact raw bytes
//! - First-writer-wins hash registry (in-memory map or embedded SQLite)
//! - Register / verify flows with principal role gating
//! - JSON ledger export

pub mod config;
pub mod consts;
pub mod error;
pub mod export;
pub mod hasher;
pub mod identity;
pub mod notary;
pub mod registry;

// Re-export everything users need at the crate root
pub use config::load as load_config;
pub use error::{CoreError, Result as CoreResult};
pub use export::export_to_json;
pub use hasher::{hash_file, sha256_hex};
pub use identity::{login, Principal, Role};
pub use notary::{register_file, verify_file, Registration, Verification};
pub use registry::{
    open_registry, DocumentRecord, HashRegistry, MemoryRegistry, RegistryInfo, SqliteRegistry,
};
