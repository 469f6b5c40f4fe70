// src/config/mod.rs
//! Configuration system for document-registry
//!
//! Central, lazy-loaded global config with TOML + env overrides.

pub use app::{load, Config, Features, Storage, StorageBackend};

mod app;
mod defaults;
