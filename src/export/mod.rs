// src/export/mod.rs
//! Export utilities for the registration ledger
//!
//! JSON only for now.

pub use json::export_to_json;

pub mod json;
