// src/error.rs
//! Public error type for the entire crate

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Sql(#[from] rusqlite::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Base64 decode failed: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("Invalid upload payload: {0}")]
    Payload(&'static str),

    #[error("Operation not permitted: {0}")]
    Forbidden(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
