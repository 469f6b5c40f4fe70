// src/config/defaults.rs
use crate::config::app::{Features, Storage, StorageBackend};

pub fn default_storage() -> Storage {
    Storage {
        backend: StorageBackend::Memory,
        registry_db: default_registry_db(),
    }
}

pub fn default_features() -> Features {
    Features {
        allow_file_backed_registry: false,
    }
}

/// Registry database path under the platform data dir, with a
/// project-local fallback
pub fn default_registry_db() -> String {
    dirs::data_local_dir()
        .map(|dir| dir.join("document-registry").join("registry.db"))
        .and_then(|path| path.to_str().map(str::to_owned))
        .unwrap_or_else(|| "tests/data/registry.db".into())
}
