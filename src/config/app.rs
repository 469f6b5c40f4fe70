// src/config/app.rs
use super::defaults::*;
use serde::Deserialize;
use std::sync::OnceLock;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub storage: Storage,
    pub features: Features,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Storage {
    pub backend: StorageBackend,
    pub registry_db: String,
}

/// Registry backends selectable from config
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Memory,
    Sqlite,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Features {
    pub allow_file_backed_registry: bool,
}

static CONFIG: OnceLock<Config> = OnceLock::new();

pub fn load() -> &'static Config {
    CONFIG.get_or_init(|| {
        let config_path =
            std::env::var("DRG_CONFIG").unwrap_or_else(|_| "dev-config.toml".to_string());

        let mut conf = if std::path::Path::new(&config_path).exists() {
            let content =
                std::fs::read_to_string(&config_path).expect("Failed to read config file");
            toml::from_str(&content).expect("Invalid TOML in config file")
        } else {
            tracing::debug!(path = %config_path, "config file not found, using defaults");
            Config {
                storage: default_storage(),
                features: default_features(),
            }
        };

        if let Ok(path) = std::env::var("DRG_REGISTRY_DB") {
            conf.storage.registry_db = path;
        }

        conf
    })
}
