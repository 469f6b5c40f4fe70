// src/export/json.rs
use chrono::Utc;
use serde_json::json;
use tracing::info;

use crate::consts::EXPORT_FORMAT_JSON_V1;
use crate::error::Result;
use crate::registry::HashRegistry;

/// Export the full registration ledger to a pretty-printed JSON report.
///
/// Read-only: the report is for display and offline inspection, nothing
/// imports it back.
pub fn export_to_json(registry: &dyn HashRegistry, path: &str) -> Result<()> {
    let records = registry.records()?;

    let documents: Vec<_> = records
        .iter()
        .map(|record| {
            json!({
                "hash": record.hash,
                "uploader": record.uploader,
                "registered_at": record
                    .registered_at
                    .to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
                "registered_at_ms": record.registered_at_millis(),
            })
        })
        .collect();

    let export = json!({
        "export_format": EXPORT_FORMAT_JSON_V1,
        "exported_at": Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
        "exporter_version": env!("CARGO_PKG_VERSION"),
        "total_documents": documents.len(),
        "documents": documents,
    });

    std::fs::write(path, serde_json::to_string_pretty(&export)?)?;
    info!(total = records.len(), path, "exported registry ledger");

    Ok(())
}
