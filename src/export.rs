//! JSON export of the current snapshot and reference data.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use coe_metrics::reference::{self, GLOBAL_REGIONS};
use coe_metrics::{MetricKind, MetricsSnapshot};

/// Build the export document.
///
/// ```json
/// {
///   "source": "...",
///   "snapshot": { "system_uptime": 99.75, ... },
///   "formatted": { "system_uptime": "99.75%", ... },
///   "reference": { "performance_trends": [...], "resource_distribution": [...], "global_regions": 47 }
/// }
/// ```
pub fn build(snapshot: &MetricsSnapshot, source: &str) -> serde_json::Value {
    let formatted: serde_json::Map<String, serde_json::Value> = MetricKind::ALL
        .iter()
        .map(|&kind| {
            (
                kind.key().to_string(),
                serde_json::json!(kind.format(snapshot.value(kind))),
            )
        })
        .collect();

    serde_json::json!({
        "source": source,
        "snapshot": snapshot,
        "formatted": formatted,
        "reference": {
            "performance_trends": reference::performance_trends(),
            "resource_distribution": reference::resource_distribution(),
            "global_regions": GLOBAL_REGIONS,
        },
    })
}

/// Write an export document as pretty JSON.
pub fn write(path: &Path, document: &serde_json::Value) -> Result<()> {
    let json = serde_json::to_string_pretty(document)?;
    let mut file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    file.write_all(json.as_bytes())?;
    tracing::info!(path = %path.display(), "exported metrics");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use coe_metrics::{FixedSource, MetricsGenerator};

    #[test]
    fn test_export_document_shape() {
        let snapshot = MetricsGenerator::new(FixedSource::new(0.5)).generate();
        let doc = build(&snapshot, "simulated every 3s");

        assert_eq!(doc["source"], "simulated every 3s");
        assert_eq!(doc["snapshot"]["system_uptime"], 99.75);
        assert_eq!(doc["formatted"]["response_time"], "175 ms");
        assert_eq!(doc["reference"]["global_regions"], 47);
        assert_eq!(doc["reference"]["performance_trends"][0]["label"], "Jan");
        assert_eq!(doc["reference"]["resource_distribution"][2]["percent"], 25);
    }

    #[test]
    fn test_reference_section_is_stable() {
        let snapshot = MetricsGenerator::new(FixedSource::new(0.1)).generate();
        let a = build(&snapshot, "a");
        let b = build(&snapshot, "a");
        assert_eq!(
            serde_json::to_vec(&a["reference"]).unwrap(),
            serde_json::to_vec(&b["reference"]).unwrap()
        );
    }

    #[test]
    fn test_write_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        let snapshot = MetricsGenerator::new(FixedSource::new(0.5)).generate();

        write(&path, &build(&snapshot, "test")).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"active_users\": 2750"));
    }
}
