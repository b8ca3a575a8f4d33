//! Artifact catalog loading
//!
//! The catalog is a JSON array of `{"group_id": ..., "artifact_id": ...}`
//! objects. Order is preserved; unusable entries are skipped with a warning.

use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::ConfigError;
use crate::version::types::ArtifactId;

#[derive(Debug, Deserialize)]
struct CatalogEntry {
    #[serde(default, alias = "groupId")]
    group_id: Option<String>,
    #[serde(default, alias = "artifactId")]
    artifact_id: Option<String>,
}

/// Load the ordered list of artifacts to check
///
/// Fails only when the file cannot be read or is not a JSON array.
pub fn load_catalog(path: &Path) -> Result<Vec<ArtifactId>, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let entries: Vec<Value> =
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    let artifacts = parse_entries(entries);
    debug!("Loaded {} artifacts from {:?}", artifacts.len(), path);

    Ok(artifacts)
}

fn parse_entries(entries: Vec<Value>) -> Vec<ArtifactId> {
    entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| {
            let entry = serde_json::from_value::<CatalogEntry>(value)
                .inspect_err(|e| warn!("Skipping catalog entry #{}: {}", index, e))
                .ok()?;

            let artifact = ArtifactId::new(
                entry.group_id.unwrap_or_default(),
                entry.artifact_id.unwrap_or_default(),
            );
            if artifact.is_none() {
                warn!(
                    "Skipping catalog entry #{}: missing group_id or artifact_id",
                    index
                );
            }
            artifact
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn parse_entries_keeps_order_and_skips_incomplete_entries() {
        let entries = vec![
            json!({"group_id": "org.example", "artifact_id": "lib"}),
            json!({"group_id": "org.example"}),
            json!({"artifact_id": "orphan"}),
            json!({"group_id": "", "artifact_id": "blank-group"}),
            json!("not an object"),
            json!({"groupId": "com.acme", "artifactId": "core"}),
        ];

        let artifacts = parse_entries(entries);

        assert_eq!(
            artifacts,
            vec![
                ArtifactId::new("org.example", "lib").unwrap(),
                ArtifactId::new("com.acme", "core").unwrap(),
            ]
        );
    }

    #[test]
    fn load_catalog_reads_json_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("artifacts.json");
        std::fs::write(
            &path,
            r#"[
                {"group_id": "org.apache.commons", "artifact_id": "commons-lang3"},
                {"group_id": "com.google.guava", "artifact_id": "guava"}
            ]"#,
        )
        .unwrap();

        let artifacts = load_catalog(&path).unwrap();

        assert_eq!(artifacts.len(), 2);
        assert_eq!(artifacts[0].to_string(), "org.apache.commons:commons-lang3");
        assert_eq!(artifacts[1].to_string(), "com.google.guava:guava");
    }

    #[test]
    fn load_catalog_fails_when_file_is_missing() {
        let temp_dir = TempDir::new().unwrap();

        let result = load_catalog(&temp_dir.path().join("artifacts.json"));

        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn load_catalog_fails_when_document_is_not_an_array() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("artifacts.json");
        std::fs::write(&path, r#"{"group_id": "org.example"}"#).unwrap();

        let result = load_catalog(&path);

        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }
}
