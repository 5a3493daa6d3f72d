//! Atlas document model and record accessors
//!
//! Datasets and platforms are kept as opaque JSON values so that every
//! field passes through the merge untouched. Only `id` (platforms) and
//! `type` (datasets) are ever inspected.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::MergeError;

/// Group name for datasets with no `type` field
pub const MISSING_TYPE: &str = "undefined";

/// An atlas document: the shape shared by both inputs and the merged output
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AtlasDocument {
    /// Dataset records, in document order
    pub datasets: Vec<Value>,
    /// Platform records, in document order
    pub platforms: Vec<Value>,
}

impl AtlasDocument {
    pub fn new(datasets: Vec<Value>, platforms: Vec<Value>) -> Self {
        Self {
            datasets,
            platforms,
        }
    }
}

/// Parse an atlas document from JSON text
///
/// `source` only labels the error message. Both `datasets` and `platforms`
/// must be present as arrays; any other root keys are ignored.
pub fn parse_document(content: &str, source: &str) -> Result<AtlasDocument, MergeError> {
    serde_json::from_str(content).map_err(|e| MergeError::InvalidDocument {
        source_name: source.to_string(),
        reason: e.to_string(),
    })
}

/// Extract the `id` of a platform record
pub fn extract_id(record: &Value) -> Option<&str> {
    record.get("id").and_then(|v| v.as_str())
}

/// Deduplication key of a platform record
///
/// The JSON text of `id`, so `"1"` and `1` stay distinct; `None` only when
/// the record has no `id` at all.
pub fn platform_key(record: &Value) -> Option<String> {
    record.get("id").map(|id| id.to_string())
}

/// Extract the `type` of a dataset record as a grouping key
///
/// Other values, `null` included, are rendered as their JSON text; a
/// missing `type` falls into [`MISSING_TYPE`].
pub fn dataset_type(record: &Value) -> String {
    match record.get("type") {
        Some(Value::String(t)) => t.clone(),
        Some(other) => other.to_string(),
        None => MISSING_TYPE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_document() {
        let content = r#"{
            "datasets": [{"id": "srtm-dem-30m", "type": "elevation"}],
            "platforms": [{"id": "opentopography", "name": "OpenTopography"}],
            "version": 2
        }"#;

        let doc = parse_document(content, "atlas.json").unwrap();
        assert_eq!(doc.datasets.len(), 1);
        assert_eq!(doc.platforms.len(), 1);
        assert_eq!(extract_id(&doc.platforms[0]), Some("opentopography"));
    }

    #[test]
    fn test_parse_document_missing_platforms() {
        let result = parse_document(r#"{"datasets": []}"#, "atlas.json");
        match result {
            Err(MergeError::InvalidDocument { source_name, reason }) => {
                assert_eq!(source_name, "atlas.json");
                assert!(reason.contains("platforms"));
            }
            other => panic!("expected InvalidDocument, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_document_malformed() {
        let result = parse_document("{\"datasets\": [", "broken.json");
        assert!(matches!(result, Err(MergeError::InvalidDocument { .. })));
    }

    #[test]
    fn test_parse_preserves_key_order() {
        let content = r#"{"datasets": [{"type": "sar", "id": "sentinel-1", "bands": 2}], "platforms": []}"#;
        let doc = parse_document(content, "atlas.json").unwrap();

        let keys: Vec<&String> = doc.datasets[0].as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["type", "id", "bands"]);
    }

    #[test]
    fn test_extract_id() {
        assert_eq!(extract_id(&json!({"id": "asi-cosmo"})), Some("asi-cosmo"));
        assert_eq!(extract_id(&json!({"name": "No id"})), None);
        assert_eq!(extract_id(&json!({"id": 7})), None);
        assert_eq!(extract_id(&json!("asi-cosmo")), None);
    }

    #[test]
    fn test_platform_key() {
        assert_eq!(platform_key(&json!({"id": "p1"})), Some("\"p1\"".to_string()));
        assert_eq!(platform_key(&json!({"id": 1})), Some("1".to_string()));
        assert_ne!(platform_key(&json!({"id": "1"})), platform_key(&json!({"id": 1})));
        assert_eq!(platform_key(&json!({"id": null})), Some("null".to_string()));
        assert_eq!(platform_key(&json!({"name": "No id"})), None);
    }

    #[test]
    fn test_dataset_type() {
        assert_eq!(dataset_type(&json!({"type": "lidar"})), "lidar");
        assert_eq!(dataset_type(&json!({"id": "x"})), MISSING_TYPE);
        assert_eq!(dataset_type(&json!({"id": "x"})), "undefined");
        assert_eq!(dataset_type(&json!({"type": null})), "null");
        assert_eq!(dataset_type(&json!({"type": 3})), "3");
    }
}
