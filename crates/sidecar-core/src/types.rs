use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;
use uuid::Uuid;

/// One instruction queued for a sidecar, targeting a collector process it
/// manages (e.g. `{"start": true}` for a filebeat collector).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectorAction {
    pub collector_id: String,
    #[serde(default)]
    pub properties: BTreeMap<String, JsonValue>,
}

impl CollectorAction {
    pub fn new(collector_id: impl Into<String>) -> Self {
        Self { collector_id: collector_id.into(), properties: BTreeMap::new() }
    }

    pub fn with_property(mut self, key: impl Into<String>, value: JsonValue) -> Self {
        self.properties.insert(key.into(), value);
        self
    }

    /// An action is well-formed when it names a collector.
    pub fn is_valid(&self) -> bool {
        !self.collector_id.trim().is_empty()
    }
}

/// The queued action document for one sidecar: an ordered list of
/// [`CollectorAction`] plus the document identity the store keys on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectorActions {
    pub id: String,
    pub sidecar_id: String,
    pub created_at: DateTime<Utc>,
    pub actions: Vec<CollectorAction>,
}

impl CollectorActions {
    /// Build a fresh document for a sidecar that has none yet.
    pub fn create(sidecar_id: impl Into<String>, actions: Vec<CollectorAction>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            sidecar_id: sidecar_id.into(),
            created_at: Utc::now(),
            actions,
        }
    }

    /// Rebuild an existing document with a replacement action list, keeping
    /// its id stable across updates.
    pub fn replace_actions(
        id: impl Into<String>,
        sidecar_id: impl Into<String>,
        actions: Vec<CollectorAction>,
    ) -> Self {
        Self {
            id: id.into(),
            sidecar_id: sidecar_id.into(),
            created_at: Utc::now(),
            actions,
        }
    }
}

/// Sidecar ids are opaque strings; the only structure imposed anywhere is
/// that the trimmed form must be non-empty.
pub fn is_valid_sidecar_id(sidecar_id: &str) -> bool {
    !sidecar_id.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn action_serde_uses_wire_field_names() {
        let action = CollectorAction::new("collector-1").with_property("start", json!(true));
        let value = serde_json::to_value(&action).unwrap();
        assert_eq!(value, json!({"collector_id": "collector-1", "properties": {"start": true}}));
    }

    #[test]
    fn action_without_properties_deserializes() {
        let action: CollectorAction =
            serde_json::from_value(json!({"collector_id": "collector-1"})).unwrap();
        assert!(action.properties.is_empty());
        assert!(action.is_valid());
    }

    #[test]
    fn blank_collector_id_is_invalid() {
        assert!(!CollectorAction::new("  ").is_valid());
        assert!(!CollectorAction::new("").is_valid());
    }

    #[test]
    fn sidecar_id_validation_trims() {
        assert!(is_valid_sidecar_id("sc-1"));
        assert!(!is_valid_sidecar_id(""));
        assert!(!is_valid_sidecar_id("   "));
    }

    #[test]
    fn replace_keeps_id_and_order() {
        let first = CollectorActions::create("sc-1", vec![CollectorAction::new("a")]);
        let replaced = CollectorActions::replace_actions(
            first.id.clone(),
            "sc-1",
            vec![CollectorAction::new("b"), CollectorAction::new("c")],
        );
        assert_eq!(replaced.id, first.id);
        let ids: Vec<_> = replaced.actions.iter().map(|a| a.collector_id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c"]);
    }
}
