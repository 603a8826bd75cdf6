//! Operation descriptors.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Metadata for a single bulk operation.
///
/// Descriptors are static configuration: they are loaded into a registry
/// once and never mutated while a run is in flight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationDescriptor {
    /// Unique operation key, e.g. `"delete"`.
    pub name: String,
    /// Human-readable label for dialogs and notifications.
    pub display_name: String,
    /// Destructive operations prompt for confirmation before running.
    #[serde(default)]
    pub destructive: bool,
    /// Whether the operation needs a parameter (e.g. a target status).
    #[serde(default)]
    pub requires_parameter: bool,
    /// Rough per-item duration in milliseconds, for UI time estimates only.
    #[serde(default = "default_ms_per_item")]
    pub estimated_ms_per_item: u64,
}

fn default_ms_per_item() -> u64 {
    200
}

impl OperationDescriptor {
    pub fn new(name: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
            destructive: false,
            requires_parameter: false,
            estimated_ms_per_item: default_ms_per_item(),
        }
    }

    pub fn destructive(mut self, enabled: bool) -> Self {
        self.destructive = enabled;
        self
    }

    pub fn requires_parameter(mut self, enabled: bool) -> Self {
        self.requires_parameter = enabled;
        self
    }

    pub fn estimated_ms_per_item(mut self, ms: u64) -> Self {
        self.estimated_ms_per_item = ms;
        self
    }

    /// Projected wall-clock duration for a selection of `count` items.
    ///
    /// An estimate for progress dialogs, not a scheduling guarantee.
    pub fn estimated_duration(&self, count: usize) -> Duration {
        Duration::from_millis(self.estimated_ms_per_item.saturating_mul(count as u64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let op = OperationDescriptor::new("change_status", "Change status")
            .requires_parameter(true)
            .estimated_ms_per_item(150);

        assert_eq!(op.name, "change_status");
        assert!(!op.destructive);
        assert!(op.requires_parameter);
        assert_eq!(op.estimated_ms_per_item, 150);
    }

    #[test]
    fn test_estimated_duration() {
        let op = OperationDescriptor::new("export", "Export").estimated_ms_per_item(100);
        assert_eq!(op.estimated_duration(50), Duration::from_millis(5000));
        assert_eq!(op.estimated_duration(0), Duration::ZERO);
    }

    #[test]
    fn test_deserialize_defaults() {
        let op: OperationDescriptor =
            serde_json::from_str(r#"{"name": "export", "display_name": "Export"}"#).unwrap();
        assert!(!op.destructive);
        assert!(!op.requires_parameter);
        assert_eq!(op.estimated_ms_per_item, 200);
    }
}
