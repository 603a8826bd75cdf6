//! Operation registry and its configuration surface.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{OperationDescriptor, OpsError, Result};

/// Registry of bulk operations, keyed by operation name.
///
/// A registry is assembled once at startup, either from the built-in
/// catalog or from a JSON config file, and is read-only thereafter.
#[derive(Debug, Clone, Default)]
pub struct OperationRegistry {
    operations: HashMap<String, OperationDescriptor>,
}

/// On-disk shape of a registry config file.
#[derive(Debug, Serialize, Deserialize)]
struct RegistryConfig {
    operations: Vec<OperationDescriptor>,
}

impl OperationRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            operations: HashMap::new(),
        }
    }

    /// The built-in catalog of admin bulk operations.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(
            OperationDescriptor::new("delete", "Delete")
                .destructive(true)
                .estimated_ms_per_item(300),
        );
        registry.register(
            OperationDescriptor::new("export", "Export").estimated_ms_per_item(100),
        );
        registry.register(
            OperationDescriptor::new("change_status", "Change status")
                .destructive(true)
                .requires_parameter(true),
        );
        registry.register(
            OperationDescriptor::new("reset_password", "Reset password")
                .destructive(true)
                .estimated_ms_per_item(400),
        );
        registry.register(
            OperationDescriptor::new("deactivate", "Deactivate").destructive(true),
        );
        registry
    }

    /// Register a descriptor.
    ///
    /// If an operation with the same name exists, it is replaced.
    pub fn register(&mut self, descriptor: OperationDescriptor) {
        if self.operations.contains_key(&descriptor.name) {
            warn!("Replacing operation registration: {}", descriptor.name);
        }
        self.operations.insert(descriptor.name.clone(), descriptor);
    }

    /// Look up a descriptor by name.
    pub fn lookup(&self, name: &str) -> Result<&OperationDescriptor> {
        self.operations
            .get(name)
            .ok_or_else(|| OpsError::UnknownOperation(name.to_string()))
    }

    /// Check whether an operation is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.operations.contains_key(name)
    }

    /// Registered operation names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.operations.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Build a registry from a JSON config string.
    ///
    /// Later entries replace earlier ones with the same name.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let config: RegistryConfig = serde_json::from_str(content)?;
        let mut registry = Self::new();
        for descriptor in config.operations {
            registry.register(descriptor);
        }
        Ok(registry)
    }

    /// Load a registry from a JSON config file.
    pub async fn load_from_file(path: &Path) -> Result<Self> {
        let content = tokio::fs::read_to_string(path).await?;
        Self::from_json_str(&content)
    }
}
