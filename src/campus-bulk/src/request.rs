//! Per-invocation bulk request.

use campus_ops::OperationDescriptor;
use serde_json::Value;

use crate::{BulkError, Result};

/// One bulk invocation: an operation, the items to apply it to, and an
/// optional operation-specific parameter.
///
/// Constructed by the caller and not mutated by the engine.
#[derive(Debug, Clone)]
pub struct BulkRequest {
    /// The operation to run, cloned out of the registry.
    pub operation: OperationDescriptor,
    /// Ordered, non-empty target identifiers.
    pub target_ids: Vec<String>,
    /// Present iff `operation.requires_parameter` is set.
    pub parameter: Option<Value>,
}

impl BulkRequest {
    pub fn new(operation: OperationDescriptor, target_ids: Vec<String>) -> Self {
        Self {
            operation,
            target_ids,
            parameter: None,
        }
    }

    pub fn with_parameter(mut self, parameter: Value) -> Self {
        self.parameter = Some(parameter);
        self
    }

    /// Check the preconditions the executor enforces before starting.
    pub fn validate(&self) -> Result<()> {
        if self.target_ids.is_empty() {
            return Err(BulkError::EmptySelection);
        }
        if self.operation.requires_parameter && self.parameter.is_none() {
            return Err(BulkError::MissingParameter(self.operation.name.clone()));
        }
        if !self.operation.requires_parameter && self.parameter.is_some() {
            return Err(BulkError::UnexpectedParameter(self.operation.name.clone()));
        }
        Ok(())
    }
}
