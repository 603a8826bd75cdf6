//! Confirmation policy for bulk operations.

use crate::OperationDescriptor;

/// Decides whether a bulk run needs explicit user confirmation.
///
/// This is a pure decision function; the confirmation dialog itself is an
/// external collaborator.
#[derive(Debug, Clone)]
pub struct ConfirmationPolicy {
    /// Selection size at which destructive operations start prompting.
    destructive_threshold: usize,
}

impl Default for ConfirmationPolicy {
    fn default() -> Self {
        Self {
            destructive_threshold: 1,
        }
    }
}

impl ConfirmationPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the selection size at which destructive operations prompt.
    pub fn destructive_threshold(mut self, count: usize) -> Self {
        self.destructive_threshold = count;
        self
    }

    /// Whether running `descriptor` over `target_count` items needs
    /// confirmation first.
    ///
    /// Non-destructive operations never prompt.
    pub fn requires_confirmation(
        &self,
        descriptor: &OperationDescriptor,
        target_count: usize,
    ) -> bool {
        descriptor.destructive && target_count >= self.destructive_threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destructive_always_prompts() {
        let policy = ConfirmationPolicy::new();
        let delete = OperationDescriptor::new("delete", "Delete").destructive(true);

        assert!(policy.requires_confirmation(&delete, 1));
        assert!(policy.requires_confirmation(&delete, 500));
    }

    #[test]
    fn test_non_destructive_never_prompts() {
        let policy = ConfirmationPolicy::new();
        let export = OperationDescriptor::new("export", "Export");

        assert!(!policy.requires_confirmation(&export, 1));
        assert!(!policy.requires_confirmation(&export, 10_000));
    }

    #[test]
    fn test_threshold() {
        let policy = ConfirmationPolicy::new().destructive_threshold(10);
        let delete = OperationDescriptor::new("delete", "Delete").destructive(true);

        assert!(!policy.requires_confirmation(&delete, 9));
        assert!(policy.requires_confirmation(&delete, 10));
    }
}
