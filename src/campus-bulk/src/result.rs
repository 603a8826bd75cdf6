//! Final result of a bulk run.

use serde::{Deserialize, Serialize};

use crate::progress::{BulkProgress, ItemError};

/// Summary of a completed bulk run.
///
/// Created once, when the run transitions to `Completed`; immutable
/// thereafter. The only artifact that outlives the call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkResult {
    pub total: u64,
    pub succeeded: u64,
    pub failed: u64,
    /// Item errors in processing order.
    pub errors: Vec<ItemError>,
    /// Whether the run was a preview that skipped the handler.
    pub dry_run: bool,
}

impl BulkResult {
    pub(crate) fn from_progress(progress: &BulkProgress, dry_run: bool) -> Self {
        let failed = progress.errors.len() as u64;
        Self {
            total: progress.total,
            succeeded: progress.total - failed,
            failed,
            errors: progress.errors.clone(),
            dry_run,
        }
    }

    /// True when every item succeeded.
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    /// True when no item succeeded.
    pub fn is_total_failure(&self) -> bool {
        self.succeeded == 0
    }
}
