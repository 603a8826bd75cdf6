//! Sequential bulk operation executor.

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::progress::{BulkPhase, BulkProgress, ItemError};
use crate::request::BulkRequest;
use crate::result::BulkResult;
use crate::{BulkError, Result};

/// Binding from the engine to the real backend call for one item.
///
/// Expected failures must come back as `Err(message)`, never as a panic:
/// the executor does not catch panics, and a panicking handler leaves the
/// executor stuck in the running phase.
#[async_trait]
pub trait ItemHandler: Send + Sync {
    /// Apply the operation to one item.
    ///
    /// `parameter` is the request's operation-specific payload, if any.
    async fn apply(&self, item_id: &str, parameter: Option<&Value>)
        -> std::result::Result<(), String>;
}

/// Executor for bulk operations.
///
/// Runs one operation over a list of target items, strictly sequentially
/// and in the given order. Item failures are collected, not fatal: a
/// failing item never aborts the rest of the run. At most one run may be
/// in flight per executor instance.
pub struct BulkExecutor {
    /// Guard enforcing at most one in-flight run.
    phase: Mutex<BulkPhase>,
    /// Latest progress snapshot for subscribers.
    progress_tx: watch::Sender<BulkProgress>,
    /// Preview mode: walk the state machine without invoking the handler.
    dry_run: bool,
}

impl BulkExecutor {
    pub fn new() -> Self {
        let (progress_tx, _) = watch::channel(BulkProgress::idle());
        Self {
            phase: Mutex::new(BulkPhase::Idle),
            progress_tx,
            dry_run: false,
        }
    }

    pub fn dry_run(mut self, enabled: bool) -> Self {
        self.dry_run = enabled;
        self
    }

    /// Current phase of this executor.
    pub fn phase(&self) -> BulkPhase {
        *self.phase.lock().unwrap()
    }

    /// Subscribe to progress snapshots.
    ///
    /// Receivers observe the latest snapshot; updates are published once
    /// per processed item, in processing order, so `completed` is
    /// non-decreasing across successive observations.
    pub fn subscribe(&self) -> watch::Receiver<BulkProgress> {
        self.progress_tx.subscribe()
    }

    /// Execute a bulk request.
    ///
    /// Fails without touching any state when the request is invalid or a
    /// run is already in flight. Item-level failures are reported through
    /// the returned [`BulkResult`], never as an error here.
    pub async fn execute(
        &self,
        request: BulkRequest,
        handler: &dyn ItemHandler,
    ) -> Result<BulkResult> {
        request.validate()?;

        {
            let mut phase = self.phase.lock().unwrap();
            if *phase == BulkPhase::Running {
                return Err(BulkError::AlreadyRunning);
            }
            *phase = BulkPhase::Running;
        }

        let operation = &request.operation;
        let total = request.target_ids.len() as u64;
        info!(
            "Starting bulk {} over {} items{}",
            operation.name,
            total,
            if self.dry_run { " (dry run)" } else { "" }
        );

        let mut progress = BulkProgress {
            phase: BulkPhase::Running,
            completed: 0,
            total,
            errors: Vec::new(),
        };
        self.publish(&progress);

        for item_id in &request.target_ids {
            if self.dry_run {
                debug!("{}: {} skipped (dry run)", operation.name, item_id);
            } else {
                match handler.apply(item_id, request.parameter.as_ref()).await {
                    Ok(()) => {
                        debug!("{}: {} ok", operation.name, item_id);
                    }
                    Err(message) => {
                        warn!("{} failed for {}: {}", operation.name, item_id, message);
                        progress.errors.push(ItemError {
                            item_id: item_id.clone(),
                            message,
                        });
                    }
                }
            }
            // An attempted item counts as processed, failed or not.
            progress.completed += 1;
            self.publish(&progress);
        }

        progress.phase = BulkPhase::Completed;
        *self.phase.lock().unwrap() = BulkPhase::Completed;
        self.publish(&progress);

        let result = BulkResult::from_progress(&progress, self.dry_run);
        info!(
            "Bulk {} complete: {} total, {} succeeded, {} failed",
            operation.name, result.total, result.succeeded, result.failed
        );
        Ok(result)
    }

    fn publish(&self, progress: &BulkProgress) {
        self.progress_tx.send_replace(progress.clone());
    }
}

impl Default for BulkExecutor {
    fn default() -> Self {
        Self::new()
    }
}
