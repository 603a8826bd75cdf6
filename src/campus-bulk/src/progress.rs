//! Progress state published during a bulk run.

use serde::{Deserialize, Serialize};

/// Phase of a bulk run.
///
/// Transitions only `Idle -> Running -> Completed`, never backward. A new
/// run starts from `Idle` or post-`Completed`, never while `Running`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BulkPhase {
    /// No run has started on this executor.
    #[default]
    Idle,
    /// A run is in flight.
    Running,
    /// The last run finished; a result has been produced.
    Completed,
}

impl std::fmt::Display for BulkPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BulkPhase::Idle => write!(f, "idle"),
            BulkPhase::Running => write!(f, "running"),
            BulkPhase::Completed => write!(f, "completed"),
        }
    }
}

/// One item that failed during a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemError {
    /// Identifier of the item the operation was applied to.
    pub item_id: String,
    /// Error message returned by the item handler.
    pub message: String,
}

/// Snapshot of an in-flight (or finished) bulk run.
///
/// Published after every processed item. `completed` counts attempted
/// items, successes and failures alike, and never decreases within a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkProgress {
    pub phase: BulkPhase,
    pub completed: u64,
    pub total: u64,
    pub errors: Vec<ItemError>,
}

impl BulkProgress {
    /// Snapshot for an executor with no run started.
    pub fn idle() -> Self {
        Self {
            phase: BulkPhase::Idle,
            completed: 0,
            total: 0,
            errors: Vec::new(),
        }
    }

    /// Fraction of items processed, in `0.0..=1.0`.
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.completed as f64 / self.total as f64
        }
    }

    pub fn is_finished(&self) -> bool {
        self.phase == BulkPhase::Completed
    }
}

impl Default for BulkProgress {
    fn default() -> Self {
        Self::idle()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_display() {
        assert_eq!(BulkPhase::Idle.to_string(), "idle");
        assert_eq!(BulkPhase::Running.to_string(), "running");
        assert_eq!(BulkPhase::Completed.to_string(), "completed");
    }

    #[test]
    fn test_fraction() {
        let progress = BulkProgress {
            phase: BulkPhase::Running,
            completed: 25,
            total: 50,
            errors: Vec::new(),
        };
        assert!((progress.fraction() - 0.5).abs() < f64::EPSILON);
        assert!((BulkProgress::idle().fraction()).abs() < f64::EPSILON);
    }
}
