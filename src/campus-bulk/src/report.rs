//! Result and progress formatting.
//!
//! Pure formatting functions; the resulting strings are handed to an
//! external notifier, never rendered here.

use campus_ops::OperationDescriptor;

use crate::progress::BulkProgress;
use crate::result::BulkResult;

/// Maximum item errors listed in a total-failure summary.
pub const MAX_LISTED_ERRORS: usize = 5;

/// Format a completed run as a human-readable summary.
pub fn summarize(result: &BulkResult, descriptor: &OperationDescriptor) -> String {
    if result.is_success() {
        if result.dry_run {
            format!(
                "Dry run: {} would be applied to {} items",
                descriptor.display_name, result.total
            )
        } else {
            format!(
                "{} completed for {} items",
                descriptor.display_name, result.succeeded
            )
        }
    } else if !result.is_total_failure() {
        format!(
            "{} partially completed: {} of {} items succeeded, {} failed",
            descriptor.display_name, result.succeeded, result.total, result.failed
        )
    } else {
        let mut lines = vec![format!(
            "{} failed for all {} items",
            descriptor.display_name, result.total
        )];
        for error in result.errors.iter().take(MAX_LISTED_ERRORS) {
            lines.push(format!("  {}: {}", error.item_id, error.message));
        }
        if result.errors.len() > MAX_LISTED_ERRORS {
            lines.push(format!(
                "  ... and {} more",
                result.errors.len() - MAX_LISTED_ERRORS
            ));
        }
        lines.join("\n")
    }
}

/// Format a progress snapshot as a single status line.
pub fn format_progress_line(progress: &BulkProgress) -> String {
    let percent = progress.fraction() * 100.0;
    format!(
        "{} [{:>3.0}%] {}/{}",
        create_bar(percent, 20),
        percent,
        progress.completed,
        progress.total
    )
}

/// Create a textual progress bar.
fn create_bar(percent: f64, width: usize) -> String {
    let filled = ((percent / 100.0) * width as f64).round() as usize;
    let empty = width.saturating_sub(filled);
    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::{BulkPhase, ItemError};

    fn delete_op() -> OperationDescriptor {
        OperationDescriptor::new("delete", "Delete").destructive(true)
    }

    fn errors(n: usize) -> Vec<ItemError> {
        (0..n)
            .map(|i| ItemError {
                item_id: format!("q-{}", i),
                message: "not found".into(),
            })
            .collect()
    }

    #[test]
    fn test_full_success_message() {
        let result = BulkResult {
            total: 10,
            succeeded: 10,
            failed: 0,
            errors: Vec::new(),
            dry_run: false,
        };
        let message = summarize(&result, &delete_op());
        assert!(message.contains("10"));
        assert!(message.contains("Delete"));
    }

    #[test]
    fn test_partial_message_names_both_counts() {
        let result = BulkResult {
            total: 10,
            succeeded: 7,
            failed: 3,
            errors: errors(3),
            dry_run: false,
        };
        let message = summarize(&result, &delete_op());
        assert!(message.contains("7"));
        assert!(message.contains("3"));
    }

    #[test]
    fn test_total_failure_lists_capped_errors() {
        let result = BulkResult {
            total: 8,
            succeeded: 0,
            failed: 8,
            errors: errors(8),
            dry_run: false,
        };
        let message = summarize(&result, &delete_op());

        let listed = message.lines().filter(|l| l.contains("not found")).count();
        assert_eq!(listed, MAX_LISTED_ERRORS);
        assert!(message.contains("and 3 more"));
    }

    #[test]
    fn test_total_failure_few_errors_no_tail() {
        let result = BulkResult {
            total: 2,
            succeeded: 0,
            failed: 2,
            errors: errors(2),
            dry_run: false,
        };
        let message = summarize(&result, &delete_op());
        assert!(!message.contains("more"));
        assert!(message.contains("q-0"));
        assert!(message.contains("q-1"));
    }

    #[test]
    fn test_dry_run_message() {
        let result = BulkResult {
            total: 5,
            succeeded: 5,
            failed: 0,
            errors: Vec::new(),
            dry_run: true,
        };
        let message = summarize(&result, &delete_op());
        assert!(message.contains("Dry run"));
        assert!(message.contains("5"));
    }

    #[test]
    fn test_progress_line() {
        let progress = BulkProgress {
            phase: BulkPhase::Running,
            completed: 25,
            total: 50,
            errors: Vec::new(),
        };
        let line = format_progress_line(&progress);
        assert!(line.contains("25/50"));
        assert!(line.contains("50%"));
    }

    #[test]
    fn test_create_bar_width() {
        let bar = create_bar(50.0, 10);
        assert_eq!(bar.chars().count(), 12); // 10 chars + 2 brackets
    }
}
