//! Bulk operation engine for the campus admin backend.
//!
//! Provides:
//! - Sequential execution of one operation over a set of target items
//! - Live progress snapshots for subscribers
//! - A final result distinguishing full, partial, and failed runs

pub mod executor;
pub mod progress;
pub mod report;
pub mod request;
pub mod result;

pub use executor::{BulkExecutor, ItemHandler};
pub use progress::{BulkPhase, BulkProgress, ItemError};
pub use request::BulkRequest;
pub use result::BulkResult;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BulkError {
    #[error("Selection is empty")]
    EmptySelection,
    #[error("A bulk run is already in progress")]
    AlreadyRunning,
    #[error("Operation {0} requires a parameter")]
    MissingParameter(String),
    #[error("Operation {0} does not take a parameter")]
    UnexpectedParameter(String),
}

pub type Result<T> = std::result::Result<T, BulkError>;
