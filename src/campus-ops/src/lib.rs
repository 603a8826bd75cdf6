//! Operation catalog for the campus bulk engine.
//!
//! Provides:
//! - Descriptors for the bulk operations the admin backend offers
//! - A registry with a JSON configuration surface
//! - The confirmation policy for destructive operations

pub mod confirm;
pub mod descriptor;
pub mod registry;

pub use confirm::ConfirmationPolicy;
pub use descriptor::OperationDescriptor;
pub use registry::OperationRegistry;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum OpsError {
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, OpsError>;
