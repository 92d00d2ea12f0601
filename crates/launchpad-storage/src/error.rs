//! Storage error types for launchpad-storage.

use launchpad_core::LaunchId;
use thiserror::Error;

/// Errors produced by storage operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// No live record has the given id.
    #[error("launch not found: {0}")]
    NotFound(LaunchId),
}
