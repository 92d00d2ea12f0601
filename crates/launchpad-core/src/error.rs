//! Core error types for launchpad-core.
//!
//! Uses `thiserror` for matchable validation failures raised while turning
//! wire-level requests into [`Launch`](crate::Launch) records.

use thiserror::Error;

/// Validation errors produced by the launchpad-core crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A required field was missing or empty.
    #[error("invalid input data")]
    InvalidInput,

    /// `launch_time` did not parse as an RFC3339 timestamp.
    #[error("invalid time format, must be RFC3339")]
    InvalidTimeFormat,
}
