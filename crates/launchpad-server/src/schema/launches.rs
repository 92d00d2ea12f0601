//! Response types for the launch endpoints.

use serde::Serialize;

/// Response from deleting a launch.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteLaunchResponse {
    /// Confirmation text, always "Launch deleted".
    pub message: String,
}

impl DeleteLaunchResponse {
    pub fn deleted() -> Self {
        DeleteLaunchResponse {
            message: "Launch deleted".to_string(),
        }
    }
}
