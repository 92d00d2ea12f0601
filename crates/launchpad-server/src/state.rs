//! Application state with a shared `LaunchService`.
//!
//! [`AppState`] wraps the service in `Arc<tokio::sync::Mutex<>>` for use with
//! axum handlers. This one mutex is the only synchronization point: every
//! handler holds it for the full store operation, reads and writes alike.

use std::sync::Arc;

use chrono::Utc;

use launchpad_storage::LaunchStore;

use crate::config::ServerConfig;
use crate::error::ApiError;
use crate::service::LaunchService;

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    /// The shared launch service (async Mutex, awaited without blocking the
    /// runtime).
    pub service: Arc<tokio::sync::Mutex<LaunchService>>,
}

impl AppState {
    /// Creates state over an in-memory store, seeding it when configured to.
    pub fn new(config: &ServerConfig) -> Result<Self, ApiError> {
        let mut service = LaunchService::in_memory();
        if config.seed {
            let count = service.seed(Utc::now())?;
            tracing::info!(count, "seeded launch store");
        }
        Ok(Self::from_service(service))
    }

    /// Creates state over an empty in-memory store (for testing).
    pub fn in_memory() -> Self {
        Self::from_service(LaunchService::in_memory())
    }

    /// Creates state over a caller-supplied store backend.
    pub fn with_store(store: Box<dyn LaunchStore>) -> Self {
        Self::from_service(LaunchService::new(store))
    }

    fn from_service(service: LaunchService) -> Self {
        AppState {
            service: Arc::new(tokio::sync::Mutex::new(service)),
        }
    }
}
