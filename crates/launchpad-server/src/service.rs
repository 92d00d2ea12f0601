//! LaunchService: the single coordinator between HTTP handlers and the
//! launch store.
//!
//! Handlers decode requests and hold the service lock; every conversion from
//! wire types to model types and every store call happens here.

use chrono::{DateTime, Utc};

use launchpad_core::{Launch, LaunchCreateRequest, LaunchId};
use launchpad_storage::{seed, InMemoryStore, LaunchStore};

use crate::error::ApiError;

/// Owns the launch store and implements the CRUD operations on top of it.
pub struct LaunchService {
    store: Box<dyn LaunchStore>,
}

impl LaunchService {
    /// Wraps an arbitrary store backend.
    pub fn new(store: Box<dyn LaunchStore>) -> Self {
        LaunchService { store }
    }

    /// Creates a service backed by an empty [`InMemoryStore`].
    pub fn in_memory() -> Self {
        Self::new(Box::new(InMemoryStore::new()))
    }

    /// Loads the demo launches, returning how many were added.
    pub fn seed(&mut self, now: DateTime<Utc>) -> Result<usize, ApiError> {
        Ok(seed::seed_store(self.store.as_mut(), now)?)
    }

    /// Validates `req` and stores it under a fresh id.
    pub fn create_launch(&mut self, req: LaunchCreateRequest) -> Result<Launch, ApiError> {
        let launch = req.into_launch()?;
        let created = self.store.create(launch)?;
        tracing::debug!(id = %created.id, mission = %created.mission_name, "launch created");
        Ok(created)
    }

    pub fn get_launch(&self, id: &LaunchId) -> Result<Launch, ApiError> {
        Ok(self.store.get(id)?)
    }

    pub fn list_launches(&self) -> Result<Vec<Launch>, ApiError> {
        Ok(self.store.list()?)
    }

    /// Applies the non-empty fields of `req`. `None` means the client sent
    /// no body: nothing changes but the current record is still returned.
    pub fn update_launch(
        &mut self,
        id: &LaunchId,
        req: Option<LaunchCreateRequest>,
    ) -> Result<Launch, ApiError> {
        let patch = req.unwrap_or_default().into_patch()?;
        let updated = self.store.update(id, &patch)?;
        if !patch.is_empty() {
            tracing::debug!(id = %id, "launch updated");
        }
        Ok(updated)
    }

    pub fn delete_launch(&mut self, id: &LaunchId) -> Result<(), ApiError> {
        self.store.delete(id)?;
        tracing::debug!(id = %id, "launch deleted");
        Ok(())
    }

    /// Number of stored launches.
    pub fn launch_count(&self) -> usize {
        self.store.len()
    }
}
