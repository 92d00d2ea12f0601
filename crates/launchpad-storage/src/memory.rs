//! In-memory implementation of [`LaunchStore`].
//!
//! [`InMemoryStore`] keeps every record in a `HashMap` and allocates ids from
//! a per-instance counter. Nothing survives a restart.

use std::collections::HashMap;

use launchpad_core::{Launch, LaunchId, LaunchPatch};

use crate::error::StorageError;
use crate::traits::LaunchStore;

/// HashMap-backed launch store.
#[derive(Debug)]
pub struct InMemoryStore {
    launches: HashMap<LaunchId, Launch>,
    /// Next id to hand out. Never decremented, so ids are not reused after
    /// deletion.
    next_id: u64,
}

impl InMemoryStore {
    pub fn new() -> Self {
        InMemoryStore {
            launches: HashMap::new(),
            next_id: 1,
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LaunchStore for InMemoryStore {
    fn create(&mut self, mut launch: Launch) -> Result<Launch, StorageError> {
        launch.id = LaunchId::from_seq(self.next_id);
        self.next_id += 1;
        self.launches.insert(launch.id.clone(), launch.clone());
        Ok(launch)
    }

    fn get(&self, id: &LaunchId) -> Result<Launch, StorageError> {
        self.launches
            .get(id)
            .cloned()
            .ok_or_else(|| StorageError::NotFound(id.clone()))
    }

    fn list(&self) -> Result<Vec<Launch>, StorageError> {
        Ok(self.launches.values().cloned().collect())
    }

    fn update(&mut self, id: &LaunchId, patch: &LaunchPatch) -> Result<Launch, StorageError> {
        let launch = self
            .launches
            .get_mut(id)
            .ok_or_else(|| StorageError::NotFound(id.clone()))?;
        patch.apply_to(launch);
        Ok(launch.clone())
    }

    fn delete(&mut self, id: &LaunchId) -> Result<(), StorageError> {
        self.launches
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| StorageError::NotFound(id.clone()))
    }

    fn len(&self) -> usize {
        self.launches.len()
    }
}
