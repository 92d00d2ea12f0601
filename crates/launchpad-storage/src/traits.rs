//! The [`LaunchStore`] trait defining the storage contract for launches.
//!
//! The trait is synchronous and takes `&mut self` for writes. Callers that
//! share a store across tasks wrap it in a single mutex and hold the guard
//! for the whole call, so every operation is serialized.

use launchpad_core::{Launch, LaunchId, LaunchPatch};

use crate::error::StorageError;

/// The storage contract for launch records.
///
/// Backends are swappable without changing callers.
pub trait LaunchStore: Send {
    /// Stores a new record under a freshly allocated id.
    ///
    /// Any id already on `launch` is ignored. Returns the stored copy.
    fn create(&mut self, launch: Launch) -> Result<Launch, StorageError>;

    /// Retrieves a record by id.
    fn get(&self, id: &LaunchId) -> Result<Launch, StorageError>;

    /// Lists all records. Order is unspecified.
    fn list(&self) -> Result<Vec<Launch>, StorageError>;

    /// Overwrites the present fields of `patch` onto the stored record and
    /// returns the merged result.
    fn update(&mut self, id: &LaunchId, patch: &LaunchPatch) -> Result<Launch, StorageError>;

    /// Removes a record permanently.
    fn delete(&mut self, id: &LaunchId) -> Result<(), StorageError>;

    /// Number of live records.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
