//! Storage abstraction for launch records.
//!
//! Provides the [`LaunchStore`] trait defining the storage contract that all
//! backends implement, plus [`InMemoryStore`] as the one shipped backend.
//!
//! # Modules
//!
//! - [`error`]: StorageError enum with all failure modes
//! - [`traits`]: LaunchStore trait definition
//! - [`memory`]: InMemoryStore implementation
//! - [`seed`]: example records loaded at server startup

pub mod error;
pub mod memory;
pub mod seed;
pub mod traits;

// Re-export key types for ergonomic use.
pub use error::StorageError;
pub use memory::InMemoryStore;
pub use traits::LaunchStore;
