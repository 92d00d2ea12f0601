//! Data model for launch records.
//!
//! Defines the [`Launch`] entity, its wire-level creation request
//! ([`LaunchCreateRequest`]), the partial-update [`LaunchPatch`], and the
//! validation rules that gate record creation.

pub mod error;
pub mod id;
pub mod launch;
pub mod request;
pub mod time;

// Re-export commonly used types
pub use error::CoreError;
pub use id::LaunchId;
pub use launch::{Launch, LaunchPatch};
pub use request::LaunchCreateRequest;
