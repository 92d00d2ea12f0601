//! API schema types for request/response definitions.
//!
//! Launch records and the creation request are defined in `launchpad-core`
//! and serialized as-is; this module holds the response shapes that exist
//! only at the HTTP layer.

pub mod launches;
