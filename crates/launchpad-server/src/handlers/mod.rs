//! HTTP handler modules for the launchpad API.
//!
//! Handlers parse requests, acquire the service lock, delegate to
//! [`LaunchService`](crate::service::LaunchService), and return JSON
//! responses. No business logic lives in handlers.

pub mod launches;
