//! HTTP/JSON API server for launch records.
//!
//! Provides a small REST API to create, list, fetch, partially update and
//! delete launches. This crate contains the router, handlers, service layer,
//! shared state, error mapping and environment configuration.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod schema;
pub mod service;
pub mod state;
