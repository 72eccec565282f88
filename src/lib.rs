//! Library crate for football-api, exposing modules for binaries and integration tests.

/// Runtime configuration loading.
pub mod config;
/// In-memory record storage.
pub mod dao;
/// Request and response payloads.
pub mod dto;
/// Service and HTTP error types.
pub mod error;
/// HTTP route trees.
pub mod routes;
/// Business logic behind the routes.
pub mod services;
/// Shared application state.
pub mod state;
