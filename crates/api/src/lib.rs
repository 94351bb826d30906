//! Person registry API server library.
//!
//! Exposes config, state, error handling, extractors and routes so the
//! binary entrypoint and integration tests build the same application.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod router;
pub mod routes;
pub mod state;
