//! Movie catalogue API server library.
//!
//! Exposes the building blocks (config, state, error handling, routes) so
//! integration tests and the binary entrypoint assemble the same router.

pub mod app;
pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod routes;
pub mod state;
