//! Dispatch status board API server library.
//!
//! Exposes the core building blocks (config, state, error handling, routes,
//! the session gate, and the WebSocket broadcast infrastructure) so
//! integration tests and the binary entrypoint can both access them.

pub mod broadcast;
pub mod config;
pub mod error;
pub mod gate;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod routes;
pub mod state;
pub mod ws;
