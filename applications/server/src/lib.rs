//! Roster Server Library
//!
//! HTTP front for the user record store: shared-secret access guard, payload
//! validation and status mapping.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod state;
pub mod validation;

// Re-export commonly used types for convenience
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use routes::create_router;
pub use services::AccessGuard;
pub use state::AppState;
