//! HTTP layer
//!
//! Axum routers with:
//! - Request tracing
//! - JSON error responses
//! - Graceful shutdown with a bounded drain window

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use server::{LifecycleState, Service, ServerError, DEFAULT_DRAIN_TIMEOUT};
pub use state::AppState;
