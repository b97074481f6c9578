//! shopctl-server: users, products and orders CRUD services
//!
//! Each service is an independent axum app over its own PostgreSQL pool.
//! The shared pieces live here:
//! - `db` - pool construction and one repository per entity
//! - `models` - wire types and input validation
//! - `pricing` - unit price lookup used by the orders service
//! - `http` - routes, error mapping and the service lifecycle

pub mod db;
pub mod http;
pub mod models;
pub mod pricing;
pub mod service;

pub use http::{AppState, LifecycleState, Service, ServerError};
pub use service::ServiceKind;
