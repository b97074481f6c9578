//! Database layer - connection pool and repositories
//!
//! # Design Principles
//!
//! - One pool per service, passed in explicitly - no process-wide global
//! - One statement per repository call - handlers never hold a connection
//!   across calls
//! - Missing rows and backend failures are separate `DbError` variants

pub mod pool;
pub mod repos;

pub use pool::{create_pool, create_pool_with_options};
pub use repos::*;
