//! Repository implementations for database access
//!
//! Each repository borrows the pool and issues exactly one statement per
//! call. Point lookups use `fetch_optional` so that a missing row is
//! reported as `DbError::NotFound` and never confused with a backend failure.

pub mod orders;
pub mod products;
pub mod users;

pub use orders::{NewOrder, Order, OrderRepo};
pub use products::{Product, ProductRepo};
pub use users::{User, UserRepo};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("{0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("{resource} not found")]
    NotFound { resource: &'static str },
}
