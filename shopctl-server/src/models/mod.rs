//! Request models with validation at construction
//!
//! Invalid input returns ValidationError, not panic.

pub mod amounts;
pub mod validation;

pub use amounts::{Price, Quantity};
pub use validation::ValidationError;
