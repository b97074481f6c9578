//! Validation error types

use std::fmt;

/// Validation error for request input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field must not be below zero
    Negative { field: &'static str },

    /// Field must be at least one
    NotPositive { field: &'static str },

    /// Derived value does not fit its column
    Overflow { field: &'static str },

    /// Field doesn't match the required format (e.g. a numeric id)
    InvalidFormat { field: &'static str, reason: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negative { field } => write!(f, "{} must not be negative", field),
            Self::NotPositive { field } => write!(f, "{} must be at least 1", field),
            Self::Overflow { field } => write!(f, "{} is out of range", field),
            Self::InvalidFormat { field, reason } => write!(f, "{}: {}", field, reason),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::Negative { field: "price" };
        assert_eq!(err.to_string(), "price must not be negative");

        let err = ValidationError::InvalidFormat {
            field: "id",
            reason: "must be an integer",
        };
        assert_eq!(err.to_string(), "id: must be an integer");
    }
}
