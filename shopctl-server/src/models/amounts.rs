//! Numeric input validation for prices and quantities
//!
//! Prices are integers in the smallest currency unit.

use super::ValidationError;

/// Validated unit price (never negative)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Price(i64);

impl Price {
    /// Create a price, rejecting negative amounts.
    ///
    /// # Example
    /// ```
    /// use shopctl_server::models::Price;
    ///
    /// assert!(Price::new(0).is_ok());
    /// assert!(Price::new(-1).is_err());
    /// ```
    pub fn new(amount: i64) -> Result<Self, ValidationError> {
        if amount < 0 {
            return Err(ValidationError::Negative { field: "price" });
        }
        Ok(Self(amount))
    }

    /// Build a price from a compile-time constant; `amount` must not be negative.
    pub(crate) const fn from_const(amount: i64) -> Self {
        assert!(amount >= 0, "price constant must not be negative");
        Self(amount)
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

/// Validated order quantity (at least one)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quantity(i32);

impl Quantity {
    pub fn new(count: i32) -> Result<Self, ValidationError> {
        if count < 1 {
            return Err(ValidationError::NotPositive { field: "quantity" });
        }
        Ok(Self(count))
    }

    pub fn get(self) -> i32 {
        self.0
    }

    /// Multiply by a unit price, failing if the total would overflow.
    pub fn total(self, unit_price: Price) -> Result<i64, ValidationError> {
        i64::from(self.0)
            .checked_mul(unit_price.get())
            .ok_or(ValidationError::Overflow { field: "total" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_accepts_zero_and_positive() {
        assert_eq!(Price::new(0).unwrap().get(), 0);
        assert_eq!(Price::new(75_000).unwrap().get(), 75_000);
    }

    #[test]
    fn price_rejects_negative() {
        let err = Price::new(-5).unwrap_err();
        assert!(matches!(err, ValidationError::Negative { field: "price" }));
    }

    #[test]
    fn quantity_rejects_zero_and_negative() {
        assert!(matches!(
            Quantity::new(0).unwrap_err(),
            ValidationError::NotPositive { .. }
        ));
        assert!(Quantity::new(-3).is_err());
    }

    #[test]
    fn total_multiplies() {
        let qty = Quantity::new(3).unwrap();
        let price = Price::new(75_000).unwrap();
        assert_eq!(qty.total(price).unwrap(), 225_000);
    }

    #[test]
    fn total_overflow_is_an_error() {
        let qty = Quantity::new(i32::MAX).unwrap();
        let price = Price::new(i64::MAX).unwrap();
        assert!(matches!(
            qty.total(price).unwrap_err(),
            ValidationError::Overflow { field: "total" }
        ));
    }
}
