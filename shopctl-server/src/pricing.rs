//! Unit price lookup for order totals
//!
//! Orders only carry a product id. The orders service asks a `PriceLookup`
//! for the unit price so a real catalogue client can replace the fixed
//! placeholder without touching the order handlers.

use async_trait::async_trait;

use crate::models::{Price, ValidationError};

/// Price lookup failure
#[derive(Debug, thiserror::Error)]
pub enum PriceError {
    #[error("no price for product {product_id}")]
    UnknownProduct { product_id: i64 },

    #[error("invalid price: {0}")]
    Invalid(#[from] ValidationError),
}

/// Resolves the unit price of a product.
#[async_trait]
pub trait PriceLookup: Send + Sync {
    async fn unit_price(&self, product_id: i64) -> Result<Price, PriceError>;
}

/// Returns the same price for every product.
#[derive(Debug, Clone, Copy)]
pub struct FixedPrice(Price);

impl FixedPrice {
    /// Unit price the orders service charges until it talks to the catalogue.
    pub const PLACEHOLDER_AMOUNT: i64 = 75_000;

    pub fn new(amount: i64) -> Result<Self, ValidationError> {
        Ok(Self(Price::new(amount)?))
    }

    pub const fn placeholder() -> Self {
        Self(Price::from_const(Self::PLACEHOLDER_AMOUNT))
    }
}

#[async_trait]
impl PriceLookup for FixedPrice {
    async fn unit_price(&self, _product_id: i64) -> Result<Price, PriceError> {
        Ok(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn placeholder_ignores_product() {
        let prices = FixedPrice::placeholder();
        for product_id in [0, 1, 42, -7] {
            let price = prices.unit_price(product_id).await.unwrap();
            assert_eq!(price.get(), 75_000);
        }
    }

    #[test]
    fn negative_fixed_price_is_rejected() {
        assert!(FixedPrice::new(-1).is_err());
    }
}
