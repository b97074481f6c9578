//! Application state shared across handlers

use std::sync::Arc;

use sqlx::PgPool;

use crate::pricing::{FixedPrice, PriceLookup};

/// Shared application state
///
/// Built once at startup from an already constructed pool and handed to the
/// router; handlers borrow the pool per statement.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    /// Unit price source for order totals
    pub prices: Arc<dyn PriceLookup>,
}

impl AppState {
    /// State with the placeholder fixed price.
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            prices: Arc::new(FixedPrice::placeholder()),
        }
    }

    pub fn with_prices(mut self, prices: Arc<dyn PriceLookup>) -> Self {
        self.prices = prices;
        self
    }
}
