//! Order repository
//!
//! `user_id` and `product_id` are stored by value; they belong to other
//! services and are never checked here.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use super::DbError;
use crate::models::Quantity;

/// Order record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Order {
    pub id: i64,
    pub user_id: i64,
    pub product_id: i64,
    pub quantity: i32,
    pub total: i64,
    pub created_at: DateTime<Utc>,
}

/// Validated order ready for insert
#[derive(Debug, Clone, Copy)]
pub struct NewOrder {
    pub user_id: i64,
    pub product_id: i64,
    pub quantity: Quantity,
    pub total: i64,
}

/// Order repository
pub struct OrderRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> OrderRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, order: NewOrder) -> Result<Order, DbError> {
        let row = sqlx::query_as::<_, Order>(
            r#"
            INSERT INTO orders (user_id, product_id, quantity, total)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, product_id, quantity, total, created_at
            "#,
        )
        .bind(order.user_id)
        .bind(order.product_id)
        .bind(order.quantity.get())
        .bind(order.total)
        .fetch_one(self.pool)
        .await?;

        Ok(row)
    }

    pub async fn get(&self, id: i64) -> Result<Order, DbError> {
        sqlx::query_as::<_, Order>(
            r#"
            SELECT id, user_id, product_id, quantity, total, created_at
            FROM orders
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(DbError::NotFound { resource: "order" })
    }
}
