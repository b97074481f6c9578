//! Product repository

use sqlx::{FromRow, PgPool};

use super::DbError;
use crate::models::Price;

/// Product record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: i64,
}

/// Product repository
pub struct ProductRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, name: &str, price: Price) -> Result<Product, DbError> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (name, price)
            VALUES ($1, $2)
            RETURNING id, name, price
            "#,
        )
        .bind(name)
        .bind(price.get())
        .fetch_one(self.pool)
        .await?;

        Ok(product)
    }

    pub async fn get(&self, id: i64) -> Result<Product, DbError> {
        sqlx::query_as::<_, Product>("SELECT id, name, price FROM products WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or(DbError::NotFound { resource: "product" })
    }

    /// List every product ordered by ascending id.
    pub async fn list(&self) -> Result<Vec<Product>, DbError> {
        let products =
            sqlx::query_as::<_, Product>("SELECT id, name, price FROM products ORDER BY id")
                .fetch_all(self.pool)
                .await?;

        Ok(products)
    }
}
