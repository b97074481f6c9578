//! Product endpoints

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use crate::db::repos::{Product, ProductRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, ValidId};
use crate::http::state::AppState;
use crate::models::Price;

/// Create product request
#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    #[serde(default)]
    pub name: String,
    /// Smallest currency unit; 0 when absent
    #[serde(default)]
    pub price: i64,
}

/// Product response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub price: i64,
}

impl From<Product> for ProductResponse {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            name: p.name,
            price: p.price,
        }
    }
}

/// POST /products - create a product
async fn create_product(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<CreateProductRequest>,
) -> Result<(StatusCode, Json<ProductResponse>), ApiError> {
    let price = Price::new(req.price)?;
    let product = ProductRepo::new(&state.pool).create(&req.name, price).await?;
    tracing::debug!(product_id = product.id, "product created");

    Ok((StatusCode::CREATED, Json(ProductResponse::from(product))))
}

/// GET /products/{id}
async fn get_product(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<ProductResponse>, ApiError> {
    let product = ProductRepo::new(&state.pool).get(id).await?;
    Ok(Json(ProductResponse::from(product)))
}

/// GET /products
async fn list_products(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ProductResponse>>, ApiError> {
    let products = ProductRepo::new(&state.pool).list().await?;
    Ok(Json(
        products.into_iter().map(ProductResponse::from).collect(),
    ))
}

/// Product routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route("/products/{id}", get(get_product))
}
