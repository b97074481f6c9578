//! Order endpoints
//!
//! The total is computed here from the quantity and the unit price returned
//! by the state's `PriceLookup`; clients never send it.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, routing::post, Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::db::repos::{NewOrder, Order, OrderRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, ValidId};
use crate::http::state::AppState;
use crate::models::Quantity;

/// Create order request
///
/// Absent fields are zero; a zero quantity is then rejected by `Quantity::new`.
#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    #[serde(rename = "userId", default)]
    pub user_id: i64,
    #[serde(rename = "productId", default)]
    pub product_id: i64,
    #[serde(default)]
    pub quantity: i32,
}

/// Order response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderResponse {
    pub id: i64,
    #[serde(rename = "userId")]
    pub user_id: i64,
    #[serde(rename = "productId")]
    pub product_id: i64,
    pub quantity: i32,
    pub total: i64,
    pub created_at: DateTime<Utc>,
}

impl From<Order> for OrderResponse {
    fn from(o: Order) -> Self {
        Self {
            id: o.id,
            user_id: o.user_id,
            product_id: o.product_id,
            quantity: o.quantity,
            total: o.total,
            created_at: o.created_at,
        }
    }
}

/// POST /orders - create an order
async fn create_order(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<CreateOrderRequest>,
) -> Result<(StatusCode, Json<OrderResponse>), ApiError> {
    let quantity = Quantity::new(req.quantity)?;
    let unit_price = state.prices.unit_price(req.product_id).await?;
    let total = quantity.total(unit_price)?;

    let order = OrderRepo::new(&state.pool)
        .create(NewOrder {
            user_id: req.user_id,
            product_id: req.product_id,
            quantity,
            total,
        })
        .await?;
    tracing::debug!(order_id = order.id, total = order.total, "order created");

    Ok((StatusCode::CREATED, Json(OrderResponse::from(order))))
}

/// GET /orders/{id}
async fn get_order(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<OrderResponse>, ApiError> {
    let order = OrderRepo::new(&state.pool).get(id).await?;
    Ok(Json(OrderResponse::from(order)))
}

/// Order routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/orders", post(create_order))
        .route("/orders/{id}", get(get_order))
}
