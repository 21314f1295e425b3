//! Order endpoints.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use common::{NewOrder, Order, OrderLine, OrderWithItems};

use crate::AppState;
use crate::error::ApiError;
use crate::routes::{parse_body, parse_id};

/// GET /api/orders/{userId} — the user's orders with joined lines.
#[tracing::instrument(skip(state))]
pub async fn list(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<OrderWithItems>>, ApiError> {
    let user_id = parse_id(&user_id, "Invalid user ID")?;
    Ok(Json(state.orders.orders_for_user(user_id).await))
}

/// POST /api/orders — place an order with its line items.
///
/// Body shape: `{"order": {...}, "items": [{...}, ...]}`. The items
/// array must be non-empty; the fan-out itself happens in the domain
/// service under one write guard.
#[tracing::instrument(skip(state, body))]
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> Result<(StatusCode, Json<Order>), ApiError> {
    let order_value = body
        .get("order")
        .cloned()
        .ok_or_else(|| ApiError::BadRequest("Invalid order data".to_string()))?;
    let new_order: NewOrder = parse_body(order_value, "Invalid order data")?;

    let empty_items = || ApiError::BadRequest("Order must contain at least one item".to_string());
    let items_value = body.get("items").cloned().ok_or_else(empty_items)?;
    if !items_value
        .as_array()
        .is_some_and(|items| !items.is_empty())
    {
        return Err(empty_items());
    }
    let lines: Vec<OrderLine> = parse_body(items_value, "Invalid order data")?;

    let order = state.orders.create_order(new_order, &lines).await;
    Ok((StatusCode::CREATED, Json(order)))
}
