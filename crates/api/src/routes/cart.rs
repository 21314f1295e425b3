//! Cart endpoints.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use common::{CartItem, CartItemWithMenuItem, NewCartItem};
use domain::CartItemUpdate;

use crate::AppState;
use crate::error::ApiError;
use crate::routes::{parse_body, parse_id};

/// GET /api/cart/{userId} — the user's cart rows with menu items.
#[tracing::instrument(skip(state))]
pub async fn get(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<CartItemWithMenuItem>>, ApiError> {
    let user_id = parse_id(&user_id, "Invalid user ID")?;
    Ok(Json(state.cart.items_with_details(user_id).await))
}

/// POST /api/cart — append a cart row.
#[tracing::instrument(skip(state, body))]
pub async fn add(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> Result<(StatusCode, Json<CartItem>), ApiError> {
    let new: NewCartItem = parse_body(body, "Invalid cart item data")?;
    let item = state.cart.add_to_cart(new).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// PUT /api/cart/{id} — overwrite a row's quantity.
///
/// Quantity 0 deletes the row and the response body is JSON `null`,
/// whether or not the row still existed; 404 is reserved for a
/// positive quantity against a missing row.
#[tracing::instrument(skip(state, body))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let invalid = || ApiError::BadRequest("Invalid cart item ID or quantity".to_string());

    let id = parse_id(&id, "Invalid cart item ID or quantity")?;
    let quantity = body
        .get("quantity")
        .and_then(serde_json::Value::as_i64)
        .ok_or_else(invalid)?;
    if quantity < 0 {
        return Err(invalid());
    }
    let quantity = i32::try_from(quantity).map_err(|_| invalid())?;

    match state.cart.update_quantity(id, quantity).await {
        CartItemUpdate::Updated(item) => {
            let value = serde_json::to_value(item)
                .map_err(|e| ApiError::Internal(e.to_string()))?;
            Ok(Json(value))
        }
        CartItemUpdate::Removed => Ok(Json(serde_json::Value::Null)),
        CartItemUpdate::NotFound if quantity == 0 => Ok(Json(serde_json::Value::Null)),
        CartItemUpdate::NotFound => {
            Err(ApiError::NotFound("Cart item not found".to_string()))
        }
    }
}

/// DELETE /api/cart/{id} — remove a single row.
#[tracing::instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let id = parse_id(&id, "Invalid cart item ID")?;
    if !state.cart.remove_from_cart(id).await {
        return Err(ApiError::NotFound("Cart item not found".to_string()));
    }
    Ok(Json(serde_json::json!({ "message": "Item removed from cart" })))
}

/// DELETE /api/cart/user/{userId} — clear the user's cart.
#[tracing::instrument(skip(state))]
pub async fn clear(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let user_id = parse_id(&user_id, "Invalid user ID")?;
    state.cart.clear_cart(user_id).await;
    Ok(Json(serde_json::json!({ "message": "Cart cleared" })))
}
