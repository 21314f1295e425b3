//! Saved-item endpoints.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use common::{MenuItemWithCategory, NewSavedItem, SavedItem};

use crate::AppState;
use crate::error::ApiError;
use crate::routes::{parse_body, parse_id};

/// GET /api/saved/{userId} — the user's saved menu items.
#[tracing::instrument(skip(state))]
pub async fn list(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<MenuItemWithCategory>>, ApiError> {
    let user_id = parse_id(&user_id, "Invalid user ID")?;
    Ok(Json(state.saved.saved_menu_items(user_id).await))
}

/// POST /api/saved — save a menu item for a user. Saving an
/// already-saved item returns the existing row.
#[tracing::instrument(skip(state, body))]
pub async fn add(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> Result<(StatusCode, Json<SavedItem>), ApiError> {
    let new: NewSavedItem = parse_body(body, "Invalid saved item data")?;
    let item = state.saved.save(new.user_id, new.menu_item_id).await;
    Ok((StatusCode::CREATED, Json(item)))
}

/// DELETE /api/saved/{userId}/{menuItemId} — remove a saved item.
#[tracing::instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Path((user_id, menu_item_id)): Path<(String, String)>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let user_id = parse_id(&user_id, "Invalid user ID or menu item ID")?;
    let menu_item_id = parse_id(&menu_item_id, "Invalid user ID or menu item ID")?;

    if !state.saved.unsave(user_id, menu_item_id).await {
        return Err(ApiError::NotFound("Saved item not found".to_string()));
    }
    Ok(Json(serde_json::json!({ "message": "Item removed from saved" })))
}
