//! Menu and category endpoints.

use axum::Json;
use axum::extract::{Path, Query, State};
use common::{Category, MenuItemWithCategory};
use serde::Deserialize;

use crate::AppState;
use crate::error::ApiError;
use crate::routes::parse_id;

#[derive(Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

/// GET /api/menu — all menu items with their categories.
#[tracing::instrument(skip(state))]
pub async fn list(State(state): State<AppState>) -> Json<Vec<MenuItemWithCategory>> {
    Json(state.menu.list_menu_items().await)
}

/// GET /api/menu/featured — featured menu items.
#[tracing::instrument(skip(state))]
pub async fn featured(State(state): State<AppState>) -> Json<Vec<MenuItemWithCategory>> {
    Json(state.menu.featured_items().await)
}

/// GET /api/menu/popular — popular menu items.
#[tracing::instrument(skip(state))]
pub async fn popular(State(state): State<AppState>) -> Json<Vec<MenuItemWithCategory>> {
    Json(state.menu.popular_items().await)
}

/// GET /api/menu/search?q= — case-insensitive substring search.
#[tracing::instrument(skip(state, params))]
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<MenuItemWithCategory>>, ApiError> {
    let q = params
        .q
        .ok_or_else(|| ApiError::BadRequest("Search query is required".to_string()))?;
    Ok(Json(state.menu.search(&q).await))
}

/// GET /api/menu/category/{categoryId} — items in a category.
#[tracing::instrument(skip(state))]
pub async fn by_category(
    State(state): State<AppState>,
    Path(category_id): Path<String>,
) -> Result<Json<Vec<MenuItemWithCategory>>, ApiError> {
    let category_id = parse_id(&category_id, "Invalid category ID")?;
    Ok(Json(state.menu.items_by_category(category_id).await))
}

/// GET /api/menu/{id} — a single menu item.
#[tracing::instrument(skip(state))]
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MenuItemWithCategory>, ApiError> {
    let id = parse_id(&id, "Invalid menu item ID")?;
    let item = state
        .menu
        .menu_item(id)
        .await
        .ok_or_else(|| ApiError::NotFound("Menu item not found".to_string()))?;
    Ok(Json(item))
}

/// GET /api/categories — all categories.
#[tracing::instrument(skip(state))]
pub async fn categories(State(state): State<AppState>) -> Json<Vec<Category>> {
    Json(state.menu.list_categories().await)
}
