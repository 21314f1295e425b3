//! User endpoints.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use common::{NewUser, User};

use crate::AppState;
use crate::error::ApiError;
use crate::routes::{parse_body, parse_id};

/// POST /api/users — register an account. Duplicate email or username
/// responds 409.
#[tracing::instrument(skip(state, body))]
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let new: NewUser = parse_body(body, "Invalid user data")?;
    let user = state.users.create_user(new).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /api/users/{id} — a single user.
#[tracing::instrument(skip(state))]
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<User>, ApiError> {
    let id = parse_id(&id, "Invalid user ID")?;
    let user = state
        .users
        .user(id)
        .await
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;
    Ok(Json(user))
}
