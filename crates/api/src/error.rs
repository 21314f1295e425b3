//! API error types with HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use domain::DomainError;

/// API-level error type that maps to HTTP responses.
///
/// All error bodies carry the shape `{"message": "..."}`.
#[derive(Debug)]
pub enum ApiError {
    /// Resource not found.
    NotFound(String),
    /// Bad request from the client.
    BadRequest(String),
    /// Domain rule violation.
    Domain(DomainError),
    /// Internal server error.
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Domain(err) => domain_error_to_response(err),
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        let body = serde_json::json!({ "message": message });
        (status, axum::Json(body)).into_response()
    }
}

fn domain_error_to_response(err: DomainError) -> (StatusCode, String) {
    let status = match &err {
        DomainError::DuplicateEmail { .. }
        | DomainError::DuplicateUsername { .. }
        | DomainError::InvalidStatusTransition { .. } => StatusCode::CONFLICT,
        DomainError::MenuItemNotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::InvalidQuantity { .. } => StatusCode::BAD_REQUEST,
    };
    (status, err.to_string())
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        ApiError::Domain(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::MenuItemId;

    #[test]
    fn duplicate_email_maps_to_conflict() {
        let (status, _) = domain_error_to_response(DomainError::DuplicateEmail {
            email: "ada@example.com".to_string(),
        });
        assert_eq!(status, StatusCode::CONFLICT);
    }

    #[test]
    fn missing_menu_item_maps_to_not_found() {
        let (status, message) = domain_error_to_response(DomainError::MenuItemNotFound {
            id: MenuItemId::from(7),
        });
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(message, "Menu item 7 not found");
    }

    #[test]
    fn invalid_quantity_maps_to_bad_request() {
        let (status, _) =
            domain_error_to_response(DomainError::InvalidQuantity { quantity: -1 });
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
