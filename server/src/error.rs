//! Maps domain errors onto HTTP responses.
//!
//! Boundary contract: `Validation` → 400 with the violation list in the
//! body, `NotFound` → 404, store failures → 500 with the detail logged
//! rather than leaked to the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use todo_core::TodoError;

/// Transport-side wrapper so handlers can `?` domain errors straight
/// into a response.
#[derive(Debug)]
pub struct ApiError(TodoError);

impl From<TodoError> for ApiError {
    fn from(err: TodoError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            TodoError::Validation(violations) => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": "validation failed",
                    "violations": violations,
                })),
            )
                .into_response(),
            TodoError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": "todo not found" })),
            )
                .into_response(),
            TodoError::Store(err) => {
                tracing::error!(error = %err, "store failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "internal error" })),
                )
                    .into_response()
            }
        }
    }
}
