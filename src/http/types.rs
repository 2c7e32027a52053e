use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::domain::error::TodoError;

/// `{"success":true,"data":...}` body with the given status.
pub struct ApiData<T>(pub StatusCode, pub T);

impl<T: Serialize> IntoResponse for ApiData<T> {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "success": true, "data": self.1 });
        (self.0, Json(body)).into_response()
    }
}

/// `{"success":false,"error":...}` body with the given status.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }

    pub fn endpoint_not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, "Endpoint not found")
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "success": false, "error": self.message });
        (self.status, Json(body)).into_response()
    }
}

impl From<TodoError> for ApiError {
    fn from(err: TodoError) -> Self {
        let status = match &err {
            TodoError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            TodoError::NotFound => StatusCode::NOT_FOUND,
            TodoError::Internal(source) => {
                // Keep the cause out of the response body.
                tracing::error!(error = %source, "request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self::new(status, err.to_string())
    }
}
