use axum::routing::get;
use axum::{Json, Router};

use crate::http::types::ApiError;

/// Assembles the full application surface: the service index at `/`, the todo
/// routes, and an envelope-shaped 404 for everything else.
pub fn app(todos: Router) -> Router {
    Router::new()
        .route("/", get(index))
        .merge(todos)
        .fallback(endpoint_not_found)
}

async fn index() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Todo App API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "GET /todos": "Get all todos",
            "GET /todos/:id": "Get a specific todo",
            "POST /todos": "Create a new todo",
            "PUT /todos/:id": "Update a todo",
            "DELETE /todos/:id": "Delete a todo",
        },
    }))
}

async fn endpoint_not_found() -> ApiError {
    ApiError::endpoint_not_found()
}
