use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::application::todo_service::TodoService;
use crate::domain::error::TodoError;
use crate::domain::todo::{CreateTodo, TodoId, UpdateTodo};
use crate::http::types::{ApiData, ApiError};

#[derive(Clone)]
pub struct AppState<S: TodoService> {
    pub service: S,
}

pub fn router<S: TodoService + Clone>(state: AppState<S>) -> Router {
    Router::new()
        .route("/todos", post(create_todo::<S>).get(list_todos::<S>))
        .route(
            "/todos/:id",
            get(get_todo::<S>).put(update_todo::<S>).delete(delete_todo::<S>),
        )
        .with_state(state)
}

async fn list_todos<S: TodoService>(
    State(state): State<AppState<S>>,
) -> Result<impl axum::response::IntoResponse, ApiError> {
    let todos = state.service.list().await?;
    Ok(ApiData(StatusCode::OK, todos))
}

async fn get_todo<S: TodoService>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<impl axum::response::IntoResponse, ApiError> {
    let todo = state.service.get(parse_id(&id)?).await?;
    Ok(ApiData(StatusCode::OK, todo))
}

async fn create_todo<S: TodoService>(
    State(state): State<AppState<S>>,
    payload: Result<Json<CreateTodo>, JsonRejection>,
) -> Result<impl axum::response::IntoResponse, ApiError> {
    let Json(input) = payload.map_err(bad_body)?;
    let todo = state.service.create(input).await?;
    Ok(ApiData(StatusCode::CREATED, todo))
}

async fn update_todo<S: TodoService>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateTodo>, JsonRejection>,
) -> Result<impl axum::response::IntoResponse, ApiError> {
    let id = parse_id(&id)?;
    let Json(input) = payload.map_err(bad_body)?;
    let todo = state.service.update(id, input).await?;
    Ok(ApiData(StatusCode::OK, todo))
}

async fn delete_todo<S: TodoService>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<impl axum::response::IntoResponse, ApiError> {
    let todo = state.service.delete(parse_id(&id)?).await?;
    Ok(ApiData(StatusCode::OK, todo))
}

// A non-numeric segment matches no todo, so it reads as not-found rather than
// a distinct error kind.
fn parse_id(raw: &str) -> Result<TodoId, ApiError> {
    raw.parse::<u64>()
        .map(TodoId)
        .map_err(|_| ApiError::from(TodoError::NotFound))
}

// Keeps the error envelope shape even when deserialization itself fails,
// e.g. a non-boolean `completed` or a malformed body.
fn bad_body(rejection: JsonRejection) -> ApiError {
    ApiError::new(StatusCode::BAD_REQUEST, rejection.body_text())
}
