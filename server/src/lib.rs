//! Axum transport for the todo service.
//!
//! # Design
//! Thin adapter: one handler per service operation, no decision logic.
//! Handlers translate path/query/body into domain types, call the
//! service, and let [`ApiError`] map failures to status codes. Malformed
//! JSON and unknown enum values are rejected by the extractors before
//! the service runs; domain validation failures become 400s.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::NaiveDate;
use serde::Deserialize;
use tokio::net::TcpListener;
use uuid::Uuid;

use todo_core::{InMemoryStore, TodoFilter, TodoRequest, TodoService, UpdateStatusRequest};

mod error;

pub use error::ApiError;
pub use todo_core::{Todo, TodoStatus};

type Service = Arc<TodoService<InMemoryStore>>;

/// Query parameters accepted by the list endpoint. Dates are ISO
/// calendar dates (`2026-09-01`).
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListParams {
    pub status: Option<TodoStatus>,
    pub from_date: Option<NaiveDate>,
    pub to_date: Option<NaiveDate>,
}

impl From<ListParams> for TodoFilter {
    fn from(params: ListParams) -> Self {
        TodoFilter {
            status: params.status,
            from_date: params.from_date,
            to_date: params.to_date,
        }
    }
}

pub fn app() -> Router {
    app_with_store(InMemoryStore::new())
}

pub fn app_with_store(store: InMemoryStore) -> Router {
    let service: Service = Arc::new(TodoService::new(store));
    Router::new()
        .route("/api/todos", get(list_todos).post(create_todo))
        .route(
            "/api/todos/{id}",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
        .route("/api/todos/{id}/status", post(update_status))
        .with_state(service)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_todos(
    State(service): State<Service>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Todo>>, ApiError> {
    let todos = service.list(&params.into()).await?;
    Ok(Json(todos))
}

async fn get_todo(
    State(service): State<Service>,
    Path(id): Path<Uuid>,
) -> Result<Json<Todo>, ApiError> {
    Ok(Json(service.get(id).await?))
}

async fn create_todo(
    State(service): State<Service>,
    Json(request): Json<TodoRequest>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let todo = service.create(&request).await?;
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn update_todo(
    State(service): State<Service>,
    Path(id): Path<Uuid>,
    Json(request): Json<TodoRequest>,
) -> Result<Json<Todo>, ApiError> {
    Ok(Json(service.update(id, &request).await?))
}

async fn update_status(
    State(service): State<Service>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateStatusRequest>,
) -> Result<Json<Todo>, ApiError> {
    Ok(Json(service.update_status(id, &request).await?))
}

async fn delete_todo(
    State(service): State<Service>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
