//! Domain types for the todo service.
//!
//! # Design
//! These types are defined independently of the transport crate; no HTTP
//! or axum types appear here. JSON field names are camelCase and status
//! values are SCREAMING_SNAKE_CASE to stay wire-compatible with existing
//! clients of the API.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle state of a todo.
///
/// Any state may move to any other; `Done` items remain editable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TodoStatus {
    #[default]
    Pending,
    InProgress,
    Done,
}

/// A single task record.
///
/// `id` and `created_at` are assigned once at creation; `updated_at` is
/// refreshed on every successful mutation and is never earlier than
/// `created_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub status: TodoStatus,
    pub due_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for create and full update.
///
/// `title` is optional at this layer so a missing title surfaces as a
/// validation failure rather than a body-parse rejection. On a full
/// update, `description` and `due_date` are replaced wholesale while an
/// omitted `status` leaves the stored status unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TodoRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TodoStatus>,
    pub due_date: Option<NaiveDate>,
}

/// Payload for the status-only update. A missing status is a validation
/// failure, not a no-op.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateStatusRequest {
    pub status: Option<TodoStatus>,
}
