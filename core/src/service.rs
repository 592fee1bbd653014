//! Orchestration layer: validate, look up, mutate, persist.
//!
//! # Design
//! `TodoService` is stateless beyond the store it holds and is safe to
//! share across concurrent callers. It performs no locking, retries, or
//! timeouts; each operation is one unit of work (validate, read if
//! needed, write) that runs to completion or fails. Consistency under
//! concurrent writes to the same id is delegated to the store — last
//! successful write wins. Absent lookups become [`TodoError::NotFound`];
//! every other store failure bubbles up unchanged.

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use crate::error::TodoError;
use crate::store::{TodoFilter, TodoStore};
use crate::todo::{Todo, TodoRequest, UpdateStatusRequest};
use crate::validation::{validate_request, validate_status, Violation};

#[derive(Debug, Clone)]
pub struct TodoService<S> {
    store: S,
}

impl<S: TodoStore> TodoService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Matching todos, newest first. No side effects.
    pub async fn list(&self, filter: &TodoFilter) -> Result<Vec<Todo>, TodoError> {
        Ok(self.store.search(filter).await?)
    }

    pub async fn get(&self, id: Uuid) -> Result<Todo, TodoError> {
        self.find_or_not_found(id).await
    }

    /// Validate and persist a new todo.
    ///
    /// Assigns a fresh id, defaults the status to `Pending` when the
    /// request omits it, and starts `created_at` and `updated_at` equal.
    pub async fn create(&self, request: &TodoRequest) -> Result<Todo, TodoError> {
        check(validate_request(request))?;
        let now = Utc::now();
        let todo = Todo {
            id: Uuid::new_v4(),
            title: request.title.clone().unwrap_or_default(),
            description: request.description.clone(),
            status: request.status.unwrap_or_default(),
            due_date: request.due_date,
            created_at: now,
            updated_at: now,
        };
        let todo = self.store.save(todo).await?;
        debug!(id = %todo.id, "created todo");
        Ok(todo)
    }

    /// Full update: `title`, `description`, and `due_date` are replaced
    /// wholesale; `status` is replaced only when the request carries one,
    /// otherwise the stored status is kept. Refreshes `updated_at`.
    pub async fn update(&self, id: Uuid, request: &TodoRequest) -> Result<Todo, TodoError> {
        check(validate_request(request))?;
        let mut todo = self.find_or_not_found(id).await?;
        todo.title = request.title.clone().unwrap_or_default();
        todo.description = request.description.clone();
        if let Some(status) = request.status {
            todo.status = status;
        }
        todo.due_date = request.due_date;
        todo.updated_at = Utc::now();
        let todo = self.store.save(todo).await?;
        debug!(id = %todo.id, "updated todo");
        Ok(todo)
    }

    /// Replace only the status, leaving every other field untouched.
    /// Refreshes `updated_at`.
    pub async fn update_status(
        &self,
        id: Uuid,
        request: &UpdateStatusRequest,
    ) -> Result<Todo, TodoError> {
        check(validate_status(request))?;
        let mut todo = self.find_or_not_found(id).await?;
        if let Some(status) = request.status {
            todo.status = status;
        }
        todo.updated_at = Utc::now();
        let todo = self.store.save(todo).await?;
        debug!(id = %todo.id, status = ?todo.status, "updated todo status");
        Ok(todo)
    }

    /// Permanently remove the record. Hard removal, no tombstone.
    pub async fn delete(&self, id: Uuid) -> Result<(), TodoError> {
        let todo = self.find_or_not_found(id).await?;
        self.store.delete(todo.id).await?;
        debug!(id = %todo.id, "deleted todo");
        Ok(())
    }

    async fn find_or_not_found(&self, id: Uuid) -> Result<Todo, TodoError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or(TodoError::NotFound)
    }
}

fn check(violations: Vec<Violation>) -> Result<(), TodoError> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(TodoError::Validation(violations))
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use chrono::NaiveDate;

    use super::*;
    use crate::store::InMemoryStore;
    use crate::todo::TodoStatus;
    use crate::validation::MAX_TITLE_CHARS;

    fn service() -> TodoService<InMemoryStore> {
        TodoService::new(InMemoryStore::new())
    }

    fn titled(title: &str) -> TodoRequest {
        TodoRequest {
            title: Some(title.to_string()),
            ..TodoRequest::default()
        }
    }

    fn status_request(status: TodoStatus) -> UpdateStatusRequest {
        UpdateStatusRequest {
            status: Some(status),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn create_defaults_status_and_sets_equal_timestamps() {
        let service = service();
        let created = service.create(&titled("Test task")).await.unwrap();

        assert_eq!(created.title, "Test task");
        assert_eq!(created.status, TodoStatus::Pending);
        assert_eq!(created.created_at, created.updated_at);
        assert!(created.description.is_none());
        assert!(created.due_date.is_none());
    }

    #[tokio::test]
    async fn create_keeps_explicit_status() {
        let service = service();
        let request = TodoRequest {
            status: Some(TodoStatus::Done),
            ..titled("Already done")
        };
        let created = service.create(&request).await.unwrap();
        assert_eq!(created.status, TodoStatus::Done);
    }

    #[tokio::test]
    async fn create_assigns_distinct_ids() {
        let service = service();
        let a = service.create(&titled("a")).await.unwrap();
        let b = service.create(&titled("b")).await.unwrap();
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn create_blank_title_fails_and_stores_nothing() {
        let service = service();
        let err = service.create(&titled("   ")).await.unwrap_err();
        assert!(matches!(err, TodoError::Validation(_)));
        assert!(service.list(&TodoFilter::default()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_overlong_title_fails_and_stores_nothing() {
        let service = service();
        let err = service
            .create(&titled(&"x".repeat(MAX_TITLE_CHARS + 1)))
            .await
            .unwrap_err();
        assert!(matches!(err, TodoError::Validation(_)));
        assert!(service.list(&TodoFilter::default()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn get_unknown_id_is_not_found() {
        let err = service().get(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, TodoError::NotFound));
    }

    #[tokio::test]
    async fn update_replaces_fields_and_refreshes_updated_at() {
        let service = service();
        let created = service.create(&titled("Old title")).await.unwrap();

        // Timestamps come from the wall clock; give it room to advance.
        tokio::time::sleep(Duration::from_millis(5)).await;

        let request = TodoRequest {
            title: Some("New title".to_string()),
            description: Some("New description".to_string()),
            status: Some(TodoStatus::InProgress),
            due_date: Some(date(2026, 9, 15)),
        };
        let updated = service.update(created.id, &request).await.unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at > created.updated_at);
        assert_eq!(updated.title, "New title");
        assert_eq!(updated.description.as_deref(), Some("New description"));
        assert_eq!(updated.status, TodoStatus::InProgress);
        assert_eq!(updated.due_date, Some(date(2026, 9, 15)));
    }

    #[tokio::test]
    async fn update_without_status_keeps_existing_status() {
        let service = service();
        let request = TodoRequest {
            status: Some(TodoStatus::InProgress),
            description: Some("desc".to_string()),
            due_date: Some(date(2026, 9, 15)),
            ..titled("Task")
        };
        let created = service.create(&request).await.unwrap();

        // Omitted status is preserved while omitted description and
        // due date are cleared.
        let updated = service.update(created.id, &titled("Task")).await.unwrap();
        assert_eq!(updated.status, TodoStatus::InProgress);
        assert!(updated.description.is_none());
        assert!(updated.due_date.is_none());
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let err = service()
            .update(Uuid::new_v4(), &titled("Nope"))
            .await
            .unwrap_err();
        assert!(matches!(err, TodoError::NotFound));
    }

    #[tokio::test]
    async fn update_invalid_request_fails_before_lookup() {
        let err = service()
            .update(Uuid::new_v4(), &TodoRequest::default())
            .await
            .unwrap_err();
        assert!(matches!(err, TodoError::Validation(_)));
    }

    #[tokio::test]
    async fn update_status_changes_only_status() {
        let service = service();
        let request = TodoRequest {
            description: Some("unchanged".to_string()),
            due_date: Some(date(2026, 10, 1)),
            ..titled("Stable")
        };
        let created = service.create(&request).await.unwrap();

        tokio::time::sleep(Duration::from_millis(5)).await;

        let updated = service
            .update_status(created.id, &status_request(TodoStatus::Done))
            .await
            .unwrap();

        assert_eq!(updated.status, TodoStatus::Done);
        assert_eq!(updated.title, created.title);
        assert_eq!(updated.description, created.description);
        assert_eq!(updated.due_date, created.due_date);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at > created.updated_at);
    }

    #[tokio::test]
    async fn update_status_missing_status_fails() {
        let service = service();
        let created = service.create(&titled("Task")).await.unwrap();
        let err = service
            .update_status(created.id, &UpdateStatusRequest { status: None })
            .await
            .unwrap_err();
        assert!(matches!(err, TodoError::Validation(_)));
    }

    #[tokio::test]
    async fn update_status_unknown_id_is_not_found() {
        let err = service()
            .update_status(Uuid::new_v4(), &status_request(TodoStatus::Done))
            .await
            .unwrap_err();
        assert!(matches!(err, TodoError::NotFound));
    }

    #[tokio::test]
    async fn done_todos_remain_mutable() {
        let service = service();
        let created = service.create(&titled("Reopen me")).await.unwrap();
        service
            .update_status(created.id, &status_request(TodoStatus::Done))
            .await
            .unwrap();
        let reopened = service
            .update_status(created.id, &status_request(TodoStatus::Pending))
            .await
            .unwrap();
        assert_eq!(reopened.status, TodoStatus::Pending);
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let service = service();
        let created = service.create(&titled("Disposable")).await.unwrap();
        service.delete(created.id).await.unwrap();

        let err = service.get(created.id).await.unwrap_err();
        assert!(matches!(err, TodoError::NotFound));
    }

    #[tokio::test]
    async fn delete_unknown_id_is_not_found() {
        let err = service().delete(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, TodoError::NotFound));
    }

    #[tokio::test]
    async fn list_returns_newest_first() {
        let service = service();
        service.create(&titled("First")).await.unwrap();
        tokio::time::sleep(Duration::from_millis(5)).await;
        let second = service.create(&titled("Second")).await.unwrap();

        let todos = service.list(&TodoFilter::default()).await.unwrap();
        assert_eq!(todos.len(), 2);
        assert_eq!(todos[0].id, second.id);
    }

    #[tokio::test]
    async fn list_filters_by_status() {
        let service = service();
        service.create(&titled("Pending task")).await.unwrap();
        let done = service
            .create(&TodoRequest {
                status: Some(TodoStatus::Done),
                ..titled("Completed")
            })
            .await
            .unwrap();

        let filter = TodoFilter {
            status: Some(TodoStatus::Done),
            ..TodoFilter::default()
        };
        let todos = service.list(&filter).await.unwrap();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].id, done.id);
    }

    #[tokio::test]
    async fn list_date_filter_excludes_undated_todos() {
        let service = service();
        service.create(&titled("Undated")).await.unwrap();
        let dated = service
            .create(&TodoRequest {
                due_date: Some(date(2026, 9, 10)),
                ..titled("Dated")
            })
            .await
            .unwrap();

        let filter = TodoFilter {
            from_date: Some(date(2026, 9, 1)),
            to_date: Some(date(2026, 9, 30)),
            ..TodoFilter::default()
        };
        let todos = service.list(&filter).await.unwrap();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].id, dated.id);

        // Without a date filter the undated todo is listed.
        let all = service.list(&TodoFilter::default()).await.unwrap();
        assert_eq!(all.len(), 2);
    }
}
