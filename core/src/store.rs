//! Persistence seam: the `TodoStore` capability set and an in-memory
//! implementation.
//!
//! # Design
//! The service depends only on the [`TodoStore`] trait (keyed lookup,
//! insert-or-overwrite, removal, filtered scan); the concrete backend is
//! chosen at construction. [`InMemoryStore`] keeps todos in a `HashMap`
//! behind an async `RwLock` and tags each record with the sequence
//! number of its first insert, so the newest-first scan is deterministic
//! even when two todos share a creation timestamp.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::StoreError;
use crate::todo::{Todo, TodoStatus};

/// Listing filter. Every bound is optional; see [`TodoFilter::matches`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TodoFilter {
    pub status: Option<TodoStatus>,
    pub from_date: Option<NaiveDate>,
    pub to_date: Option<NaiveDate>,
}

impl TodoFilter {
    /// Whether `todo` belongs in a listing under this filter.
    ///
    /// A todo without a due date cannot satisfy a date comparison, so it
    /// is excluded whenever `from_date` or `to_date` is set, and
    /// included otherwise.
    pub fn matches(&self, todo: &Todo) -> bool {
        if let Some(status) = self.status {
            if todo.status != status {
                return false;
            }
        }
        if let Some(from) = self.from_date {
            match todo.due_date {
                Some(due) if due >= from => {}
                _ => return false,
            }
        }
        if let Some(to) = self.to_date {
            match todo.due_date {
                Some(due) if due <= to => {}
                _ => return false,
            }
        }
        true
    }
}

/// Durable keyed storage for todos.
#[async_trait]
pub trait TodoStore: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Todo>, StoreError>;

    /// Insert or fully overwrite the record keyed by `todo.id`.
    async fn save(&self, todo: Todo) -> Result<Todo, StoreError>;

    /// Remove the record keyed by `id`, if any.
    async fn delete(&self, id: Uuid) -> Result<(), StoreError>;

    /// Matching todos ordered by creation time, newest first.
    async fn search(&self, filter: &TodoFilter) -> Result<Vec<Todo>, StoreError>;
}

#[derive(Debug, Clone)]
struct Entry {
    seq: u64,
    todo: Todo,
}

#[derive(Debug, Default)]
struct Inner {
    todos: HashMap<Uuid, Entry>,
    next_seq: u64,
}

/// In-memory [`TodoStore`]. Cloning shares the underlying map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    inner: Arc<RwLock<Inner>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoStore for InMemoryStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Todo>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.todos.get(&id).map(|entry| entry.todo.clone()))
    }

    async fn save(&self, todo: Todo) -> Result<Todo, StoreError> {
        let mut inner = self.inner.write().await;
        // Overwrites keep the sequence assigned at first insert.
        let seq = match inner.todos.get(&todo.id) {
            Some(existing) => existing.seq,
            None => {
                let seq = inner.next_seq;
                inner.next_seq += 1;
                seq
            }
        };
        inner.todos.insert(
            todo.id,
            Entry {
                seq,
                todo: todo.clone(),
            },
        );
        Ok(todo)
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        self.inner.write().await.todos.remove(&id);
        Ok(())
    }

    async fn search(&self, filter: &TodoFilter) -> Result<Vec<Todo>, StoreError> {
        let inner = self.inner.read().await;
        let mut entries: Vec<&Entry> = inner
            .todos
            .values()
            .filter(|entry| filter.matches(&entry.todo))
            .collect();
        entries.sort_by(|a, b| {
            b.todo
                .created_at
                .cmp(&a.todo.created_at)
                .then(b.seq.cmp(&a.seq))
        });
        Ok(entries.into_iter().map(|entry| entry.todo.clone()).collect())
    }
}
