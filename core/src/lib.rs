//! Domain core for the todo service.
//!
//! # Overview
//! Owns the `Todo` entity and every decision the system makes around it:
//! request validation, status rules, the listing filter, and the
//! orchestration in [`TodoService`]. HTTP shaping and durable storage
//! sit behind this crate's seams — the transport calls the service, and
//! the service talks to any [`TodoStore`].
//!
//! # Design
//! - The service is stateless beyond the store it holds; concurrent-write
//!   consistency is the store's job (last write wins).
//! - Errors split into `Validation`, `NotFound`, and opaque `Store`
//!   passthrough so the transport can map them to status codes.
//! - Types use serde with the wire's camelCase field names; no HTTP
//!   types appear in this crate.

pub mod error;
pub mod service;
pub mod store;
pub mod todo;
pub mod validation;

pub use error::{StoreError, TodoError};
pub use service::TodoService;
pub use store::{InMemoryStore, TodoFilter, TodoStore};
pub use todo::{Todo, TodoRequest, TodoStatus, UpdateStatusRequest};
pub use validation::Violation;
