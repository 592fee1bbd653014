//! Error taxonomy for the todo service.
//!
//! # Design
//! `NotFound` gets a dedicated variant because the transport maps it to
//! 404 while validation failures become 400. Store failures pass
//! through opaque and unretried; the service never recovers locally.

use thiserror::Error;

use crate::validation::Violation;

/// Failure reported by a [`crate::store::TodoStore`] implementation.
///
/// Opaque to the service, which only propagates it upward.
#[derive(Debug, Clone, Error)]
#[error("store error: {0}")]
pub struct StoreError(pub String);

/// Errors returned by [`crate::service::TodoService`] operations.
#[derive(Debug, Error)]
pub enum TodoError {
    /// The request failed one or more validation checks.
    #[error("validation failed ({} violation(s))", .0.len())]
    Validation(Vec<Violation>),

    /// The referenced id does not resolve to an existing todo.
    #[error("todo not found")]
    NotFound,

    /// The persistence collaborator failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}
