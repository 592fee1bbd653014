//! Request validation applied before any mutation.
//!
//! # Design
//! Explicit check functions returning every violation found, so the
//! transport can echo the full list in a 400 body. Pure; no side
//! effects. Length limits count characters, not bytes.

use serde::Serialize;

use crate::todo::{TodoRequest, UpdateStatusRequest};

pub const MAX_TITLE_CHARS: usize = 255;
pub const MAX_DESCRIPTION_CHARS: usize = 2000;

/// A single failed check, named by the offending field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub field: &'static str,
    pub message: String,
}

impl Violation {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Check a create/full-update payload: title present, non-blank, and
/// within limits; description within limits when present.
pub fn validate_request(request: &TodoRequest) -> Vec<Violation> {
    let mut violations = Vec::new();

    match request.title.as_deref() {
        None => violations.push(Violation::new("title", "title is required")),
        Some(title) if title.trim().is_empty() => {
            violations.push(Violation::new("title", "title must not be blank"));
        }
        Some(title) if title.chars().count() > MAX_TITLE_CHARS => {
            violations.push(Violation::new(
                "title",
                format!("title must be at most {MAX_TITLE_CHARS} characters"),
            ));
        }
        Some(_) => {}
    }

    if let Some(description) = &request.description {
        if description.chars().count() > MAX_DESCRIPTION_CHARS {
            violations.push(Violation::new(
                "description",
                format!("description must be at most {MAX_DESCRIPTION_CHARS} characters"),
            ));
        }
    }

    violations
}

/// Check a status-only update payload: status must be present.
pub fn validate_status(request: &UpdateStatusRequest) -> Vec<Violation> {
    match request.status {
        Some(_) => Vec::new(),
        None => vec![Violation::new("status", "status is required")],
    }
}
