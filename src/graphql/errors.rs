use async_graphql::*;

use crate::errors::{CoreError, CoreErrorKind};

/// Structured error builder for consistent error handling
pub struct StructuredError;

impl StructuredError {
    /// Create an "unauthorized" error
    pub fn unauthorized(message: impl Into<String>) -> Error {
        Error::new(message.into()).extend_with(|_, e| {
            e.set("code", "UNAUTHORIZED");
        })
    }

    /// Create a "validation failed" error
    pub fn validation(field: &str, message: impl Into<String>) -> Error {
        Error::new(format!(
            "Validation failed for '{}': {}",
            field,
            message.into()
        ))
        .extend_with(|_, e| {
            e.set("code", "VALIDATION_FAILED");
            e.set("field", field);
        })
    }
}

fn error_code(kind: CoreErrorKind) -> &'static str {
    match kind {
        CoreErrorKind::NotFound => "NOT_FOUND",
        CoreErrorKind::Validation => "VALIDATION_FAILED",
        CoreErrorKind::Conflict => "CONFLICT",
        CoreErrorKind::Forbidden => "FORBIDDEN",
        CoreErrorKind::Unauthorized => "UNAUTHORIZED",
        CoreErrorKind::Database => "DATABASE_ERROR",
    }
}

/// Maps a service error onto a GraphQL error. The message is kept as is and
/// any fields are copied into the extensions next to `code`.
pub fn core_error_to_graphql_error(err: CoreError) -> Error {
    let code = error_code(err.kind());
    let fields = err.fields().cloned();

    Error::new(err.message()).extend_with(move |_, e| {
        e.set("code", code);
        if let Some(fields) = &fields {
            for (key, value) in fields {
                e.set(key.as_str(), value.as_str());
            }
        }
    })
}
