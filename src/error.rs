//! Application error type and its HTTP rendering.
//!
//! | Variant      | Status | Body                                  |
//! |--------------|--------|---------------------------------------|
//! | `Validation` | 400    | `{ "field": ["message", ...] }`       |
//! | `BadRequest` | 400    | `{ "error": { code, message, details } }` |
//! | `NotFound`   | 404    | empty                                 |
//! | `Conflict`   | 409    | `{ "error": { ... } }`                |
//! | `Internal`   | 500    | `{ "error": { ... } }`                |

use std::collections::BTreeMap;

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use validator::{ValidationErrors, ValidationErrorsKind};

/// Key used for errors that do not belong to a single field.
pub const NON_FIELD_ERRORS: &str = "non_field_errors";

/// Field name to list of human-readable messages.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error description used in non-validation error bodies.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Validation failed: {fields:?}")]
    Validation { fields: FieldErrors },

    #[error("{message}")]
    BadRequest { message: String, details: Value },

    #[error("{message}")]
    NotFound { message: String, details: Value },

    #[error("{message}")]
    Conflict { message: String, details: Value },

    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    /// Single-field validation failure.
    pub fn invalid_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut fields = FieldErrors::new();
        fields.insert(field.into(), vec![message.into()]);
        Self::Validation { fields }
    }

    /// Validation failure for a foreign key that does not resolve.
    pub fn does_not_exist(field: impl Into<String>, pk: i64) -> Self {
        Self::invalid_field(field, format!("Invalid pk \"{pk}\" - object does not exist."))
    }

    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::BadRequest {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Status code this error is rendered with.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } | AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Converts the error into the structured form used in error bodies.
    pub fn to_error_info(&self) -> ErrorInfo {
        match self {
            AppError::Validation { fields } => ErrorInfo {
                code: "validation_error",
                message: "Validation failed".to_string(),
                details: json!(fields),
            },
            AppError::BadRequest { message, details } => ErrorInfo {
                code: "bad_request",
                message: message.clone(),
                details: details.clone(),
            },
            AppError::NotFound { message, details } => ErrorInfo {
                code: "not_found",
                message: message.clone(),
                details: details.clone(),
            },
            AppError::Conflict { message, details } => ErrorInfo {
                code: "conflict",
                message: message.clone(),
                details: details.clone(),
            },
            AppError::Internal { message, details } => ErrorInfo {
                code: "internal_error",
                message: message.clone(),
                details: details.clone(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match self {
            AppError::Validation { fields } => (status, Json(fields)).into_response(),
            AppError::NotFound { .. } => status.into_response(),
            other => {
                let body = ErrorBody {
                    error: other.to_error_info(),
                };
                (status, Json(body)).into_response()
            }
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields = FieldErrors::new();

        for (field, kind) in errors.into_errors() {
            let ValidationErrorsKind::Field(errs) = kind else {
                continue;
            };
            let messages = errs
                .into_iter()
                .map(|e| match e.message {
                    Some(message) => message.into_owned(),
                    None => e.code.into_owned(),
                })
                .collect();
            fields.insert(field.to_string(), messages);
        }

        Self::Validation { fields }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::invalid_field(NON_FIELD_ERRORS, rejection.body_text())
    }
}

/// An id segment that is not an integer matches no record.
impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        Self::not_found(
            "Resource not found",
            json!({ "reason": rejection.body_text() }),
        )
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        Self::bad_request(
            "Invalid query parameters",
            json!({ "reason": rejection.body_text() }),
        )
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            return AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": db.constraint() }),
            );
        }

        tracing::error!(error = %e, "Database error");
        AppError::internal("Database error", json!({}))
    }
}
