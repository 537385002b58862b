//! HTTP error handling and response types.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::api::ValidationError;
use crate::db::repository::RepositoryError;
use crate::db::services::ServiceError;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Every rejected slot name, for unknown-slot failures
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invalid_slots: Option<Vec<String>>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
            invalid_slots: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_invalid_slots(mut self, names: Vec<String>) -> Self {
        self.invalid_slots = Some(names);
        self
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Resource not found
    NotFound(String),
    /// Malformed request
    BadRequest(String),
    /// Well-formed JSON whose fields do not have the expected types
    UnreadableBody(String),
    /// Rejected course or task input
    Validation(ValidationError),
    /// Internal server error
    Internal(String),
    /// Repository error
    Repository(RepositoryError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, ApiError::new("NOT_FOUND", msg)),
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ApiError::new("BAD_REQUEST", msg))
            }
            AppError::UnreadableBody(details) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiError::new("VALIDATION_ERROR", "request body has the wrong shape")
                    .with_details(details),
            ),
            AppError::Validation(e) => {
                let mut body = ApiError::new("VALIDATION_ERROR", e.to_string());
                body = match e {
                    ValidationError::UnknownSlots(names) => body.with_invalid_slots(names),
                    ValidationError::MissingField(field) => body.with_details(field),
                };
                (StatusCode::UNPROCESSABLE_ENTITY, body)
            }
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::new("INTERNAL_ERROR", msg),
            ),
            AppError::Repository(e) => {
                let msg = e.to_string();
                let details = e.context().to_string();
                let (status, code) = if e.is_not_found() {
                    (StatusCode::NOT_FOUND, "NOT_FOUND")
                } else {
                    (StatusCode::INTERNAL_SERVER_ERROR, "REPOSITORY_ERROR")
                };
                let mut body = ApiError::new(code, msg);
                if !details.is_empty() {
                    body = body.with_details(details);
                }
                (status, body)
            }
        };

        (status, Json(error)).into_response()
    }
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        AppError::Repository(err)
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Validation(err)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(e) => AppError::UnreadableBody(e.body_text()),
            other => AppError::BadRequest(other.body_text()),
        }
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(e) => AppError::Validation(e),
            ServiceError::Repository(e) => AppError::Repository(e),
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}
