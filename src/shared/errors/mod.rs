//! Error Types
//!
//! Domain-specific error types with proper HTTP status code mapping.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Domain-level errors representing business rule violations
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid network name: {0}")]
    InvalidName(String),

    #[error("Network {0} already has a root block")]
    AlreadyClaimed(String),
}

/// Repository-level errors for data access failures
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Data mapping error: {0}")]
    Mapping(String),
}

/// Failures of the network authority (root block verification and descriptor signing)
#[derive(Debug, Error)]
pub enum AuthorityError {
    #[error("identity public key is unusable: {0}")]
    InvalidPublicKey(String),

    #[error("authority key file is unusable: {0}")]
    KeyFile(String),

    #[error("authority key could not be unlocked with the configured password")]
    Locked,

    #[error("descriptor encoding failed: {0}")]
    Encoding(String),
}

impl AuthorityError {
    /// Machine-readable reason carried alongside the unexpected error code
    #[must_use]
    pub fn reason(&self) -> &'static str {
        match self {
            Self::InvalidPublicKey(_) => "invalid_public_key",
            Self::KeyFile(_) => "key_file",
            Self::Locked => "locked",
            Self::Encoding(_) => "encoding",
        }
    }
}

/// Use case-level errors for application logic failures
#[derive(Debug, Error)]
pub enum UseCaseError {
    #[error("Validation failed: {0:?}")]
    Validation(Vec<String>),

    #[error("{resource} '{id}' was not found")]
    NotFound { resource: String, id: String },

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("The root block was not properly signed")]
    SignatureInvalid,

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("Unexpected error: {0}")]
    Authority(#[from] AuthorityError),
}

impl UseCaseError {
    /// Shorthand for a missing network
    #[must_use]
    pub fn network_not_found(id: impl ToString) -> Self {
        Self::NotFound {
            resource: "Network".to_string(),
            id: id.to_string(),
        }
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::SignatureInvalid => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::Domain(DomainError::InvalidName(_)) => StatusCode::BAD_REQUEST,
            Self::Domain(DomainError::AlreadyClaimed(_)) => StatusCode::CONFLICT,
            Self::Repository(_) | Self::Authority(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) | Self::Domain(DomainError::InvalidName(_)) => "VALIDATION_ERROR",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Unauthorized(_) => "UNAUTHORIZED",
            Self::Forbidden(_) => "FORBIDDEN",
            Self::SignatureInvalid => "SIGNATURE_INVALID",
            Self::Domain(DomainError::AlreadyClaimed(_)) => "ALREADY_CLAIMED",
            Self::Repository(_) => "INTERNAL_ERROR",
            Self::Authority(_) => "UNEXPECTED_ERROR",
        }
    }
}

/// API error response for HTTP responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    UseCase(#[from] UseCaseError),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Invalid UUID: {0}")]
    InvalidUuid(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

/// Error envelope returned by every failing endpoint
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
    pub timestamp: String,
}

impl ErrorResponse {
    #[must_use]
    pub fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: message.into(),
            code: code.to_string(),
            reason: None,
            details: None,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Field-level error for validation errors
#[derive(Debug, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::UseCase(uc_error) => {
                let status = uc_error.status_code();
                let message = match uc_error {
                    // Store failures stay in the logs
                    UseCaseError::Repository(err) => {
                        tracing::error!(error = %err, "Repository failure while handling request");
                        "An unexpected error occurred".to_string()
                    }
                    UseCaseError::Authority(err) => {
                        tracing::error!(error = %err, "Network authority failure while handling request");
                        uc_error.to_string()
                    }
                    _ => uc_error.to_string(),
                };
                let mut body = ErrorResponse::new(uc_error.error_code(), message);
                match uc_error {
                    UseCaseError::Validation(errors) => {
                        body.details = Some(
                            errors
                                .iter()
                                .map(|e| {
                                    let (field, message) = e.split_once(": ").unwrap_or(("", e.as_str()));
                                    FieldError {
                                        field: field.to_string(),
                                        message: message.to_string(),
                                    }
                                })
                                .collect(),
                        );
                    }
                    UseCaseError::Authority(err) => body.reason = Some(err.reason().to_string()),
                    _ => {}
                }
                (status, body)
            }
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ErrorResponse::new("BAD_REQUEST", msg.clone())),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, ErrorResponse::new("UNAUTHORIZED", msg.clone())),
            ApiError::InvalidUuid(msg) => (StatusCode::BAD_REQUEST, ErrorResponse::new("INVALID_UUID", msg.clone())),
            ApiError::Internal(err) => {
                tracing::error!(error = %err, "Internal error while handling request");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("INTERNAL_ERROR", "An unexpected error occurred"),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<uuid::Error> for ApiError {
    fn from(err: uuid::Error) -> Self {
        ApiError::InvalidUuid(err.to_string())
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        let messages: Vec<String> = err
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| {
                    format!(
                        "{}: {}",
                        field,
                        e.message.as_ref().map_or("invalid", |m| m.as_ref())
                    )
                })
            })
            .collect();
        ApiError::UseCase(UseCaseError::Validation(messages))
    }
}
