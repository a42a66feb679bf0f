//! # REST API Errors
//!
//! Every failure leaves the service as a JSON body carrying a
//! machine-readable `kind`, a human-readable `message` and the status code.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, warn};

use crate::store::{ProductId, StoreError};

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

/// REST API errors
#[derive(Debug, Clone, Error)]
pub enum RestError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Missing or invalid body field, or a non-numeric path id
    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    /// No product with this id
    #[error("Product {0} not found")]
    NotFound(ProductId),

    /// Name already taken
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Body exceeds the request size limit
    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Storage failure
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RestError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            RestError::MalformedRequest(_) => StatusCode::BAD_REQUEST,
            RestError::NotFound(_) => StatusCode::NOT_FOUND,
            RestError::Conflict(_) => StatusCode::CONFLICT,
            RestError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            RestError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Machine-readable error kind
    pub fn kind(&self) -> &'static str {
        match self {
            RestError::MalformedRequest(_) => "malformed_request",
            RestError::NotFound(_) => "not_found",
            RestError::Conflict(_) => "conflict",
            RestError::PayloadTooLarge(_) => "payload_too_large",
            RestError::Internal(_) => "internal",
        }
    }
}

impl From<StoreError> for RestError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => RestError::NotFound(id),
            StoreError::DuplicateName(_) => RestError::Conflict(err.to_string()),
            StoreError::InvalidField(msg) => RestError::MalformedRequest(msg),
            StoreError::LockPoisoned | StoreError::Db(_) => RestError::Internal(err.to_string()),
        }
    }
}

impl From<JsonRejection> for RestError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return RestError::PayloadTooLarge(rejection.body_text());
        }
        RestError::MalformedRequest(rejection.body_text())
    }
}

impl From<PathRejection> for RestError {
    fn from(rejection: PathRejection) -> Self {
        RestError::MalformedRequest(rejection.body_text())
    }
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub kind: String,
    pub message: String,
    pub code: u16,
}

impl From<RestError> for ErrorResponse {
    fn from(err: RestError) -> Self {
        Self {
            kind: err.kind().to_string(),
            code: err.status_code().as_u16(),
            message: err.to_string(),
        }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(kind = self.kind(), error = %self, "request failed");
        } else {
            warn!(kind = self.kind(), error = %self, "request rejected");
        }

        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}
