//! HTTP error handling and response types.

use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use crate::db::StoreError;

/// Message returned for every internal failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Error envelope body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Always `false`
    pub success: bool,
    /// Human-readable error message
    pub error: String,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: message.into(),
        }
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Missing or invalid input (400)
    Validation(String),
    /// Unknown resource or route (404)
    NotFound(String),
    /// Route exists but not for this verb (405)
    MethodNotAllowed,
    /// Body exceeds the configured limit (413)
    PayloadTooLarge,
    /// Anything else (500); the detail is logged, never returned
    Internal(String),
    /// Store error, mapped by kind
    Store(StoreError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Store(e) if e.is_not_found() => StatusCode::NOT_FOUND,
            AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            AppError::Validation(msg) => {
                warn!(%msg, "rejected request");
                msg
            }
            AppError::NotFound(msg) => msg,
            AppError::MethodNotAllowed => "Method not allowed".to_string(),
            AppError::PayloadTooLarge => {
                warn!("rejected oversized request body");
                "Request body too large".to_string()
            }
            AppError::Internal(detail) => {
                error!(%detail, "internal error");
                INTERNAL_ERROR_MESSAGE.to_string()
            }
            AppError::Store(e) if e.is_not_found() => e.message().to_string(),
            AppError::Store(e) => {
                error!(error = %e, "store error");
                INTERNAL_ERROR_MESSAGE.to_string()
            }
        };

        (status, Json(ApiError::new(message))).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::Store(err)
    }
}

impl From<BytesRejection> for AppError {
    fn from(rejection: BytesRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge
        } else {
            AppError::Validation(rejection.body_text())
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}
