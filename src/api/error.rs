use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use std::any::Any;

use crate::logic::FieldErrors;

/// Body of every non-2xx response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<FieldErrors>,
}

impl ErrorResponse {
    pub fn new(message: &str) -> Self {
        Self {
            error: message.to_string(),
            details: None,
        }
    }

    pub fn with_details(message: &str, details: FieldErrors) -> Self {
        Self {
            error: message.to_string(),
            details: Some(details),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Caller supplied missing or malformed parameters.
    #[error("{0}")]
    Validation(#[from] FieldErrors),
    #[error("{0}")]
    NotFound(String),
    /// Anything unexpected. Logged, never shown to the caller.
    #[error("internal error: {0:#}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Validation(details) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::with_details("Invalid query parameters", details),
            ),
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, ErrorResponse::new(&message)),
            ApiError::Internal(err) => {
                log::error!("request failed: {:#}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("Internal server error"),
                )
            }
        };
        (status, Json(body)).into_response()
    }
}

/// Turn a handler panic into the same opaque 500 as any other internal error.
pub fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else {
        "unknown panic payload".to_string()
    };
    ApiError::Internal(anyhow::anyhow!("handler panicked: {}", detail)).into_response()
}
