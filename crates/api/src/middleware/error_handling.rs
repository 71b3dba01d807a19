//! # Error Handling Middleware
//!
//! Maps domain errors to HTTP status codes and JSON error bodies so every
//! handler reports failures the same way:
//!
//! ```json
//! { "error": "Slot clash: L1 on Monday period 0 is already taken by A1 (CSE1001)", "kind": "clash" }
//! ```

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use classboard_core::errors::ClassError;
use serde_json::json;
use tracing::error;

/// Application error wrapper that provides HTTP status code mapping
///
/// Handlers return `Result<_, AppError>` and use `?` on anything that
/// yields a [`ClassError`] or an `eyre::Report`.
#[derive(Debug)]
pub struct AppError(pub ClassError);

impl AppError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            ClassError::InvalidSlot(_) => StatusCode::BAD_REQUEST,
            ClassError::Validation(_) => StatusCode::BAD_REQUEST,
            ClassError::Clash(_) => StatusCode::CONFLICT,
            ClassError::AlreadySubmitted(_) => StatusCode::CONFLICT,
            ClassError::NotFound(_) => StatusCode::NOT_FOUND,
            ClassError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ClassError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable machine-readable error kind for clients.
    pub fn kind(&self) -> &'static str {
        match &self.0 {
            ClassError::InvalidSlot(_) => "invalid_slot",
            ClassError::Validation(_) => "validation",
            ClassError::Clash(_) => "clash",
            ClassError::AlreadySubmitted(_) => "already_submitted",
            ClassError::NotFound(_) => "not_found",
            ClassError::Storage(_) => "storage",
            ClassError::Internal(_) => "internal",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("Request failed: {:?}", self.0);
        }

        let body = Json(json!({ "error": self.0.to_string(), "kind": self.kind() }));
        (status, body).into_response()
    }
}

impl From<ClassError> for AppError {
    fn from(err: ClassError) -> Self {
        AppError(err)
    }
}

/// Malformed request bodies are the client's fault, whatever axum's status.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError(ClassError::Validation(rejection.body_text()))
    }
}

/// Infrastructure failures (storage, I/O) surface as `ClassError::Storage`.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(ClassError::Storage(err))
    }
}

pub fn map_error(err: ClassError) -> Response {
    AppError(err).into_response()
}
