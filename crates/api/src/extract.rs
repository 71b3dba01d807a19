//! Request extractors whose failures use the [`AppError`] JSON shape.

use axum::extract::FromRequest;

use crate::middleware::error_handling::AppError;

/// `axum::Json` with body rejections (bad JSON, wrong types, missing
/// content type) reported as validation errors.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
