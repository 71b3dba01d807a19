use axum::{Json, extract::State};
use classboard_core::{
    errors::ClassError,
    models::review::{ReviewCountResponse, SubmitReviewRequest, SubmitReviewResponse},
    reviews::build_review,
};
use std::sync::Arc;
use tracing::info;

use crate::{ApiState, extract::AppJson, middleware::error_handling::AppError};

/// Stores a review, once per faculty member per session.
///
/// The request carries the session's list of already reviewed faculty; the
/// response returns it with this faculty member added.
///
/// # Errors
///
/// * `ClassError::NotFound` - faculty member is not in the catalog
/// * `ClassError::AlreadySubmitted` - this session already reviewed them
/// * `ClassError::Validation` - score above 10 or comment over 40 characters
/// * `ClassError::Storage` - the store rejected the write
#[axum::debug_handler]
pub async fn submit_review(
    State(state): State<Arc<ApiState>>,
    AppJson(payload): AppJson<SubmitReviewRequest>,
) -> Result<Json<SubmitReviewResponse>, AppError> {
    let faculty = state
        .catalog
        .find(&payload.faculty)
        .ok_or_else(|| ClassError::NotFound(format!("Faculty {} not found", payload.faculty)))?;

    payload.session.admit(&faculty.name)?;
    let review = build_review(faculty, &payload)?;
    let review = state.store.append(review).await?;

    let mut session = payload.session;
    session.record(&faculty.name);
    info!(faculty = %faculty.name, overall = review.overall, "Review submitted");

    Ok(Json(SubmitReviewResponse { review, session }))
}

#[axum::debug_handler]
pub async fn review_count(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<ReviewCountResponse>, AppError> {
    let total = state.store.count().await?;
    Ok(Json(ReviewCountResponse { total }))
}
