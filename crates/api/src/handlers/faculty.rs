use axum::{
    Json,
    extract::{Path, Query, State},
};
use classboard_core::{
    errors::ClassError,
    models::review::{FacultyReviewsResponse, SearchResponse},
    reviews::{reviews_for, summarize},
};
use serde::Deserialize;
use std::sync::Arc;

use crate::{ApiState, middleware::error_handling::AppError};

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// Free-text name fragment; titles like "Dr" are ignored
    #[serde(default)]
    pub q: String,
}

/// Searches the catalog and attaches each match's rating summary.
///
/// # Endpoint
///
/// ```text
/// GET /api/faculty?q=raman
/// ```
#[axum::debug_handler]
pub async fn search_faculty(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<SearchResponse>, AppError> {
    let matches = state.catalog.search(&query.q);
    if matches.is_empty() {
        return Ok(Json(SearchResponse { matches: Vec::new() }));
    }

    let records = state.store.all().await?;
    let matches = matches
        .into_iter()
        .map(|faculty| summarize(faculty, &records))
        .collect();

    Ok(Json(SearchResponse { matches }))
}

#[axum::debug_handler]
pub async fn faculty_reviews(
    State(state): State<Arc<ApiState>>,
    Path(name): Path<String>,
) -> Result<Json<FacultyReviewsResponse>, AppError> {
    let faculty = state
        .catalog
        .find(&name)
        .ok_or_else(|| ClassError::NotFound(format!("Faculty {} not found", name)))?;

    let records = state.store.all().await?;
    let summary = summarize(faculty, &records);
    let reviews = reviews_for(&records, &faculty.name)
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(FacultyReviewsResponse { summary, reviews }))
}
