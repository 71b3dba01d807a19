//! # Timetable Handlers
//!
//! The timetable is session state owned by the client. Every request
//! carries the session's current entries; the handler replays them through
//! the [`SlotClashValidator`], applies the operation, and returns the new
//! entry list with a freshly rendered grid. Nothing is stored server-side.

use axum::{
    Json,
    extract::State,
    http::header,
    response::IntoResponse,
};
use classboard_core::{
    grid::export_document,
    models::timetable::{
        PlaceEntryRequest, RemoveEntryRequest, TimetableRequest, TimetableResponse,
    },
    timetable::Timetable,
    validator::SlotClashValidator,
};
use std::sync::Arc;

use crate::{ApiState, extract::AppJson, middleware::error_handling::AppError};

/// Places one new entry on top of the session's entries.
///
/// # Endpoint
///
/// ```text
/// POST /api/timetable/entries
/// ```
///
/// # Errors
///
/// * `ClassError::Validation` - missing course code, name or slot, or a repeated course code
/// * `ClassError::InvalidSlot` - a slot token that is not in the slot table
/// * `ClassError::Clash` - the entry collides with an occupied cell or overlaps one in time
#[axum::debug_handler]
pub async fn place_entry(
    State(state): State<Arc<ApiState>>,
    AppJson(payload): AppJson<PlaceEntryRequest>,
) -> Result<Json<TimetableResponse>, AppError> {
    let validator = SlotClashValidator::new(&state.slots);
    let mut timetable = Timetable::replay(&validator, payload.entries)?;
    validator.place(&mut timetable, payload.entry)?;

    Ok(Json(TimetableResponse::new(&state.slots, timetable)))
}

/// Removes the entry with the given course code and frees its cells.
#[axum::debug_handler]
pub async fn remove_entry(
    State(state): State<Arc<ApiState>>,
    AppJson(payload): AppJson<RemoveEntryRequest>,
) -> Result<Json<TimetableResponse>, AppError> {
    let validator = SlotClashValidator::new(&state.slots);
    let mut timetable = Timetable::replay(&validator, payload.entries)?;
    timetable.remove(&payload.course_code)?;

    Ok(Json(TimetableResponse::new(&state.slots, timetable)))
}

#[axum::debug_handler]
pub async fn render_grid(
    State(state): State<Arc<ApiState>>,
    AppJson(payload): AppJson<TimetableRequest>,
) -> Result<Json<TimetableResponse>, AppError> {
    let validator = SlotClashValidator::new(&state.slots);
    let timetable = Timetable::replay(&validator, payload.entries)?;

    Ok(Json(TimetableResponse::new(&state.slots, timetable)))
}

/// Returns the timetable as a fixed-layout plain-text document.
#[axum::debug_handler]
pub async fn export_timetable(
    State(state): State<Arc<ApiState>>,
    AppJson(payload): AppJson<TimetableRequest>,
) -> Result<impl IntoResponse, AppError> {
    let validator = SlotClashValidator::new(&state.slots);
    let timetable = Timetable::replay(&validator, payload.entries)?;
    let document = export_document(&state.slots, &timetable);

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8"),
            (header::CONTENT_DISPOSITION, "attachment; filename=\"timetable.txt\""),
        ],
        document,
    ))
}
