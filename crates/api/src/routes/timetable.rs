use axum::{Router, routing::post};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/timetable/entries",
            post(handlers::timetable::place_entry),
        )
        .route(
            "/api/timetable/remove",
            post(handlers::timetable::remove_entry),
        )
        .route("/api/timetable/grid", post(handlers::timetable::render_grid))
        .route(
            "/api/timetable/export",
            post(handlers::timetable::export_timetable),
        )
}
