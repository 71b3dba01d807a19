use axum::{Router, routing::get};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/faculty", get(handlers::faculty::search_faculty))
        .route(
            "/api/faculty/:name/reviews",
            get(handlers::faculty::faculty_reviews),
        )
}
