use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/reviews", post(handlers::review::submit_review))
        .route("/api/reviews/count", get(handlers::review::review_count))
}
