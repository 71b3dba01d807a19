use axum::http::StatusCode;
use classboard_core::models::review::{FacultyReviewsResponse, SearchResponse};
use pretty_assertions::assert_eq;

use crate::test_utils::{TestContext, review};

#[tokio::test]
async fn test_search_returns_summaries() {
    let ctx = TestContext::with_reviews(vec![
        review("Dr Meera Rao", 8.0),
        review("meera rao", 9.0),
        review("Mr Arun Kumar", 4.0),
    ]);

    let response = ctx
        .server
        .get("/api/faculty")
        .add_query_param("q", "dr MEERA")
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: SearchResponse = response.json();
    assert_eq!(body.matches.len(), 1);
    assert_eq!(body.matches[0].faculty.name, "Dr Meera Rao");
    assert_eq!(body.matches[0].review_count, 2);
    assert_eq!(body.matches[0].average_rating, 8.5);
}

#[tokio::test]
async fn test_search_without_query_matches_nothing() {
    let ctx = TestContext::new();

    let response = ctx.server.get("/api/faculty").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: SearchResponse = response.json();
    assert!(body.matches.is_empty());
}

#[tokio::test]
async fn test_faculty_reviews_lists_matching_reviews() {
    let ctx = TestContext::with_reviews(vec![
        review("Ms Kavya Raman", 7.0),
        review("Mr Arun Kumar", 4.0),
    ]);

    let response = ctx.server.get("/api/faculty/kavya%20raman/reviews").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: FacultyReviewsResponse = response.json();
    assert_eq!(body.summary.faculty.name, "Ms Kavya Raman");
    assert_eq!(body.reviews.len(), 1);
    assert_eq!(body.reviews[0].overall, 7.0);
}

#[tokio::test]
async fn test_unknown_faculty_is_not_found() {
    let ctx = TestContext::new();

    let response = ctx.server.get("/api/faculty/nobody/reviews").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}
