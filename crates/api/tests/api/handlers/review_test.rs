use axum::http::StatusCode;
use classboard_core::models::review::{ReviewCountResponse, SubmitReviewResponse};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};

use crate::test_utils::{TestContext, review};

#[tokio::test]
async fn test_submit_review_records_session() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/api/reviews")
        .json(&json!({
            "faculty": "meera rao",
            "teaching": 9,
            "leniency": 7,
            "correction": 8,
            "da_quiz": 6,
            "comment": "Explains well"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: SubmitReviewResponse = response.json();
    assert_eq!(body.review.faculty, "Dr Meera Rao");
    assert_eq!(body.review.overall, 7.5);
    assert_eq!(body.review.comment.as_deref(), Some("Explains well"));
    assert_eq!(body.session.submitted, vec!["Dr Meera Rao"]);

    let count: ReviewCountResponse = ctx.server.get("/api/reviews/count").await.json();
    assert_eq!(count.total, 1);
}

#[tokio::test]
async fn test_second_review_in_session_is_rejected() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/api/reviews")
        .json(&json!({
            "faculty": "Dr Meera Rao",
            "teaching": 5,
            "leniency": 5,
            "correction": 5,
            "da_quiz": 5,
            "session": { "submitted": ["Dr Meera Rao"] }
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CONFLICT);
    let body: Value = response.json();
    assert_eq!(body["kind"], "already_submitted");

    let count: ReviewCountResponse = ctx.server.get("/api/reviews/count").await.json();
    assert_eq!(count.total, 0);
}

#[tokio::test]
async fn test_long_comment_is_rejected() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/api/reviews")
        .json(&json!({
            "faculty": "Mr Arun Kumar",
            "teaching": 5,
            "leniency": 5,
            "correction": 5,
            "da_quiz": 5,
            "comment": "x".repeat(41)
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_review_for_unknown_faculty_is_not_found() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/api/reviews")
        .json(&json!({
            "faculty": "Prof Nobody",
            "teaching": 5,
            "leniency": 5,
            "correction": 5,
            "da_quiz": 5
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_review_count_includes_existing_reviews() {
    let ctx = TestContext::with_reviews(vec![review("Dr Meera Rao", 5.0), review("x", 1.0)]);

    let count: ReviewCountResponse = ctx.server.get("/api/reviews/count").await.json();
    assert_eq!(count.total, 2);
}

#[rstest]
#[case::negative_score(json!({ "faculty": "Dr Meera Rao", "teaching": -1, "leniency": 5, "correction": 5, "da_quiz": 5 }))]
#[case::score_out_of_range(json!({ "faculty": "Dr Meera Rao", "teaching": 300, "leniency": 5, "correction": 5, "da_quiz": 5 }))]
#[case::missing_score(json!({ "faculty": "Dr Meera Rao", "teaching": 5 }))]
#[tokio::test]
async fn test_unparseable_review_is_json_validation_error(#[case] payload: Value) {
    let ctx = TestContext::new();

    let response = ctx.server.post("/api/reviews").json(&payload).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["kind"], "validation");
    assert!(body["error"].as_str().is_some_and(|error| error.starts_with("Validation error")));

    let count: ReviewCountResponse = ctx.server.get("/api/reviews/count").await.json();
    assert_eq!(count.total, 0);
}
