use std::{io::Write, sync::Arc};

use axum::http::StatusCode;
use classboard_api::{config::parse_log_level, load_catalog, middleware::error_handling::map_error};
use classboard_core::errors::ClassError;
use classboard_db::mock::MockStore;
use rstest::rstest;
use serde_json::Value;
use tracing::Level;

use crate::test_utils::TestContext;

#[rstest]
#[case(ClassError::InvalidSlot("Z9".into()), StatusCode::BAD_REQUEST)]
#[case(ClassError::Validation("Slot is required".into()), StatusCode::BAD_REQUEST)]
#[case(ClassError::Clash("A1 taken".into()), StatusCode::CONFLICT)]
#[case(ClassError::AlreadySubmitted("Dr Meera Rao".into()), StatusCode::CONFLICT)]
#[case(ClassError::NotFound("Faculty".into()), StatusCode::NOT_FOUND)]
#[case(ClassError::Storage(eyre::eyre!("Database error")), StatusCode::INTERNAL_SERVER_ERROR)]
fn test_error_status_mapping(#[case] error: ClassError, #[case] expected: StatusCode) {
    let response = map_error(error);
    assert_eq!(response.status(), expected);
}

#[tokio::test]
async fn test_storage_failure_is_internal_error() {
    let mut store = MockStore::new();
    store
        .expect_count()
        .returning(|| Err(eyre::eyre!("connection reset")));
    let ctx = TestContext::with_store(Arc::new(store));

    let response = ctx.server.get("/api/reviews/count").await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["kind"], "storage");
}

#[tokio::test]
async fn test_health_reports_loaded_tables() {
    let ctx = TestContext::new();

    let body: Value = ctx.server.get("/health").await.json();

    assert_eq!(body["status"], "ok");
    assert_eq!(body["faculty"], 3);
    assert!(body["slot_codes"].as_u64().unwrap() > 60);
}

#[test]
fn test_load_catalog_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[{{"name": "Dr Meera Rao", "image_url": "https://img.example/rao.jpg"}}]"#
    )
    .unwrap();

    let catalog = load_catalog(Some(file.path())).unwrap();
    assert_eq!(catalog.len(), 1);

    assert!(load_catalog(None).unwrap().is_empty());
}

#[rstest]
#[case("debug", Level::DEBUG)]
#[case(" WARN ", Level::WARN)]
#[case("verbose", Level::INFO)]
fn test_parse_log_level(#[case] value: &str, #[case] expected: Level) {
    assert_eq!(parse_log_level(value), expected);
}
