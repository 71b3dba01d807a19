use axum::http::StatusCode;
use classboard_core::{
    grid::CellState,
    models::{
        slot::{Day, GridCell},
        timetable::TimetableResponse,
    },
};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::test_utils::{TestContext, entry};

#[tokio::test]
async fn test_place_entry_returns_entries_and_grid() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/api/timetable/entries")
        .json(&json!({ "entries": [entry("CSE1001", "A1")], "entry": entry("MAT2002", "F1") }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: TimetableResponse = response.json();
    assert_eq!(body.entries.len(), 2);
    let cell = body.grid.cell(GridCell::new(Day::Monday, 1)).unwrap();
    assert_eq!(cell.state, CellState::Occupied);
    assert_eq!(cell.course_code.as_deref(), Some("MAT2002"));
}

#[tokio::test]
async fn test_place_entry_cell_clash_is_conflict() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/api/timetable/entries")
        .json(&json!({ "entries": [entry("CSE1001", "A1")], "entry": entry("CSE1002", "L1") }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CONFLICT);
    let body: Value = response.json();
    assert_eq!(body["kind"], "clash");
    assert_eq!(
        body["error"],
        "Slot clash: L1 on Monday period 0 is already taken by A1 (CSE1001)"
    );
}

#[tokio::test]
async fn test_place_entry_invalid_slot_is_bad_request() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/api/timetable/entries")
        .json(&json!({ "entry": entry("CSE1001", "A1+XYZ") }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["kind"], "invalid_slot");
    assert_eq!(body["error"], "Invalid slot: XYZ");
}

#[tokio::test]
async fn test_place_entry_missing_slot_is_validation_error() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/api/timetable/entries")
        .json(&json!({ "entry": entry("CSE1001", " + ") }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["kind"], "validation");
}

#[tokio::test]
async fn test_clashing_session_entries_are_rejected() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/api/timetable/grid")
        .json(&json!({ "entries": [entry("CSE1001", "D1"), entry("CSE1002", "L4")] }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_remove_entry_frees_cells() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/api/timetable/remove")
        .json(&json!({
            "entries": [entry("CSE1001", "A1"), entry("MAT2002", "F1")],
            "course_code": "CSE1001"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: TimetableResponse = response.json();
    assert_eq!(body.entries, vec![entry("MAT2002", "F1")]);
    let freed = body.grid.cell(GridCell::new(Day::Monday, 0)).unwrap();
    assert_eq!(freed.state, CellState::Empty);

    let response = ctx
        .server
        .post("/api/timetable/remove")
        .json(&json!({ "entries": [], "course_code": "CSE1001" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_render_empty_grid() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/api/timetable/grid")
        .json(&json!({}))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: TimetableResponse = response.json();
    assert!(body.entries.is_empty());
    assert_eq!(body.grid.rows.len(), 5);
}

#[tokio::test]
async fn test_export_is_plain_text_document() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/api/timetable/export")
        .json(&json!({ "entries": [entry("CSE1001", "A1")] }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.header("content-type"),
        "text/plain; charset=utf-8"
    );
    let text = response.text();
    assert!(text.starts_with("CLASS TIMETABLE"));
    assert!(text.contains("Mon |CSE1001"));
    assert!(text.contains("Course CSE1001"));
}

#[tokio::test]
async fn test_malformed_body_is_json_validation_error() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/api/timetable/entries")
        .text(r#"{"entries": ["#)
        .content_type("application/json")
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["kind"], "validation");
}
