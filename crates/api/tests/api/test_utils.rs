use std::sync::Arc;

use axum_test::TestServer;
use chrono::Utc;
use classboard_api::{ApiState, app};
use classboard_core::{
    models::{review::{Faculty, Review}, timetable::TimetableEntry},
    reviews::FacultyCatalog,
};
use classboard_db::store::{MemoryReviewStore, ReviewStore};
use uuid::Uuid;

pub fn catalog() -> FacultyCatalog {
    FacultyCatalog::new(vec![
        Faculty {
            name: "Dr Meera Rao".to_string(),
            image_url: "https://img.example/rao.jpg".to_string(),
        },
        Faculty {
            name: "Mr Arun Kumar".to_string(),
            image_url: "https://img.example/kumar.jpg".to_string(),
        },
        Faculty {
            name: "Ms Kavya Raman".to_string(),
            image_url: "https://img.example/raman.jpg".to_string(),
        },
    ])
}

pub fn review(faculty: &str, overall: f64) -> Review {
    Review {
        id: Uuid::new_v4(),
        faculty: faculty.to_string(),
        teaching: 6,
        leniency: 6,
        correction: 6,
        da_quiz: 6,
        overall,
        comment: None,
        created_at: Utc::now(),
    }
}

pub fn entry(code: &str, slots: &str) -> TimetableEntry {
    TimetableEntry {
        course_code: code.to_string(),
        course_name: format!("Course {}", code),
        faculty: "Dr Meera Rao".to_string(),
        slots: slots.to_string(),
        room: "AB1-101".to_string(),
    }
}

pub struct TestContext {
    pub server: TestServer,
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_store(Arc::new(MemoryReviewStore::new()))
    }

    pub fn with_reviews(reviews: Vec<Review>) -> Self {
        Self::with_store(Arc::new(MemoryReviewStore::with_reviews(reviews)))
    }

    pub fn with_store(store: Arc<dyn ReviewStore>) -> Self {
        let state = Arc::new(ApiState::new(store, catalog()));
        let server = TestServer::new(app(state)).expect("Failed to start test server");
        Self { server }
    }
}
