use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::reviews::ReviewSession;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faculty {
    pub name: String,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: Uuid,
    pub faculty: String,
    pub teaching: u8,
    pub leniency: u8,
    pub correction: u8,
    pub da_quiz: u8,
    pub overall: f64,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitReviewRequest {
    pub faculty: String,
    pub teaching: u8,
    pub leniency: u8,
    pub correction: u8,
    pub da_quiz: u8,
    pub comment: Option<String>,
    #[serde(default)]
    pub session: ReviewSession,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitReviewResponse {
    pub review: Review,
    pub session: ReviewSession,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacultySummary {
    pub faculty: Faculty,
    pub average_rating: f64,
    pub review_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub matches: Vec<FacultySummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacultyReviewsResponse {
    pub summary: FacultySummary,
    pub reviews: Vec<Review>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewCountResponse {
    pub total: usize,
}
