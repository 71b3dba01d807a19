use chrono::{DateTime, Utc};
use classboard_core::models::review::Review;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbReview {
    pub id: Uuid,
    pub faculty: String,
    pub teaching: i16,
    pub leniency: i16,
    pub correction: i16,
    pub da_quiz: i16,
    pub overall: f64,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<DbReview> for Review {
    fn from(row: DbReview) -> Self {
        // The table constraint keeps scores within 0..=10.
        let score = |value: i16| value.clamp(0, 10) as u8;
        Review {
            id: row.id,
            faculty: row.faculty,
            teaching: score(row.teaching),
            leniency: score(row.leniency),
            correction: score(row.correction),
            da_quiz: score(row.da_quiz),
            overall: row.overall,
            comment: row.comment,
            created_at: row.created_at,
        }
    }
}
