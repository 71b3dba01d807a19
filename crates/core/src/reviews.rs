//! # Faculty Reviews
//!
//! Catalog search, rating aggregation and per-session submission tracking.
//! Storage lives behind the `ReviewStore` trait in the db crate; everything
//! here is pure.

use std::sync::LazyLock;

use chrono::Utc;
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{ClassError, ClassResult};
use crate::models::review::{Faculty, FacultySummary, Review, SubmitReviewRequest};

pub const MAX_SCORE: u8 = 10;
pub const MAX_COMMENT_CHARS: usize = 40;

static TITLE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(dr|mr|ms)\s+").expect("title prefix pattern is valid"));

/// Normalizes a faculty name for comparison: trimmed, lowercase, and
/// without a leading `dr`/`mr`/`ms` title.
pub fn clean_name(name: &str) -> String {
    let lowered = name.trim().to_lowercase();
    TITLE_PREFIX.replace(&lowered, "").into_owned()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FacultyCatalog {
    faculty: Vec<Faculty>,
}

impl FacultyCatalog {
    pub fn new(faculty: Vec<Faculty>) -> Self {
        Self { faculty }
    }

    /// Parses a JSON array of `{ "name", "image_url" }` objects.
    pub fn from_json(json: &str) -> ClassResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| ClassError::Validation(format!("Invalid faculty catalog: {}", e)))
    }

    pub fn len(&self) -> usize {
        self.faculty.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faculty.is_empty()
    }

    /// Catalog entries whose cleaned name contains the cleaned query.
    /// A blank query matches nothing.
    pub fn search(&self, query: &str) -> Vec<&Faculty> {
        let query = clean_name(query);
        if query.is_empty() {
            return Vec::new();
        }
        self.faculty
            .iter()
            .filter(|faculty| clean_name(&faculty.name).contains(&query))
            .collect()
    }

    pub fn find(&self, name: &str) -> Option<&Faculty> {
        let name = clean_name(name);
        self.faculty
            .iter()
            .find(|faculty| clean_name(&faculty.name) == name)
    }
}

/// Mean of the given scores, or 0 when there are none.
pub fn overall_rating(scores: &[u8]) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }
    scores.iter().map(|&s| f64::from(s)).sum::<f64>() / scores.len() as f64
}

pub fn reviews_for<'a>(records: &'a [Review], faculty_name: &str) -> Vec<&'a Review> {
    let name = clean_name(faculty_name);
    records
        .iter()
        .filter(|review| clean_name(&review.faculty) == name)
        .collect()
}

pub fn summarize(faculty: &Faculty, records: &[Review]) -> FacultySummary {
    let reviews = reviews_for(records, &faculty.name);
    let average_rating = if reviews.is_empty() {
        0.0
    } else {
        let total: f64 = reviews.iter().map(|review| review.overall).sum();
        (total / reviews.len() as f64).min(f64::from(MAX_SCORE))
    };

    FacultySummary {
        faculty: faculty.clone(),
        average_rating,
        review_count: reviews.len(),
    }
}

/// Builds a review for `faculty` from a submission, checking score bounds
/// and comment length.
pub fn build_review(faculty: &Faculty, request: &SubmitReviewRequest) -> ClassResult<Review> {
    let scores = [
        ("Teaching", request.teaching),
        ("Leniency", request.leniency),
        ("Correction", request.correction),
        ("DA/Quiz", request.da_quiz),
    ];
    for (label, score) in scores {
        if score > MAX_SCORE {
            return Err(ClassError::Validation(format!(
                "{} must be between 0 and {}",
                label, MAX_SCORE
            )));
        }
    }

    let comment = request
        .comment
        .as_deref()
        .map(str::trim)
        .filter(|comment| !comment.is_empty());
    if let Some(comment) = comment {
        if comment.chars().count() > MAX_COMMENT_CHARS {
            return Err(ClassError::Validation(format!(
                "Comment must be at most {} characters",
                MAX_COMMENT_CHARS
            )));
        }
    }

    let values: Vec<u8> = scores.iter().map(|(_, score)| *score).collect();
    Ok(Review {
        id: Uuid::new_v4(),
        faculty: faculty.name.clone(),
        teaching: request.teaching,
        leniency: request.leniency,
        correction: request.correction,
        da_quiz: request.da_quiz,
        overall: overall_rating(&values),
        comment: comment.map(str::to_string),
        created_at: Utc::now(),
    })
}

/// Faculty already reviewed in this session. Clients send it with every
/// submission and get the updated list back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewSession {
    #[serde(default)]
    pub submitted: Vec<String>,
}

impl ReviewSession {
    pub fn has_submitted(&self, faculty_name: &str) -> bool {
        let name = clean_name(faculty_name);
        self.submitted.iter().any(|done| clean_name(done) == name)
    }

    /// Fails if `faculty_name` was already reviewed in this session.
    pub fn admit(&self, faculty_name: &str) -> ClassResult<()> {
        if self.has_submitted(faculty_name) {
            return Err(ClassError::AlreadySubmitted(format!(
                "Review for {} has already been submitted. You can only submit one review per faculty member.",
                faculty_name
            )));
        }
        Ok(())
    }

    pub fn record(&mut self, faculty_name: &str) {
        if !self.has_submitted(faculty_name) {
            self.submitted.push(faculty_name.to_string());
        }
    }
}
