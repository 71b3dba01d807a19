//! # Review Storage
//!
//! [`ReviewStore`] is the seam between the API and wherever reviews live.
//! [`PgReviewStore`] keeps them in PostgreSQL; [`MemoryReviewStore`] keeps
//! them in process and is used when no database is configured.

use async_trait::async_trait;
use classboard_core::models::review::Review;
use eyre::Result;
use tokio::sync::RwLock;
use tracing::info;

use crate::{DbPool, repositories};

#[async_trait]
pub trait ReviewStore: Send + Sync {
    /// Appends a review and returns it as stored.
    async fn append(&self, review: Review) -> Result<Review>;

    /// All reviews, oldest first.
    async fn all(&self) -> Result<Vec<Review>>;

    async fn count(&self) -> Result<usize>;
}

pub struct PgReviewStore {
    pool: DbPool,
}

impl PgReviewStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReviewStore for PgReviewStore {
    async fn append(&self, review: Review) -> Result<Review> {
        let row = repositories::review::create_review(&self.pool, &review).await?;
        info!(faculty = %row.faculty, "Stored review");
        Ok(row.into())
    }

    async fn all(&self) -> Result<Vec<Review>> {
        let rows = repositories::review::list_reviews(&self.pool).await?;
        Ok(rows.into_iter().map(Review::from).collect())
    }

    async fn count(&self) -> Result<usize> {
        let count = repositories::review::count_reviews(&self.pool).await?;
        Ok(usize::try_from(count)?)
    }
}

#[derive(Default)]
pub struct MemoryReviewStore {
    reviews: RwLock<Vec<Review>>,
}

impl MemoryReviewStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reviews(reviews: Vec<Review>) -> Self {
        Self {
            reviews: RwLock::new(reviews),
        }
    }
}

#[async_trait]
impl ReviewStore for MemoryReviewStore {
    async fn append(&self, review: Review) -> Result<Review> {
        self.reviews.write().await.push(review.clone());
        info!(faculty = %review.faculty, "Stored review in memory");
        Ok(review)
    }

    async fn all(&self) -> Result<Vec<Review>> {
        Ok(self.reviews.read().await.clone())
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.reviews.read().await.len())
    }
}
