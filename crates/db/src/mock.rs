use async_trait::async_trait;
use classboard_core::models::review::Review;
use mockall::mock;

use crate::store::ReviewStore;

// Mock store for testing
mock! {
    pub Store {}

    #[async_trait]
    impl ReviewStore for Store {
        async fn append(&self, review: Review) -> eyre::Result<Review>;
        async fn all(&self) -> eyre::Result<Vec<Review>>;
        async fn count(&self) -> eyre::Result<usize>;
    }
}
