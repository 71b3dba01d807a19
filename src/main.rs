use std::sync::Arc;

use classboard_api::{ApiState, config::ApiConfig, init_tracing, load_catalog};
use classboard_db::{
    create_pool,
    schema::initialize_database,
    store::{MemoryReviewStore, PgReviewStore, ReviewStore},
};
use color_eyre::eyre::Result;
use dotenv::dotenv;
use tracing::warn;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ApiConfig::from_env()?;
    init_tracing(config.log_level)?;

    // Pick the review store
    let store: Arc<dyn ReviewStore> = match &config.database_url {
        Some(database_url) => {
            let db_pool = create_pool(database_url).await?;
            initialize_database(&db_pool).await?;
            Arc::new(PgReviewStore::new(db_pool))
        }
        None => {
            warn!("DATABASE_URL not set; reviews are kept in memory and lost on restart");
            Arc::new(MemoryReviewStore::new())
        }
    };

    let catalog = load_catalog(config.faculty_catalog.as_deref())?;
    let state = Arc::new(ApiState::new(store, catalog));

    // Start API server
    classboard_api::start_server(config, state).await?;

    Ok(())
}
