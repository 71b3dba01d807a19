use color_eyre::eyre::{Result, WrapErr};
use dotenv::dotenv;
use classboard_db::schema::initialize_database;
use tracing::{Level, info};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    // Reviews are only persisted when a database is configured
    let database_url = std::env::var("DATABASE_URL")
        .wrap_err("DATABASE_URL environment variable must be set to run migrations")?;

    info!("Connecting to database...");
    let db_pool = classboard_db::create_pool(&database_url).await?;

    initialize_database(&db_pool).await?;

    Ok(())
}
