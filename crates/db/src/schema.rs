use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create reviews table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS reviews (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            faculty VARCHAR(255) NOT NULL,
            teaching SMALLINT NOT NULL,
            leniency SMALLINT NOT NULL,
            correction SMALLINT NOT NULL,
            da_quiz SMALLINT NOT NULL,
            overall DOUBLE PRECISION NOT NULL,
            comment VARCHAR(40) NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_scores CHECK (
                teaching BETWEEN 0 AND 10
                AND leniency BETWEEN 0 AND 10
                AND correction BETWEEN 0 AND 10
                AND da_quiz BETWEEN 0 AND 10
            )
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_reviews_faculty ON reviews(faculty);")
        .execute(pool)
        .await?;
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_reviews_created_at ON reviews(created_at);")
        .execute(pool)
        .await?;

    info!("Database schema initialized successfully.");
    Ok(())
}
