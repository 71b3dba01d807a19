use crate::models::DbReview;
use classboard_core::models::review::Review;
use eyre::Result;
use sqlx::{Pool, Postgres};

pub async fn create_review(pool: &Pool<Postgres>, review: &Review) -> Result<DbReview> {
    tracing::debug!(
        "Creating review: id={}, faculty={}, overall={:.2}",
        review.id,
        review.faculty,
        review.overall
    );

    let row = sqlx::query_as::<_, DbReview>(
        r#"
        INSERT INTO reviews (id, faculty, teaching, leniency, correction, da_quiz, overall, comment, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING id, faculty, teaching, leniency, correction, da_quiz, overall, comment, created_at
        "#,
    )
    .bind(review.id)
    .bind(&review.faculty)
    .bind(i16::from(review.teaching))
    .bind(i16::from(review.leniency))
    .bind(i16::from(review.correction))
    .bind(i16::from(review.da_quiz))
    .bind(review.overall)
    .bind(review.comment.as_deref())
    .bind(review.created_at)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

pub async fn list_reviews(pool: &Pool<Postgres>) -> Result<Vec<DbReview>> {
    let rows = sqlx::query_as::<_, DbReview>(
        r#"
        SELECT id, faculty, teaching, leniency, correction, da_quiz, overall, comment, created_at
        FROM reviews
        ORDER BY created_at ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

pub async fn count_reviews(pool: &Pool<Postgres>) -> Result<i64> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM reviews")
        .fetch_one(pool)
        .await?;

    Ok(count)
}
