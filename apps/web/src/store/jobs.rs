use sqlx::PgPool;
use tracing::info;

use crate::errors::AppError;
use crate::models::{Job, JobId, NewJob};

/// Every job row. Ordered newest first for stable rendering only.
pub async fn list_all(pool: &PgPool) -> Result<Vec<Job>, AppError> {
    Ok(sqlx::query_as::<_, Job>(
        "SELECT id, title, company, date_started, date_ended FROM jobs ORDER BY date_started DESC",
    )
    .fetch_all(pool)
    .await?)
}

pub async fn get(pool: &PgPool, id: JobId) -> Result<Option<Job>, AppError> {
    Ok(sqlx::query_as::<_, Job>(
        "SELECT id, title, company, date_started, date_ended FROM jobs WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?)
}

pub async fn create(pool: &PgPool, job: &NewJob) -> Result<Job, AppError> {
    job.validate()?;
    let row = sqlx::query_as::<_, Job>(
        r#"
        INSERT INTO jobs (id, title, company, date_started, date_ended)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, title, company, date_started, date_ended
        "#,
    )
    .bind(JobId::generate())
    .bind(&job.title)
    .bind(&job.company)
    .bind(job.date_started)
    .bind(job.date_ended)
    .fetch_one(pool)
    .await?;

    info!("Created job {} ({})", row.id, row.title);
    Ok(row)
}

/// Replaces every editable field. Returns `None` when the job doesn't exist.
pub async fn update(pool: &PgPool, id: JobId, job: &NewJob) -> Result<Option<Job>, AppError> {
    job.validate()?;
    Ok(sqlx::query_as::<_, Job>(
        r#"
        UPDATE jobs
        SET title = $2, company = $3, date_started = $4, date_ended = $5
        WHERE id = $1
        RETURNING id, title, company, date_started, date_ended
        "#,
    )
    .bind(id)
    .bind(&job.title)
    .bind(&job.company)
    .bind(job.date_started)
    .bind(job.date_ended)
    .fetch_optional(pool)
    .await?)
}

/// Deletes the job and, through the foreign key, all its description items.
pub async fn delete(pool: &PgPool, id: JobId) -> Result<bool, AppError> {
    let result = sqlx::query("DELETE FROM jobs WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    let deleted = result.rows_affected() > 0;
    if deleted {
        info!("Deleted job {id}");
    }
    Ok(deleted)
}
