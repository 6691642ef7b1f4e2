use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::{DescriptionItem, DescriptionItemId, JobId, NewDescriptionItem};

/// Every item, each job's bullets in the order they were added.
pub async fn list_all(pool: &PgPool) -> Result<Vec<DescriptionItem>, AppError> {
    Ok(sqlx::query_as::<_, DescriptionItem>(
        "SELECT id, title, job_id FROM description_items ORDER BY created_at, id",
    )
    .fetch_all(pool)
    .await?)
}

pub async fn list_for_job(pool: &PgPool, job_id: JobId) -> Result<Vec<DescriptionItem>, AppError> {
    Ok(sqlx::query_as::<_, DescriptionItem>(
        "SELECT id, title, job_id FROM description_items WHERE job_id = $1 ORDER BY created_at, id",
    )
    .bind(job_id)
    .fetch_all(pool)
    .await?)
}

pub async fn get(
    pool: &PgPool,
    id: DescriptionItemId,
) -> Result<Option<DescriptionItem>, AppError> {
    Ok(sqlx::query_as::<_, DescriptionItem>(
        "SELECT id, title, job_id FROM description_items WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?)
}

/// Fails with `NotFound` if `item.job_id` doesn't reference an existing job.
pub async fn create(pool: &PgPool, item: &NewDescriptionItem) -> Result<DescriptionItem, AppError> {
    item.validate()?;
    sqlx::query_as::<_, DescriptionItem>(
        r#"
        INSERT INTO description_items (id, title, job_id)
        VALUES ($1, $2, $3)
        RETURNING id, title, job_id
        "#,
    )
    .bind(DescriptionItemId::generate())
    .bind(&item.title)
    .bind(item.job_id)
    .fetch_one(pool)
    .await
    .map_err(|e| missing_job(e, item.job_id))
}

pub async fn update(
    pool: &PgPool,
    id: DescriptionItemId,
    item: &NewDescriptionItem,
) -> Result<Option<DescriptionItem>, AppError> {
    item.validate()?;
    sqlx::query_as::<_, DescriptionItem>(
        r#"
        UPDATE description_items
        SET title = $2, job_id = $3
        WHERE id = $1
        RETURNING id, title, job_id
        "#,
    )
    .bind(id)
    .bind(&item.title)
    .bind(item.job_id)
    .fetch_optional(pool)
    .await
    .map_err(|e| missing_job(e, item.job_id))
}

pub async fn delete(pool: &PgPool, id: DescriptionItemId) -> Result<bool, AppError> {
    let result = sqlx::query("DELETE FROM description_items WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

fn missing_job(err: sqlx::Error, job_id: JobId) -> AppError {
    if let sqlx::Error::Database(db) = &err {
        if db.is_foreign_key_violation() {
            return AppError::NotFound(format!("Job {job_id} not found"));
        }
    }
    AppError::Database(err)
}
