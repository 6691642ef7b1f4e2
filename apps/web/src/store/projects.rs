use sqlx::PgPool;
use tracing::info;

use crate::errors::AppError;
use crate::models::{NewProject, Project, ProjectId};

pub async fn list_all(pool: &PgPool) -> Result<Vec<Project>, AppError> {
    Ok(sqlx::query_as::<_, Project>(
        "SELECT id, title, description, github_link FROM projects ORDER BY id",
    )
    .fetch_all(pool)
    .await?)
}

pub async fn get(pool: &PgPool, id: ProjectId) -> Result<Option<Project>, AppError> {
    Ok(sqlx::query_as::<_, Project>(
        "SELECT id, title, description, github_link FROM projects WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?)
}

pub async fn create(pool: &PgPool, project: &NewProject) -> Result<Project, AppError> {
    project.validate()?;
    let row = sqlx::query_as::<_, Project>(
        r#"
        INSERT INTO projects (title, description, github_link)
        VALUES ($1, $2, $3)
        RETURNING id, title, description, github_link
        "#,
    )
    .bind(&project.title)
    .bind(&project.description)
    .bind(&project.github_link)
    .fetch_one(pool)
    .await?;

    info!("Created project {} ({})", row.id, row.title);
    Ok(row)
}

pub async fn update(
    pool: &PgPool,
    id: ProjectId,
    project: &NewProject,
) -> Result<Option<Project>, AppError> {
    project.validate()?;
    Ok(sqlx::query_as::<_, Project>(
        r#"
        UPDATE projects
        SET title = $2, description = $3, github_link = $4
        WHERE id = $1
        RETURNING id, title, description, github_link
        "#,
    )
    .bind(id)
    .bind(&project.title)
    .bind(&project.description)
    .bind(&project.github_link)
    .fetch_optional(pool)
    .await?)
}

pub async fn delete(pool: &PgPool, id: ProjectId) -> Result<bool, AppError> {
    let result = sqlx::query("DELETE FROM projects WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
