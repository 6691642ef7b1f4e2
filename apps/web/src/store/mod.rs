//! Persistence for the three resume tables.
//!
//! The submodules hold the CRUD functions per table. Records are maintained
//! through these and through migrations; the site itself only reads, via
//! [`ResumeStore`].
#![allow(dead_code)]

use async_trait::async_trait;
use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::{DescriptionItem, Job, Project};

pub mod description_items;
pub mod jobs;
pub mod projects;

/// Read side used by the page handlers: full, unfiltered table contents.
/// Callers must not depend on the row order.
///
/// Carried in `AppState` as `Arc<dyn ResumeStore>`.
#[async_trait]
pub trait ResumeStore: Send + Sync {
    async fn list_jobs(&self) -> Result<Vec<Job>, AppError>;
    async fn list_description_items(&self) -> Result<Vec<DescriptionItem>, AppError>;
    async fn list_projects(&self) -> Result<Vec<Project>, AppError>;
}

/// PostgreSQL-backed store.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl ResumeStore for PgStore {
    async fn list_jobs(&self) -> Result<Vec<Job>, AppError> {
        jobs::list_all(&self.pool).await
    }

    async fn list_description_items(&self) -> Result<Vec<DescriptionItem>, AppError> {
        description_items::list_all(&self.pool).await
    }

    async fn list_projects(&self) -> Result<Vec<Project>, AppError> {
        projects::list_all(&self.pool).await
    }
}
