//! Listing pages: each one fetches whole tables and renders them.

use askama::Template;
use axum::{extract::State, response::Html};

use crate::errors::AppError;
use crate::state::AppState;
use crate::store::ResumeStore;
use crate::views::{HomePage, JobsPage, ProjectsPage};

pub async fn home_page(store: &dyn ResumeStore) -> Result<HomePage, AppError> {
    Ok(HomePage {
        projects: store.list_projects().await?,
    })
}

pub async fn jobs_page(store: &dyn ResumeStore) -> Result<JobsPage, AppError> {
    let jobs = store.list_jobs().await?;
    let items = store.list_description_items().await?;
    Ok(JobsPage::new(jobs, items))
}

pub async fn projects_page(store: &dyn ResumeStore) -> Result<ProjectsPage, AppError> {
    Ok(ProjectsPage {
        projects: store.list_projects().await?,
    })
}

/// GET /
pub async fn handle_home(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let page = home_page(state.store.as_ref()).await?;
    Ok(Html(page.render()?))
}

/// GET /jobs/
pub async fn handle_jobs(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let page = jobs_page(state.store.as_ref()).await?;
    Ok(Html(page.render()?))
}

/// GET /projects/
pub async fn handle_projects(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let page = projects_page(state.store.as_ref()).await?;
    Ok(Html(page.render()?))
}
