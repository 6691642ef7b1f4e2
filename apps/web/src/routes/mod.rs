pub mod contact;
pub mod health;
pub mod pages;

use axum::{routing::get, Router};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/", get(pages::handle_home))
        .route("/jobs/", get(pages::handle_jobs))
        .route("/projects/", get(pages::handle_projects))
        .route(
            "/contact/",
            get(contact::handle_contact_form).post(contact::handle_contact_submit),
        )
        .with_state(state)
}
