use std::sync::Arc;

use crate::mail::MailBridge;
use crate::store::ResumeStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Read access to jobs and projects. `PgStore` in production.
    pub store: Arc<dyn ResumeStore>,
    pub mail: MailBridge,
}
