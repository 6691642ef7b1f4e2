use askama::Template;
use axum::{extract::State, response::Html, Form};
use serde::Deserialize;

use crate::errors::AppError;
use crate::state::AppState;
use crate::views::ContactPage;

/// Both fields are required; a submission missing either is rejected by the
/// `Form` extractor before any mail is sent. Contents are not checked.
#[derive(Debug, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub message: String,
}

/// GET /contact/
pub async fn handle_contact_form() -> Result<Html<String>, AppError> {
    Ok(Html(ContactPage { is_sent: None }.render()?))
}

/// POST /contact/
pub async fn handle_contact_submit(
    State(state): State<AppState>,
    Form(form): Form<ContactForm>,
) -> Result<Html<String>, AppError> {
    let is_sent = state.mail.send_contact(&form.name, &form.message).await?;
    Ok(Html(ContactPage { is_sent: Some(is_sent) }.render()?))
}
