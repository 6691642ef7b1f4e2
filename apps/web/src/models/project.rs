#![allow(dead_code)]

use std::fmt;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use url::Url;

use crate::errors::AppError;
use crate::models::ids::ProjectId;
use crate::models::job::require_title;

pub const PROJECT_TITLE_MAX_LEN: usize = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub github_link: Option<String>,
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub github_link: Option<String>,
}

impl NewProject {
    pub fn validate(&self) -> Result<(), AppError> {
        require_title(&self.title, PROJECT_TITLE_MAX_LEN)?;
        if self.description.trim().is_empty() {
            return Err(AppError::Validation(
                "description must not be empty".to_string(),
            ));
        }
        if let Some(link) = &self.github_link {
            let parsed = Url::parse(link)
                .map_err(|e| AppError::Validation(format!("github_link is not a URL: {e}")))?;
            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(AppError::Validation(
                    "github_link must be an http(s) URL".to_string(),
                ));
            }
        }
        Ok(())
    }
}
