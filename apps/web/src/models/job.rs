#![allow(dead_code)]

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::errors::AppError;
use crate::models::ids::{DescriptionItemId, JobId};

pub const JOB_TITLE_MAX_LEN: usize = 200;
pub const JOB_COMPANY_MAX_LEN: usize = 200;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Job {
    pub id: JobId,
    pub title: String,
    pub company: Option<String>,
    pub date_started: NaiveDate,
    /// `None` while the position is ongoing.
    pub date_ended: Option<NaiveDate>,
}

impl Job {
    pub fn is_current(&self) -> bool {
        self.date_ended.is_none()
    }

    /// Human-readable tenure, e.g. "Mar 2021 – Present".
    pub fn period(&self) -> String {
        let start = self.date_started.format("%b %Y");
        match self.date_ended {
            Some(end) => format!("{start} – {}", end.format("%b %Y")),
            None => format!("{start} – Present"),
        }
    }
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}

/// Write-side fields of a [`Job`]; the id is assigned on insert.
#[derive(Debug, Clone, Deserialize)]
pub struct NewJob {
    pub title: String,
    pub company: Option<String>,
    pub date_started: NaiveDate,
    pub date_ended: Option<NaiveDate>,
}

impl NewJob {
    pub fn validate(&self) -> Result<(), AppError> {
        require_title(&self.title, JOB_TITLE_MAX_LEN)?;
        if let Some(company) = &self.company {
            if company.chars().count() > JOB_COMPANY_MAX_LEN {
                return Err(AppError::Validation(format!(
                    "company must be at most {JOB_COMPANY_MAX_LEN} characters"
                )));
            }
        }
        if let Some(ended) = self.date_ended {
            if ended < self.date_started {
                return Err(AppError::Validation(format!(
                    "date_ended ({ended}) is before date_started ({})",
                    self.date_started
                )));
            }
        }
        Ok(())
    }
}

/// One bullet point of a job description. Owned by exactly one [`Job`] and
/// removed with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct DescriptionItem {
    pub id: DescriptionItemId,
    pub title: String,
    pub job_id: JobId,
}

impl fmt::Display for DescriptionItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewDescriptionItem {
    pub title: String,
    pub job_id: JobId,
}

impl NewDescriptionItem {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.title.trim().is_empty() {
            return Err(AppError::Validation("title must not be empty".to_string()));
        }
        Ok(())
    }
}

pub(crate) fn require_title(title: &str, max_len: usize) -> Result<(), AppError> {
    if title.trim().is_empty() {
        return Err(AppError::Validation("title must not be empty".to_string()));
    }
    if title.chars().count() > max_len {
        return Err(AppError::Validation(format!(
            "title must be at most {max_len} characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn new_job(started: NaiveDate, ended: Option<NaiveDate>) -> NewJob {
        NewJob {
            title: "Backend Engineer".to_string(),
            company: Some("Acme".to_string()),
            date_started: started,
            date_ended: ended,
        }
    }

    #[test]
    fn test_ongoing_job_is_valid() {
        assert!(new_job(date(2021, 3, 1), None).validate().is_ok());
    }

    #[test]
    fn test_same_day_end_is_valid() {
        let day = date(2021, 3, 1);
        assert!(new_job(day, Some(day)).validate().is_ok());
    }

    #[test]
    fn test_end_before_start_rejected() {
        let err = new_job(date(2021, 3, 1), Some(date(2020, 1, 1)))
            .validate()
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_blank_or_long_title_rejected() {
        let mut job = new_job(date(2021, 3, 1), None);
        job.title = "   ".to_string();
        assert!(job.validate().is_err());

        job.title = "x".repeat(JOB_TITLE_MAX_LEN + 1);
        assert!(job.validate().is_err());

        job.title = "x".repeat(JOB_TITLE_MAX_LEN);
        assert!(job.validate().is_ok());
    }

    #[test]
    fn test_long_company_rejected() {
        let mut job = new_job(date(2021, 3, 1), None);
        job.company = Some("c".repeat(JOB_COMPANY_MAX_LEN + 1));
        assert!(job.validate().is_err());
    }

    #[test]
    fn test_period_formatting() {
        let mut job = Job {
            id: JobId::generate(),
            title: "Engineer".to_string(),
            company: None,
            date_started: date(2021, 3, 1),
            date_ended: None,
        };
        assert!(job.is_current());
        assert_eq!(job.period(), "Mar 2021 – Present");

        job.date_ended = Some(date(2023, 11, 30));
        assert!(!job.is_current());
        assert_eq!(job.period(), "Mar 2021 – Nov 2023");
        assert_eq!(job.to_string(), "Engineer");
    }

    #[test]
    fn test_blank_description_item_rejected() {
        let item = NewDescriptionItem {
            title: "".to_string(),
            job_id: JobId::generate(),
        };
        assert!(item.validate().is_err());
    }
}
