//! View-models: the named values each page hands to its template.

use std::collections::HashMap;

use askama::Template;

use crate::models::{DescriptionItem, Job, JobId, Project};

#[derive(Debug, Clone, PartialEq, Template)]
#[template(path = "home.html")]
pub struct HomePage {
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, PartialEq, Template)]
#[template(path = "jobs.html")]
pub struct JobsPage {
    pub jobs: Vec<JobListing>,
}

/// A job together with its description bullet points.
#[derive(Debug, Clone, PartialEq)]
pub struct JobListing {
    pub job: Job,
    pub items: Vec<DescriptionItem>,
}

impl JobsPage {
    /// One listing per job, in the order given. Items whose job isn't in
    /// `jobs` are left out.
    pub fn new(jobs: Vec<Job>, items: Vec<DescriptionItem>) -> Self {
        let mut by_job: HashMap<JobId, Vec<DescriptionItem>> = HashMap::new();
        for item in items {
            by_job.entry(item.job_id).or_default().push(item);
        }
        let jobs = jobs
            .into_iter()
            .map(|job| JobListing {
                items: by_job.remove(&job.id).unwrap_or_default(),
                job,
            })
            .collect();
        Self { jobs }
    }
}

#[derive(Debug, Clone, PartialEq, Template)]
#[template(path = "projects.html")]
pub struct ProjectsPage {
    pub projects: Vec<Project>,
}

/// `is_sent` is `None` until the form has been submitted.
#[derive(Debug, Clone, PartialEq, Template)]
#[template(path = "contact.html")]
pub struct ContactPage {
    pub is_sent: Option<bool>,
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::models::{DescriptionItemId, ProjectId};

    fn job(title: &str) -> Job {
        Job {
            id: JobId::generate(),
            title: title.to_string(),
            company: Some("Acme".to_string()),
            date_started: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            date_ended: None,
        }
    }

    fn item(job_id: JobId, title: &str) -> DescriptionItem {
        DescriptionItem {
            id: DescriptionItemId::generate(),
            title: title.to_string(),
            job_id,
        }
    }

    #[test]
    fn test_items_grouped_under_their_job() {
        let a = job("A");
        let b = job("B");
        let items = vec![
            item(a.id, "a1"),
            item(b.id, "b1"),
            item(a.id, "a2"),
            item(JobId::generate(), "stray"),
        ];

        let page = JobsPage::new(vec![a.clone(), b.clone()], items);

        assert_eq!(page.jobs.len(), 2);
        assert_eq!(page.jobs[0].job, a);
        let titles: Vec<_> = page.jobs[0].items.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, ["a1", "a2"]);
        assert_eq!(page.jobs[1].items.len(), 1);
    }

    #[test]
    fn test_no_jobs_no_listings() {
        let page = JobsPage::new(vec![], vec![item(JobId::generate(), "stray")]);
        assert!(page.jobs.is_empty());
        assert!(page.render().unwrap().contains("No positions listed yet"));
    }

    #[test]
    fn test_jobs_template_renders_period_and_items() {
        let mut a = job("Backend Engineer");
        a.date_ended = NaiveDate::from_ymd_opt(2022, 5, 31);
        let page = JobsPage::new(vec![a.clone()], vec![item(a.id, "Built the billing pipeline")]);
        let html = page.render().unwrap();

        assert!(html.contains("Backend Engineer"));
        assert!(html.contains("Acme"));
        assert!(html.contains("Jan 2020 – May 2022"));
        assert!(html.contains("Built the billing pipeline"));
    }

    #[test]
    fn test_project_template_escapes_and_links() {
        let page = ProjectsPage {
            projects: vec![Project {
                id: ProjectId(1),
                title: "<b>shout</b>".to_string(),
                description: "desc".to_string(),
                github_link: Some("https://github.com/someone/repo".to_string()),
            }],
        };
        let html = page.render().unwrap();
        assert!(!html.contains("<b>shout</b>"));
        assert!(html.contains("&lt;b&gt;shout"));
        assert!(html.contains("someone"));
        assert!(html.contains("View on GitHub"));
    }

    #[test]
    fn test_contact_template_states() {
        let blank = ContactPage { is_sent: None }.render().unwrap();
        assert!(blank.contains("<form"));
        assert!(!blank.contains("Thanks"));

        let sent = ContactPage { is_sent: Some(true) }.render().unwrap();
        assert!(sent.contains("Thanks"));

        let failed = ContactPage { is_sent: Some(false) }.render().unwrap();
        assert!(failed.contains("could not be sent"));
    }
}
