pub mod ids;
pub mod job;
pub mod project;

pub use ids::{DescriptionItemId, JobId, ProjectId};
pub use job::{DescriptionItem, Job, NewDescriptionItem, NewJob};
pub use project::{NewProject, Project};
