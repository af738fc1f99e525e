use tracing::{info, warn};

use crate::{
    backend::ScreeningBackend,
    models::{Job, JobCreated, NewJob},
    skills::parse_skill_list,
    Error, Result,
};

pub const LOADING: &str = "Loading active positions...";
pub const EMPTY: &str = "No jobs posted yet";
pub const CREATE_FAILED: &str = "Failed to create job";

/// The "Post New Job" form as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobForm {
    pub title: String,
    pub description: String,
    /// Comma separated, e.g. "React, Node.js, TypeScript"
    pub skills: String,
}

impl JobForm {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        skills: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            skills: skills.into(),
        }
    }

    pub fn to_new_job(&self) -> Result<NewJob> {
        let title = self.title.trim();
        let description = self.description.trim();

        if title.is_empty() {
            return Err(Error::InvalidInput("Job title is required".to_string()));
        }
        if description.is_empty() {
            return Err(Error::InvalidInput("Job description is required".to_string()));
        }

        Ok(NewJob {
            title: title.to_string(),
            description: description.to_string(),
            required_skills: parse_skill_list(&self.skills),
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Job listings page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobBoard {
    pub jobs: Vec<Job>,
}

impl JobBoard {
    /// A failed fetch leaves the board empty rather than erroring the page
    pub async fn load(backend: &dyn ScreeningBackend) -> Self {
        let jobs = backend.jobs().await.unwrap_or_else(|e| {
            warn!("Failed to load jobs: {}", e);
            Vec::new()
        });
        Self { jobs }
    }

    /// Validate and post the form, then refresh the listing.
    ///
    /// The form is cleared only when the backend accepted the job. A refresh
    /// failure after a successful create keeps the previous listing.
    pub async fn post(
        &mut self,
        backend: &dyn ScreeningBackend,
        form: &mut JobForm,
    ) -> Result<JobCreated> {
        let job = form.to_new_job()?;
        let created = backend.create_job(&job).await?;
        info!("Created job '{}' ({})", job.title, created.id);
        form.clear();

        match backend.jobs().await {
            Ok(jobs) => self.jobs = jobs,
            Err(e) => warn!("Job created but refresh failed: {}", e),
        }

        Ok(created)
    }

    pub fn get(&self, index: usize) -> Option<&Job> {
        self.jobs.get(index)
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MockScreeningBackend;
    use crate::pages::fixtures::job;
    use mockall::predicate::*;

    #[test]
    fn test_form_validation() {
        let form = JobForm::new("  ", "desc", "");
        assert!(matches!(form.to_new_job(), Err(Error::InvalidInput(_))));

        let form = JobForm::new("Title", "", "");
        assert!(matches!(form.to_new_job(), Err(Error::InvalidInput(_))));

        let form = JobForm::new(" Frontend Dev ", "Build UIs", "React, Node.js, TypeScript");
        let job = form.to_new_job().unwrap();
        assert_eq!(job.title, "Frontend Dev");
        assert_eq!(job.required_skills, vec!["React", "Node.js", "TypeScript"]);
    }

    #[tokio::test]
    async fn test_post_refreshes_listing_and_clears_form() {
        let expected = NewJob {
            title: "Data Engineer".to_string(),
            description: "Pipelines".to_string(),
            required_skills: vec!["SQL".to_string(), "Spark".to_string()],
        };

        let mut backend = MockScreeningBackend::new();
        backend
            .expect_create_job()
            .with(eq(expected))
            .times(1)
            .returning(|_| {
                Ok(JobCreated {
                    message: "Job created".to_string(),
                    id: "j9".to_string(),
                })
            });
        backend
            .expect_jobs()
            .times(1)
            .returning(|| Ok(vec![job("j9", "Data Engineer", &["SQL", "Spark"])]));

        let mut board = JobBoard::default();
        let mut form = JobForm::new("Data Engineer", "Pipelines", "SQL, Spark");
        let created = board.post(&backend, &mut form).await.unwrap();

        assert_eq!(created.id, "j9");
        assert_eq!(board.jobs.len(), 1);
        assert_eq!(form, JobForm::default());
    }

    #[tokio::test]
    async fn test_failed_create_keeps_form() {
        let mut backend = MockScreeningBackend::new();
        backend
            .expect_create_job()
            .returning(|_| Err(Error::ApiError("Request to add-job failed with status 500".into())));
        backend.expect_jobs().never();

        let mut board = JobBoard {
            jobs: vec![job("j1", "Existing", &[])],
        };
        let mut form = JobForm::new("New", "Role", "Go");
        assert!(board.post(&backend, &mut form).await.is_err());
        assert_eq!(form.title, "New");
        assert_eq!(board.jobs.len(), 1);
    }

    #[tokio::test]
    async fn test_invalid_form_never_reaches_backend() {
        let mut backend = MockScreeningBackend::new();
        backend.expect_create_job().never();

        let mut board = JobBoard::default();
        let mut form = JobForm::default();
        assert!(board.post(&backend, &mut form).await.is_err());
    }

    #[tokio::test]
    async fn test_load_falls_back_to_empty() {
        let mut backend = MockScreeningBackend::new();
        backend
            .expect_jobs()
            .returning(|| Err(Error::ApiError("down".into())));

        let board = JobBoard::load(&backend).await;
        assert!(board.is_empty());
    }
}
