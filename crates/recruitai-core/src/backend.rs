use async_trait::async_trait;
use recruitai_api::ScreeningClient;
use std::path::Path;

use crate::{
    models::{Analytics, Candidate, Job, JobCreated, JobMatches, NewJob, UploadReceipt},
    Result,
};

/// Everything the dashboard asks of the screening service.
///
/// The HTTP client implements it; page models only see this trait so they
/// can be exercised against a mock.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ScreeningBackend: Send + Sync {
    async fn jobs(&self) -> Result<Vec<Job>>;
    async fn candidates(&self) -> Result<Vec<Candidate>>;
    async fn candidate(&self, id: &str) -> Result<Candidate>;
    async fn analytics(&self) -> Result<Analytics>;
    async fn create_job(&self, job: &NewJob) -> Result<JobCreated>;
    async fn upload_resume(&self, path: &Path) -> Result<UploadReceipt>;
    async fn job_matches(&self, job_id: &str) -> Result<JobMatches>;
}

#[async_trait]
impl ScreeningBackend for ScreeningClient {
    async fn jobs(&self) -> Result<Vec<Job>> {
        Ok(self.list_jobs().await?)
    }

    async fn candidates(&self) -> Result<Vec<Candidate>> {
        Ok(self.list_candidates().await?)
    }

    async fn candidate(&self, id: &str) -> Result<Candidate> {
        Ok(self.get_candidate(id).await?)
    }

    async fn analytics(&self) -> Result<Analytics> {
        Ok(ScreeningClient::analytics(self).await?)
    }

    async fn create_job(&self, job: &NewJob) -> Result<JobCreated> {
        Ok(ScreeningClient::create_job(self, job).await?)
    }

    async fn upload_resume(&self, path: &Path) -> Result<UploadReceipt> {
        Ok(ScreeningClient::upload_resume(self, path).await?)
    }

    async fn job_matches(&self, job_id: &str) -> Result<JobMatches> {
        Ok(ScreeningClient::job_matches(self, job_id).await?)
    }
}
