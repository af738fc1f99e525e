use std::path::Path;
use std::time::Duration;

use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, info};

use crate::records::{
    Analytics, Candidate, Job, JobCreated, JobMatches, NewJob, UploadReceipt, Validate,
};
use crate::retry::{is_retryable_status, with_retry, RetryConfig};
use crate::upload::{ResumeFile, ALLOWED_EXTENSIONS, DEFAULT_MAX_UPLOAD_BYTES};

/// Where the development backend listens
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000/api";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

const JOBS_ENDPOINT: &str = "/jobs";
const CANDIDATES_ENDPOINT: &str = "/candidates";
const ANALYTICS_ENDPOINT: &str = "/analytics";
const ADD_JOB_ENDPOINT: &str = "/add-job";
const UPLOAD_RESUME_ENDPOINT: &str = "/upload-resume";
const MATCH_CANDIDATES_ENDPOINT: &str = "/match-candidates";

#[derive(Error, Debug)]
pub enum ApiError {
    /// Any non-2xx answer. The body is deliberately not inspected.
    #[error("Request to {endpoint} failed with status {status}")]
    RequestFailed { endpoint: String, status: u16 },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Malformed response from {endpoint}: {reason}")]
    InvalidResponse { endpoint: String, reason: String },

    #[error("Unsupported resume file: {0} (allowed: {allowed})", allowed = ALLOWED_EXTENSIONS.join(", "))]
    UnsupportedFile(String),

    #[error("Resume is {size} bytes, the limit is {limit}")]
    FileTooLarge { size: u64, limit: u64 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ApiError {
    /// Network hiccups and overloaded servers; never client mistakes
    pub fn is_retryable(&self) -> bool {
        match self {
            ApiError::NetworkError(e) => e.is_timeout() || e.is_connect(),
            ApiError::RequestFailed { status, .. } => reqwest::StatusCode::from_u16(*status)
                .map(is_retryable_status)
                .unwrap_or(false),
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

/// Client options; everything has a sane default
#[derive(Debug, Clone)]
pub struct ClientOptions {
    pub base_url: String,
    pub timeout: Duration,
    pub retry: RetryConfig,
    pub max_upload_bytes: u64,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            retry: RetryConfig::disabled(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

/// Typed wrapper around the screening service's `/api` surface
pub struct ScreeningClient {
    client: reqwest::Client,
    base_url: String,
    retry_config: RetryConfig,
    max_upload_bytes: u64,
}

impl ScreeningClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_options(ClientOptions {
            base_url: base_url.into(),
            ..ClientOptions::default()
        })
    }

    pub fn with_options(options: ClientOptions) -> Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::USER_AGENT,
            reqwest::header::HeaderValue::from_static(concat!(
                "recruitai/",
                env!("CARGO_PKG_VERSION")
            )),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(options.timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: options.base_url.trim_end_matches('/').to_string(),
            retry_config: options.retry,
            max_upload_bytes: options.max_upload_bytes,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET /jobs
    pub async fn list_jobs(&self) -> Result<Vec<Job>> {
        self.get_json(JOBS_ENDPOINT.to_string()).await
    }

    /// GET /candidates
    pub async fn list_candidates(&self) -> Result<Vec<Candidate>> {
        self.get_json(CANDIDATES_ENDPOINT.to_string()).await
    }

    /// GET /candidates/{id}
    pub async fn get_candidate(&self, id: &str) -> Result<Candidate> {
        let endpoint = format!("{}/{}", CANDIDATES_ENDPOINT, urlencoding::encode(id));
        self.get_json(endpoint).await
    }

    /// GET /analytics
    pub async fn analytics(&self) -> Result<Analytics> {
        self.get_json(ANALYTICS_ENDPOINT.to_string()).await
    }

    /// GET /match-candidates/{job_id}
    pub async fn job_matches(&self, job_id: &str) -> Result<JobMatches> {
        let endpoint = format!(
            "{}/{}",
            MATCH_CANDIDATES_ENDPOINT,
            urlencoding::encode(job_id)
        );
        self.get_json(endpoint).await
    }

    /// POST /add-job. Never retried: the backend has no idempotency key.
    pub async fn create_job(&self, job: &NewJob) -> Result<JobCreated> {
        let url = self.url(ADD_JOB_ENDPOINT);
        info!("Creating job '{}' with {} skills", job.title, job.required_skills.len());

        let response = self.client.post(&url).json(job).send().await?;
        decode(ADD_JOB_ENDPOINT, response).await
    }

    /// POST /upload-resume as multipart with a single `file` field
    pub async fn upload_resume(&self, path: &Path) -> Result<UploadReceipt> {
        let resume = ResumeFile::read(path, self.max_upload_bytes).await?;
        let url = self.url(UPLOAD_RESUME_ENDPOINT);
        info!(
            "Uploading {} ({} bytes) to {}",
            resume.file_name,
            resume.bytes.len(),
            url
        );

        let part = Part::bytes(resume.bytes)
            .file_name(resume.file_name)
            .mime_str(resume.format.mime_type())?;
        let form = Form::new().part("file", part);

        let response = self.client.post(&url).multipart(form).send().await?;
        decode(UPLOAD_RESUME_ENDPOINT, response).await
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    async fn get_json<T>(&self, endpoint: String) -> Result<T>
    where
        T: DeserializeOwned + Validate,
    {
        let url = self.url(&endpoint);

        with_retry(&self.retry_config, ApiError::is_retryable, || async {
            debug!("GET {}", url);
            let response = self.client.get(&url).send().await?;
            decode(&endpoint, response).await
        })
        .await
    }
}

/// Status check, JSON decode, then validation of required fields
async fn decode<T>(endpoint: &str, response: reqwest::Response) -> Result<T>
where
    T: DeserializeOwned + Validate,
{
    let status = response.status();
    debug!("{} -> {}", endpoint, status);

    if status == reqwest::StatusCode::NOT_FOUND {
        return Err(ApiError::NotFound(endpoint.to_string()));
    }

    if !status.is_success() {
        return Err(ApiError::RequestFailed {
            endpoint: endpoint.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response.text().await?;
    let value: T = serde_json::from_str(&body)?;
    value
        .validate()
        .map_err(|reason| ApiError::InvalidResponse {
            endpoint: endpoint.to_string(),
            reason,
        })?;

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let client = ScreeningClient::new("http://localhost:5000/api/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:5000/api");
        assert_eq!(client.url("/jobs"), "http://localhost:5000/api/jobs");
    }

    #[test]
    fn test_retryable_classification() {
        let server_error = ApiError::RequestFailed {
            endpoint: "/jobs".into(),
            status: 503,
        };
        let client_error = ApiError::RequestFailed {
            endpoint: "/jobs".into(),
            status: 400,
        };
        assert!(server_error.is_retryable());
        assert!(!client_error.is_retryable());
        assert!(!ApiError::NotFound("/candidates/x".into()).is_retryable());
    }

    #[test]
    fn test_unsupported_file_message_lists_formats() {
        let err = ApiError::UnsupportedFile("cv.odt".into());
        assert_eq!(
            err.to_string(),
            "Unsupported resume file: cv.odt (allowed: pdf, docx, txt)"
        );
    }
}
