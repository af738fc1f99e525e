// HTTP client for the resume-screening backend
pub mod client;
pub mod records;
pub mod retry;
pub mod upload;

// Re-export common types
pub use client::{ApiError, ClientOptions, ScreeningClient, DEFAULT_API_URL};
pub use records::{
    Analytics, Candidate, CandidateMeta, Job, JobCreated, JobMatches, MatchDetails, MatchEntry,
    NewJob, SkillCount, UploadReceipt, Validate,
};
pub use retry::RetryConfig;
pub use upload::{ResumeFormat, ALLOWED_EXTENSIONS, DEFAULT_MAX_UPLOAD_BYTES};
