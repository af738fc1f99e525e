// The backend's records are our domain model; the API crate owns their shape
pub use recruitai_api::records::{
    Analytics, Candidate, CandidateMeta, Job, JobCreated, JobMatches, MatchDetails, MatchEntry,
    NewJob, SkillCount, UploadReceipt,
};

use chrono::{DateTime, Utc};

/// Short date for list rows, e.g. "2026-10-19"; "Unknown date" if absent
pub fn format_date(date: Option<DateTime<Utc>>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "Unknown date".to_string())
}

/// First `n` characters of a filename, uppercased, for avatar badges
pub fn initials(filename: &str, n: usize) -> String {
    filename.chars().take(n).collect::<String>().to_uppercase()
}
