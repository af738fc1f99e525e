//! View models for each dashboard page.
//!
//! These hold the data a page shows and the rules that turn backend
//! responses into what is on screen. Rendering lives in the TUI crate.

pub mod candidates;
pub mod jobs;
pub mod matches;
pub mod overview;
pub mod profile;
pub mod settings;
pub mod upload;

pub use candidates::CandidateDirectory;
pub use jobs::{JobBoard, JobForm};
pub use matches::{MatchBoard, MatchRow};
pub use overview::{Overview, StatCard};
pub use profile::Profile;
pub use settings::SettingsForm;
pub use upload::{UploadPanel, UploadState};

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::models::{Candidate, CandidateMeta, Job, MatchDetails, MatchEntry};

    pub fn candidate(id: &str, filename: &str, skills: &[&str]) -> Candidate {
        Candidate {
            id: id.to_string(),
            filename: filename.to_string(),
            upload_date: None,
            text_raw: None,
            skills: skills.iter().map(|s| s.to_string()).collect(),
            education: Vec::new(),
            experience: Vec::new(),
            meta: CandidateMeta::default(),
        }
    }

    pub fn job(id: &str, title: &str, skills: &[&str]) -> Job {
        Job {
            id: id.to_string(),
            title: title.to_string(),
            description: format!("{} role", title),
            required_skills: skills.iter().map(|s| s.to_string()).collect(),
            created_at: None,
        }
    }

    pub fn entry(id: &str, score: f64, semantic: f64, skill: f64) -> MatchEntry {
        MatchEntry {
            candidate_id: id.to_string(),
            filename: format!("{}.pdf", id),
            skills: Vec::new(),
            match_score: score,
            details: MatchDetails {
                semantic_score: semantic,
                skill_score: skill,
                matched_skills: Vec::new(),
                total_score: None,
            },
            summary: None,
        }
    }
}
