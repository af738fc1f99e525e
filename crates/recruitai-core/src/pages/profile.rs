use tracing::warn;

use crate::{
    backend::ScreeningBackend,
    models::{format_date, initials, Candidate},
};

pub const LOADING: &str = "Loading profile...";
pub const NOT_FOUND: &str = "Candidate not found.";
pub const NO_PHONE: &str = "No phone detected";
pub const NO_EXPERIENCE: &str = "No organizations extracted.";
pub const NO_SKILLS: &str = "No skills extracted.";
pub const NO_EDUCATION: &str = "No education extracted.";

/// Detail view of one candidate
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub candidate: Candidate,
}

impl Profile {
    /// Any failure, not just a 404, renders as "Candidate not found."
    pub async fn load(backend: &dyn ScreeningBackend, id: &str) -> Option<Self> {
        match backend.candidate(id).await {
            Ok(candidate) => Some(Self { candidate }),
            Err(e) => {
                warn!("Failed to load candidate {}: {}", id, e);
                None
            }
        }
    }

    /// Extracted person name, falling back to the filename
    pub fn display_name(&self) -> &str {
        self.candidate
            .entity("PERSON")
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.candidate.filename)
    }

    pub fn initials(&self) -> String {
        initials(&self.candidate.filename, 1)
    }

    pub fn uploaded(&self) -> String {
        format_date(self.candidate.upload_date)
    }

    pub fn email(&self) -> Option<&str> {
        self.candidate.email()
    }

    pub fn raw_text(&self) -> &str {
        self.candidate.text_raw.as_deref().unwrap_or_default()
    }
}
