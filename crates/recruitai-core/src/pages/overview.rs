use tracing::warn;

use crate::{
    backend::ScreeningBackend,
    models::{Analytics, Candidate, Job, SkillCount},
};

pub const RECENT_JOBS: usize = 3;
pub const LATEST_UPLOADS: usize = 6;

pub const NO_ANALYTICS: &str = "Not enough data to display analytics";
pub const NO_JOBS: &str = "No active jobs found.";
pub const NO_CANDIDATES: &str = "No candidates found.";

/// One tile in the stats row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: String,
    pub trend: &'static str,
}

/// Landing page data. Each source degrades on its own: a dead analytics
/// endpoint still leaves jobs and candidates on screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overview {
    pub jobs: Vec<Job>,
    pub candidates: Vec<Candidate>,
    pub analytics: Option<Analytics>,
}

impl Overview {
    pub async fn load(backend: &dyn ScreeningBackend) -> Self {
        let (jobs, candidates, analytics) =
            tokio::join!(backend.jobs(), backend.candidates(), backend.analytics());

        Self {
            jobs: jobs.unwrap_or_else(|e| {
                warn!("Overview: jobs unavailable: {}", e);
                Vec::new()
            }),
            candidates: candidates.unwrap_or_else(|e| {
                warn!("Overview: candidates unavailable: {}", e);
                Vec::new()
            }),
            analytics: analytics
                .map_err(|e| warn!("Overview: analytics unavailable: {}", e))
                .ok(),
        }
    }

    /// Backend total when it is non-zero, otherwise what we can count locally
    pub fn active_jobs(&self) -> u64 {
        match &self.analytics {
            Some(a) if a.total_jobs > 0 => a.total_jobs,
            _ => self.jobs.len() as u64,
        }
    }

    pub fn total_candidates(&self) -> u64 {
        match &self.analytics {
            Some(a) if a.total_candidates > 0 => a.total_candidates,
            _ => self.candidates.len() as u64,
        }
    }

    pub fn top_skill(&self) -> &str {
        self.analytics
            .as_ref()
            .and_then(|a| a.skill_distribution.first())
            .map(|s| s.name.as_str())
            .filter(|name| !name.is_empty())
            .unwrap_or("N/A")
    }

    /// `None` means there is nothing worth charting
    pub fn skill_distribution(&self) -> Option<&[SkillCount]> {
        self.analytics
            .as_ref()
            .map(|a| a.skill_distribution.as_slice())
            .filter(|d| !d.is_empty())
    }

    pub fn stat_cards(&self) -> Vec<StatCard> {
        vec![
            StatCard {
                title: "Active Jobs",
                value: self.active_jobs().to_string(),
                trend: "Active Roles",
            },
            StatCard {
                title: "Total Candidates",
                value: self.total_candidates().to_string(),
                trend: "Total Database",
            },
            StatCard {
                title: "Top Skill",
                value: self.top_skill().to_string(),
                trend: "Most Demand",
            },
            StatCard {
                title: "Efficiency",
                value: "High".to_string(),
                trend: "AI Performance",
            },
        ]
    }

    pub fn recent_jobs(&self) -> &[Job] {
        &self.jobs[..self.jobs.len().min(RECENT_JOBS)]
    }

    pub fn latest_uploads(&self) -> &[Candidate] {
        &self.candidates[..self.candidates.len().min(LATEST_UPLOADS)]
    }
}
