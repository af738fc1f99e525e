// Wire records for the screening API
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Anything the backend sends us that has fields we refuse to render blank.
///
/// Returns a human readable reason on the first violated rule.
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

impl<T: Validate> Validate for Vec<T> {
    fn validate(&self) -> Result<(), String> {
        for (idx, item) in self.iter().enumerate() {
            item.validate().map_err(|reason| format!("item {}: {}", idx, reason))?;
        }
        Ok(())
    }
}

/// A parsed resume
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    #[serde(rename = "_id")]
    pub id: String,
    pub filename: String,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub upload_date: Option<DateTime<Utc>>,
    /// Omitted by the list endpoint, present on the single-candidate fetch
    #[serde(default)]
    pub text_raw: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub education: Vec<String>,
    #[serde(default)]
    pub experience: Vec<String>,
    #[serde(default)]
    pub meta: CandidateMeta,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateMeta {
    /// Entity label (EMAIL, PERSON, SKILL, ...) to extracted values
    #[serde(default)]
    pub entities: BTreeMap<String, Vec<String>>,
}

impl Candidate {
    /// First value extracted under an entity label
    pub fn entity(&self, label: &str) -> Option<&str> {
        self.meta
            .entities
            .get(label)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    pub fn email(&self) -> Option<&str> {
        self.entity("EMAIL")
    }
}

impl Validate for Candidate {
    fn validate(&self) -> Result<(), String> {
        require_non_empty("_id", &self.id)?;
        require_non_empty("filename", &self.filename)
    }
}

/// A posted position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Validate for Job {
    fn validate(&self) -> Result<(), String> {
        require_non_empty("_id", &self.id)?;
        require_non_empty("title", &self.title)
    }
}

/// Body of POST /add-job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewJob {
    pub title: String,
    pub description: String,
    pub required_skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobCreated {
    #[serde(default)]
    pub message: String,
    pub id: String,
}

impl Validate for JobCreated {
    fn validate(&self) -> Result<(), String> {
        require_non_empty("id", &self.id)
    }
}

/// What the parsing service hands back after an upload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadReceipt {
    #[serde(default)]
    pub message: String,
    pub id: String,
    #[serde(default)]
    pub extracted_skills: Vec<String>,
}

impl Validate for UploadReceipt {
    fn validate(&self) -> Result<(), String> {
        require_non_empty("id", &self.id)
    }
}

/// One ranked candidate for a job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchEntry {
    pub candidate_id: String,
    pub filename: String,
    #[serde(default)]
    pub skills: Vec<String>,
    pub match_score: f64,
    pub details: MatchDetails,
    #[serde(default)]
    pub summary: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchDetails {
    pub semantic_score: f64,
    pub skill_score: f64,
    #[serde(default)]
    pub matched_skills: Vec<String>,
    #[serde(default)]
    pub total_score: Option<f64>,
}

impl Validate for MatchEntry {
    fn validate(&self) -> Result<(), String> {
        require_non_empty("candidate_id", &self.candidate_id)?;
        require_unit_interval("match_score", self.match_score)?;
        require_unit_interval("details.semantic_score", self.details.semantic_score)?;
        require_unit_interval("details.skill_score", self.details.skill_score)?;
        if let Some(total) = self.details.total_score {
            require_unit_interval("details.total_score", total)?;
        }
        Ok(())
    }
}

/// Response of GET /match-candidates/{job_id}
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobMatches {
    pub job_title: String,
    pub candidates: Vec<MatchEntry>,
}

impl Validate for JobMatches {
    fn validate(&self) -> Result<(), String> {
        self.candidates.validate()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCount {
    pub name: String,
    pub value: u64,
}

/// Aggregate stats computed by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analytics {
    pub total_jobs: u64,
    pub total_candidates: u64,
    #[serde(default)]
    pub skill_distribution: Vec<SkillCount>,
}

impl Validate for Analytics {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

fn require_non_empty(field: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{} is empty", field))
    } else {
        Ok(())
    }
}

fn require_unit_interval(field: &str, value: f64) -> Result<(), String> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(format!("{} = {} is outside [0, 1]", field, value))
    }
}

/// Accepts RFC 3339, HTTP dates (Flask's default) and naive ISO timestamps.
/// Unparseable values become `None` instead of failing the whole record.
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_timestamp))
}

pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}
