use tracing::warn;

use crate::{
    backend::ScreeningBackend,
    models::{JobMatches, MatchEntry},
    score::{percent, ScoreBucket},
    skills::other_skills,
};

pub const LOADING: &str = "Loading analysis data...";
pub const LOAD_FAILED: &str = "Failed to load job data.";
pub const NO_SUMMARY: &str = "No summary available.";
pub const NO_MATCHED_SKILLS: &str = "No specific skill keywords matched.";
pub const SUMMARY_TITLE: &str = "AI Smart Summary";
pub const CONTEXTUAL_MATCH: &str = "Contextual Match";
pub const KEYWORD_MATCH: &str = "Keyword Match";

/// Ranked candidates for one job, with at most one entry expanded
#[derive(Debug, Clone, PartialEq)]
pub struct MatchBoard {
    pub job_title: String,
    pub entries: Vec<MatchEntry>,
    expanded: Option<String>,
}

impl MatchBoard {
    pub fn new(matches: JobMatches) -> Self {
        Self {
            job_title: matches.job_title,
            entries: matches.candidates,
            expanded: None,
        }
    }

    /// `None` stands for the "Failed to load job data." state
    pub async fn load(backend: &dyn ScreeningBackend, job_id: &str) -> Option<Self> {
        match backend.job_matches(job_id).await {
            Ok(matches) => Some(Self::new(matches)),
            Err(e) => {
                warn!("Failed to load matches for job {}: {}", job_id, e);
                None
            }
        }
    }

    pub fn headline(&self) -> String {
        format!(
            "Found {} potential matches for this role.",
            self.entries.len()
        )
    }

    /// Expand `candidate_id`, or collapse it if it is already the open one
    pub fn toggle(&mut self, candidate_id: &str) {
        if self.expanded.as_deref() == Some(candidate_id) {
            self.expanded = None;
        } else {
            self.expanded = Some(candidate_id.to_string());
        }
    }

    pub fn toggle_at(&mut self, index: usize) {
        if let Some(id) = self.entries.get(index).map(|e| e.candidate_id.clone()) {
            self.toggle(&id);
        }
    }

    pub fn expanded(&self) -> Option<&str> {
        self.expanded.as_deref()
    }

    pub fn is_expanded(&self, candidate_id: &str) -> bool {
        self.expanded.as_deref() == Some(candidate_id)
    }

    pub fn rows(&self) -> Vec<MatchRow<'_>> {
        self.entries
            .iter()
            .enumerate()
            .map(|(idx, entry)| MatchRow::new(idx + 1, entry, self.is_expanded(&entry.candidate_id)))
            .collect()
    }
}

/// Everything one match card displays
#[derive(Debug, Clone, PartialEq)]
pub struct MatchRow<'a> {
    pub rank: usize,
    pub entry: &'a MatchEntry,
    pub expanded: bool,
    pub percent: u8,
    pub bucket: ScoreBucket,
    pub semantic_percent: u8,
    pub skill_percent: u8,
}

impl<'a> MatchRow<'a> {
    fn new(rank: usize, entry: &'a MatchEntry, expanded: bool) -> Self {
        Self {
            rank,
            entry,
            expanded,
            percent: percent(entry.match_score),
            bucket: ScoreBucket::from_score(entry.match_score),
            semantic_percent: percent(entry.details.semantic_score),
            skill_percent: percent(entry.details.skill_score),
        }
    }

    pub fn summary(&self) -> &str {
        self.entry
            .summary
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(NO_SUMMARY)
    }

    pub fn matched_skills(&self) -> &'a [String] {
        &self.entry.details.matched_skills
    }

    pub fn other_skills(&self) -> Vec<&'a str> {
        other_skills(&self.entry.skills, &self.entry.details.matched_skills)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MockScreeningBackend;
    use crate::pages::fixtures::entry;
    use crate::Error;
    use mockall::predicate::*;

    fn board() -> MatchBoard {
        MatchBoard::new(JobMatches {
            job_title: "Backend Engineer".to_string(),
            candidates: vec![entry("a", 0.82, 0.9, 0.6), entry("b", 0.55, 0.6, 0.4)],
        })
    }

    #[test]
    fn test_row_breakdown() {
        let board = board();
        let rows = board.rows();

        assert_eq!(rows[0].rank, 1);
        assert_eq!(rows[0].percent, 82);
        assert_eq!(rows[0].bucket, ScoreBucket::Good);
        assert_eq!(rows[0].bucket.color_name(), "emerald");
        assert_eq!(rows[0].semantic_percent, 90);
        assert_eq!(rows[0].skill_percent, 60);

        assert_eq!(rows[1].rank, 2);
        assert_eq!(rows[1].bucket, ScoreBucket::Warn);
        assert_eq!(board.headline(), "Found 2 potential matches for this role.");
    }

    #[test]
    fn test_single_expansion() {
        let mut board = board();
        assert_eq!(board.expanded(), None);

        board.toggle("a");
        assert!(board.is_expanded("a"));

        board.toggle("b");
        assert!(board.is_expanded("b"));
        assert!(!board.is_expanded("a"));
        assert_eq!(board.rows().iter().filter(|r| r.expanded).count(), 1);

        board.toggle_at(1);
        assert_eq!(board.expanded(), None);

        board.toggle_at(10);
        assert_eq!(board.expanded(), None);
    }

    #[test]
    fn test_fallback_texts() {
        let mut entry = entry("a", 0.4, 0.4, 0.4);
        entry.skills = vec!["Python".to_string(), "Flask".to_string()];
        entry.details.matched_skills = vec!["python".to_string()];
        entry.summary = Some("  ".to_string());

        let board = MatchBoard::new(JobMatches {
            job_title: "Role".to_string(),
            candidates: vec![entry],
        });
        let rows = board.rows();
        assert_eq!(rows[0].summary(), NO_SUMMARY);
        assert_eq!(rows[0].other_skills(), vec!["Flask"]);
        assert_eq!(rows[0].bucket, ScoreBucket::Bad);
    }

    #[tokio::test]
    async fn test_load_failure_collapses_to_none() {
        let mut backend = MockScreeningBackend::new();
        backend
            .expect_job_matches()
            .with(eq("missing"))
            .returning(|_| Err(Error::NotFound("job".into())));

        assert!(MatchBoard::load(&backend, "missing").await.is_none());
    }
}
