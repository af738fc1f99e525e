use tracing::warn;

use crate::{backend::ScreeningBackend, models::Candidate, search::filter_candidates};

pub const TITLE: &str = "Candidate Database";
pub const NO_MATCHES: &str = "No candidates found matching your search.";
/// Avatar letters and chip count on a list row
pub const ROW_INITIALS: usize = 2;
pub const ROW_SKILL_CHIPS: usize = 5;

/// Candidate list with a live search box
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidateDirectory {
    pub candidates: Vec<Candidate>,
    query: String,
}

impl CandidateDirectory {
    pub fn new(candidates: Vec<Candidate>) -> Self {
        Self {
            candidates,
            query: String::new(),
        }
    }

    pub async fn load(backend: &dyn ScreeningBackend) -> Self {
        let candidates = backend.candidates().await.unwrap_or_else(|e| {
            warn!("Failed to load candidates: {}", e);
            Vec::new()
        });
        Self::new(candidates)
    }

    /// Swap in a fresh listing without losing what the user typed
    pub fn replace(&mut self, candidates: Vec<Candidate>) {
        self.candidates = candidates;
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
    }

    pub fn pop_char(&mut self) {
        self.query.pop();
    }

    pub fn visible(&self) -> Vec<&Candidate> {
        filter_candidates(&self.candidates, &self.query)
    }

    /// Message to show instead of rows, if any
    pub fn empty_message(&self) -> Option<&'static str> {
        self.visible().is_empty().then_some(NO_MATCHES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MockScreeningBackend;
    use crate::pages::fixtures::candidate;

    fn directory() -> CandidateDirectory {
        CandidateDirectory::new(vec![
            candidate("c1", "r.pdf", &["Go", "SQL"]),
            candidate("c2", "jane_doe.docx", &["React"]),
        ])
    }

    #[test]
    fn test_live_search() {
        let mut dir = directory();
        assert_eq!(dir.visible().len(), 2);

        for c in "sql".chars() {
            dir.push_char(c);
        }
        let ids: Vec<&str> = dir.visible().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["c1"]);

        dir.set_query("JANE");
        assert_eq!(dir.visible()[0].id, "c2");

        dir.set_query("kotlin");
        assert_eq!(dir.empty_message(), Some(NO_MATCHES));

        dir.set_query("");
        assert_eq!(dir.empty_message(), None);
    }

    #[test]
    fn test_replace_keeps_query() {
        let mut dir = directory();
        dir.set_query("go");
        dir.replace(vec![candidate("c3", "go_dev.txt", &[])]);
        assert_eq!(dir.query(), "go");
        assert_eq!(dir.visible()[0].id, "c3");
    }

    #[tokio::test]
    async fn test_uploaded_candidate_shows_in_list() {
        let mut backend = MockScreeningBackend::new();
        backend
            .expect_candidates()
            .returning(|| Ok(vec![candidate("c1", "r.pdf", &["Go", "SQL"])]));

        let dir = CandidateDirectory::load(&backend).await;
        assert_eq!(dir.visible().len(), 1);
        assert_eq!(dir.visible()[0].filename, "r.pdf");
    }
}
