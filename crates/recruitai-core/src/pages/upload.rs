use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

use crate::{backend::ScreeningBackend, models::UploadReceipt, Result};

pub const PROMPT: &str = "Click to upload or drag and drop";
pub const READY: &str = "Ready to analyze";
pub const SUCCESS: &str = "Resume uploaded and parsed successfully!";
pub const FAILURE: &str = "Failed to upload resume. Please try again.";

/// How long the success banner stays up before moving to Candidates
pub const REDIRECT_AFTER: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Default, PartialEq)]
pub enum UploadState {
    #[default]
    Idle,
    Uploading,
    Success(UploadReceipt),
    Error(String),
}

/// Resume upload page: one chosen file and where its upload stands
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadPanel {
    file: Option<PathBuf>,
    pub state: UploadState,
}

impl UploadPanel {
    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    /// Picking a file clears whatever the last upload left behind
    pub fn select(&mut self, path: impl Into<PathBuf>) {
        self.file = Some(path.into());
        self.state = UploadState::Idle;
    }

    pub fn clear(&mut self) {
        self.file = None;
        self.state = UploadState::Idle;
    }

    pub fn is_uploading(&self) -> bool {
        self.state == UploadState::Uploading
    }

    /// Mark the upload as started and hand back the file to send.
    ///
    /// Returns `None`, leaving the state alone, when there is no file or an
    /// upload is already running.
    pub fn begin(&mut self) -> Option<PathBuf> {
        if self.is_uploading() {
            return None;
        }
        let path = self.file.clone()?;
        self.state = UploadState::Uploading;
        Some(path)
    }

    /// The page was left while an upload was running. Its result will be
    /// dropped, so go back to `Idle` and keep the file for another try.
    pub fn abandon(&mut self) {
        if self.is_uploading() {
            self.state = UploadState::Idle;
        }
    }

    pub fn finish(&mut self, result: Result<UploadReceipt>) {
        self.state = match result {
            Ok(receipt) => {
                info!(
                    "Uploaded resume as {} ({} skills extracted)",
                    receipt.id,
                    receipt.extracted_skills.len()
                );
                UploadState::Success(receipt)
            }
            Err(e) => {
                warn!("Resume upload failed: {}", e);
                UploadState::Error(e.to_string())
            }
        };
    }

    /// Run a whole upload in place. No file means nothing happens.
    pub async fn submit(&mut self, backend: &dyn ScreeningBackend) {
        if let Some(path) = self.begin() {
            let result = backend.upload_resume(&path).await;
            self.finish(result);
        }
    }

    /// Banner text for the current state
    pub fn status_message(&self) -> &'static str {
        match &self.state {
            UploadState::Idle if self.file.is_some() => READY,
            UploadState::Idle => PROMPT,
            UploadState::Uploading => "Uploading...",
            UploadState::Success(_) => SUCCESS,
            UploadState::Error(_) => FAILURE,
        }
    }

    /// True once the page should hand over to the candidate list
    pub fn should_redirect(&self) -> bool {
        matches!(self.state, UploadState::Success(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MockScreeningBackend;
    use crate::Error;

    fn receipt(id: &str) -> UploadReceipt {
        UploadReceipt {
            message: "Resume uploaded successfully".to_string(),
            id: id.to_string(),
            extracted_skills: vec!["Go".to_string(), "SQL".to_string()],
        }
    }

    #[tokio::test]
    async fn test_submit_without_file_is_noop() {
        let mut backend = MockScreeningBackend::new();
        backend.expect_upload_resume().never();

        let mut panel = UploadPanel::default();
        panel.submit(&backend).await;
        assert_eq!(panel.state, UploadState::Idle);
        assert_eq!(panel.status_message(), PROMPT);
    }

    #[tokio::test]
    async fn test_successful_upload() {
        let mut backend = MockScreeningBackend::new();
        backend
            .expect_upload_resume()
            .withf(|path| path.ends_with("r.pdf"))
            .times(1)
            .returning(|_| Ok(receipt("c1")));

        let mut panel = UploadPanel::default();
        panel.select("/tmp/r.pdf");
        assert_eq!(panel.status_message(), READY);

        panel.submit(&backend).await;
        assert_eq!(panel.state, UploadState::Success(receipt("c1")));
        assert_eq!(panel.status_message(), SUCCESS);
        assert!(panel.should_redirect());
    }

    #[tokio::test]
    async fn test_failed_upload_then_reselect_resets() {
        let mut backend = MockScreeningBackend::new();
        backend
            .expect_upload_resume()
            .returning(|_| Err(Error::ApiError("status 500".into())));

        let mut panel = UploadPanel::default();
        panel.select("cv.docx");
        panel.submit(&backend).await;
        assert!(matches!(panel.state, UploadState::Error(_)));
        assert_eq!(panel.status_message(), FAILURE);

        panel.select("other.pdf");
        assert_eq!(panel.state, UploadState::Idle);
        assert_eq!(panel.file(), Some(Path::new("other.pdf")));
    }

    #[tokio::test]
    async fn test_uploaded_candidate_is_listed_and_reachable() {
        use crate::pages::fixtures::candidate;
        use crate::pages::{CandidateDirectory, Profile};
        use mockall::predicate::eq;

        let mut backend = MockScreeningBackend::new();
        backend
            .expect_upload_resume()
            .returning(|_| Ok(receipt("c1")));
        backend
            .expect_candidates()
            .returning(|| Ok(vec![candidate("c1", "r.pdf", &["Go", "SQL"])]));
        backend
            .expect_candidate()
            .with(eq("c1"))
            .returning(|_| Ok(candidate("c1", "r.pdf", &["Go", "SQL"])));

        let mut panel = UploadPanel::default();
        panel.select("r.pdf");
        panel.submit(&backend).await;
        let id = match &panel.state {
            UploadState::Success(receipt) => receipt.id.clone(),
            other => panic!("upload did not succeed: {:?}", other),
        };

        let directory = CandidateDirectory::load(&backend).await;
        assert!(directory.visible().iter().any(|c| c.id == id));

        let profile = Profile::load(&backend, &id).await.unwrap();
        assert_eq!(profile.candidate.filename, "r.pdf");
        assert_eq!(profile.candidate.skills, vec!["Go", "SQL"]);
    }

    #[test]
    fn test_begin_guards_double_submit() {
        let mut panel = UploadPanel::default();
        assert_eq!(panel.begin(), None);

        panel.select("cv.txt");
        assert_eq!(panel.begin(), Some(PathBuf::from("cv.txt")));
        assert!(panel.is_uploading());
        assert_eq!(panel.begin(), None);
    }

    #[test]
    fn test_abandon_only_resets_running_upload() {
        let mut panel = UploadPanel::default();
        panel.select("cv.txt");
        panel.begin();
        panel.abandon();
        assert_eq!(panel.state, UploadState::Idle);
        assert_eq!(panel.begin(), Some(PathBuf::from("cv.txt")));

        panel.finish(Ok(receipt("c1")));
        panel.abandon();
        assert!(panel.should_redirect());
    }
}
