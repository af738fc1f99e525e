// Dashboard state: which page is up, what it shows and what it is waiting for
use ratatui::widgets::ListState;
use recruitai_core::{
    models::{Candidate, JobCreated, UploadReceipt},
    pages::{
        jobs::CREATE_FAILED, CandidateDirectory, JobBoard, JobForm, MatchBoard, Overview,
        Profile, SettingsForm, UploadPanel,
    },
    Config, Error, ScopeToken, Theme, ViewScope,
};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Overview,
    Jobs,
    JobMatches { job_id: String },
    Candidates,
    Profile { candidate_id: String },
    Upload,
    Settings,
}

impl Page {
    /// Pages reachable from the number keys, in tab order
    pub const TABS: [Page; 5] = [
        Page::Overview,
        Page::Jobs,
        Page::Candidates,
        Page::Upload,
        Page::Settings,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Page::Overview => "Overview",
            Page::Jobs => "Jobs",
            Page::JobMatches { .. } => "Matches",
            Page::Candidates => "Candidates",
            Page::Profile { .. } => "Profile",
            Page::Upload => "Upload",
            Page::Settings => "Settings",
        }
    }

    /// Index of the tab this page lives under
    pub fn tab_index(&self) -> usize {
        match self {
            Page::Overview => 0,
            Page::Jobs | Page::JobMatches { .. } => 1,
            Page::Candidates | Page::Profile { .. } => 2,
            Page::Upload => 3,
            Page::Settings => 4,
        }
    }

    /// Where Esc leads from a detail page
    pub fn parent(&self) -> Option<Page> {
        match self {
            Page::JobMatches { .. } => Some(Page::Jobs),
            Page::Profile { .. } => Some(Page::Candidates),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    /// Typing in the candidate search box
    Searching,
    /// Filling in the "Post New Job" form
    PostingJob,
    /// Typing a resume path on the upload page
    ChoosingFile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JobFormField {
    #[default]
    Title,
    Description,
    Skills,
}

impl JobFormField {
    pub fn next(&self) -> Self {
        match self {
            JobFormField::Title => JobFormField::Description,
            JobFormField::Description => JobFormField::Skills,
            JobFormField::Skills => JobFormField::Title,
        }
    }
}

/// Work the runner should start on the app's behalf
#[derive(Debug, Clone)]
pub enum Request {
    Overview,
    Jobs,
    Matches(String),
    Candidates,
    Profile(String),
    PostJob { board: JobBoard, form: JobForm },
    Upload(PathBuf),
}

/// A request stamped with the page visit that issued it
#[derive(Debug)]
pub struct Pending {
    pub generation: u64,
    pub token: ScopeToken,
    pub request: Request,
}

/// What came back from a finished request
#[derive(Debug)]
pub enum Loaded {
    Overview(Overview),
    Jobs(JobBoard),
    Matches(Option<MatchBoard>),
    Candidates(CandidateDirectory),
    Profile(Option<Profile>),
    JobPosted {
        board: JobBoard,
        result: Result<JobCreated, Error>,
    },
    Uploaded(Result<UploadReceipt, Error>),
}

#[derive(Debug)]
pub struct Message {
    pub generation: u64,
    pub payload: Loaded,
}

pub struct App {
    pub should_quit: bool,
    pub page: Page,
    pub input_mode: InputMode,
    pub show_help: bool,
    pub loading: bool,
    pub error_message: Option<String>,
    pub status_message: Option<String>,

    pub config: Config,
    pub config_path: PathBuf,
    pub theme: Theme,

    pub overview: Overview,
    pub jobs: JobBoard,
    pub matches: Option<MatchBoard>,
    pub candidates: CandidateDirectory,
    pub profile: Option<Profile>,
    pub upload: UploadPanel,
    pub settings: SettingsForm,

    pub job_form: JobForm,
    pub job_form_field: JobFormField,
    pub path_input: String,
    pub list_state: ListState,

    generation: u64,
    scope: ViewScope,
    pending: Vec<Pending>,
    redirect_at: Option<Instant>,
}

impl App {
    pub fn new(config: Config, config_path: PathBuf) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));

        let mut app = Self {
            should_quit: false,
            page: Page::Overview,
            input_mode: InputMode::Normal,
            show_help: config.ui.show_help_on_start,
            loading: false,
            error_message: None,
            status_message: None,
            theme: Theme::for_mode(config.settings.theme),
            settings: SettingsForm::new(config.settings.clone()),
            config,
            config_path,
            overview: Overview::default(),
            jobs: JobBoard::default(),
            matches: None,
            candidates: CandidateDirectory::default(),
            profile: None,
            upload: UploadPanel::default(),
            job_form: JobForm::default(),
            job_form_field: JobFormField::default(),
            path_input: String::new(),
            list_state,
            generation: 0,
            scope: ViewScope::new(),
            pending: Vec::new(),
            redirect_at: None,
        };
        app.request(Request::Overview);
        app
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Leave the current page. Its scope is cancelled so in-flight loads
    /// are dropped, and the new visit gets a fresh generation.
    pub fn navigate(&mut self, page: Page) {
        if self.page == Page::Upload {
            self.upload.abandon();
        }
        self.scope.cancel();
        self.scope = ViewScope::new();
        self.generation += 1;
        self.pending.clear();
        self.loading = false;
        self.redirect_at = None;
        self.error_message = None;
        self.status_message = None;
        self.input_mode = InputMode::Normal;
        self.list_state.select(Some(0));

        tracing::debug!("Navigating to {:?} (generation {})", page, self.generation);
        self.page = page;
        self.load_current();
    }

    pub fn go_to_tab(&mut self, index: usize) {
        if let Some(page) = Page::TABS.get(index) {
            self.navigate(page.clone());
        }
    }

    pub fn go_back(&mut self) {
        if let Some(parent) = self.page.parent() {
            self.navigate(parent);
        }
    }

    /// Re-fetch whatever the current page shows
    pub fn refresh(&mut self) {
        self.navigate(self.page.clone());
    }

    fn load_current(&mut self) {
        match self.page.clone() {
            Page::Overview => self.request(Request::Overview),
            Page::Jobs => self.request(Request::Jobs),
            Page::JobMatches { job_id } => {
                self.matches = None;
                self.request(Request::Matches(job_id));
            }
            Page::Candidates => self.request(Request::Candidates),
            Page::Profile { candidate_id } => {
                self.profile = None;
                self.request(Request::Profile(candidate_id));
            }
            Page::Upload => {}
            Page::Settings => self.settings = SettingsForm::new(self.config.settings.clone()),
        }
    }

    fn request(&mut self, request: Request) {
        self.loading = true;
        self.pending.push(Pending {
            generation: self.generation,
            token: self.scope.token(),
            request,
        });
    }

    /// Requests queued since the last call, for the runner to spawn
    pub fn take_requests(&mut self) -> Vec<Pending> {
        std::mem::take(&mut self.pending)
    }

    /// Fold a finished request into the page. Anything from an earlier
    /// visit is ignored.
    pub fn apply(&mut self, message: Message) {
        if message.generation != self.generation {
            tracing::debug!(
                "Discarding result from generation {} (now {})",
                message.generation,
                self.generation
            );
            return;
        }
        self.loading = false;

        match message.payload {
            Loaded::Overview(overview) => self.overview = overview,
            Loaded::Jobs(board) => self.jobs = board,
            Loaded::Matches(board) => self.matches = board,
            Loaded::Candidates(directory) => self.candidates.replace(directory.candidates),
            Loaded::Profile(profile) => self.profile = profile,
            Loaded::JobPosted { board, result } => {
                self.jobs = board;
                match result {
                    Ok(created) => {
                        self.job_form.clear();
                        self.job_form_field = JobFormField::default();
                        self.input_mode = InputMode::Normal;
                        self.status_message = Some(format!("Posted job {}", created.id));
                    }
                    Err(e) => {
                        tracing::warn!("Job creation failed: {}", e);
                        self.error_message = Some(CREATE_FAILED.to_string());
                    }
                }
            }
            Loaded::Uploaded(result) => {
                let succeeded = result.is_ok();
                self.upload.finish(result);
                if succeeded {
                    self.redirect_at = Some(Instant::now() + recruitai_core::pages::upload::REDIRECT_AFTER);
                }
            }
        }
        self.clamp_selection();
    }

    /// Housekeeping between events: the post-upload redirect
    pub fn on_tick(&mut self, now: Instant) {
        if let Some(at) = self.redirect_at {
            if now >= at && self.page == Page::Upload && self.upload.should_redirect() {
                self.upload.clear();
                self.navigate(Page::Candidates);
            }
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    // List selection

    pub fn selected(&self) -> usize {
        self.list_state.selected().unwrap_or(0)
    }

    fn list_len(&self) -> usize {
        match self.page {
            Page::Jobs => self.jobs.jobs.len(),
            Page::JobMatches { .. } => self.matches.as_ref().map_or(0, |m| m.entries.len()),
            Page::Candidates => self.candidates.visible().len(),
            _ => 0,
        }
    }

    pub fn next_item(&mut self) {
        let len = self.list_len();
        if len > 0 {
            self.list_state.select(Some((self.selected() + 1).min(len - 1)));
        }
    }

    pub fn previous_item(&mut self) {
        self.list_state.select(Some(self.selected().saturating_sub(1)));
    }

    fn clamp_selection(&mut self) {
        let len = self.list_len();
        if self.selected() >= len {
            self.list_state.select(Some(len.saturating_sub(1)));
        }
    }

    pub fn selected_candidate(&self) -> Option<&Candidate> {
        self.candidates.visible().get(self.selected()).copied()
    }

    /// Enter on the current page
    pub fn open_selected(&mut self) {
        match &self.page {
            Page::Jobs => {
                if let Some(job) = self.jobs.get(self.selected()) {
                    let job_id = job.id.clone();
                    self.navigate(Page::JobMatches { job_id });
                }
            }
            Page::Candidates => {
                if let Some(candidate) = self.selected_candidate() {
                    let candidate_id = candidate.id.clone();
                    self.navigate(Page::Profile { candidate_id });
                }
            }
            Page::JobMatches { .. } => {
                let selected = self.selected();
                if let Some(board) = self.matches.as_mut() {
                    board.toggle_at(selected);
                }
            }
            Page::Upload => {
                if self.upload.file().is_some() {
                    self.start_upload();
                } else {
                    self.enter_file_mode();
                }
            }
            Page::Settings => self.save_settings(),
            _ => {}
        }
    }

    // Candidate search

    pub fn enter_search_mode(&mut self) {
        if self.page == Page::Candidates {
            self.input_mode = InputMode::Searching;
        }
    }

    pub fn search_push(&mut self, c: char) {
        self.candidates.push_char(c);
        self.list_state.select(Some(0));
    }

    pub fn search_pop(&mut self) {
        self.candidates.pop_char();
        self.list_state.select(Some(0));
    }

    pub fn enter_normal_mode(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    // Job form

    pub fn enter_job_form(&mut self) {
        if self.page == Page::Jobs {
            self.input_mode = InputMode::PostingJob;
            self.job_form_field = JobFormField::default();
        }
    }

    pub fn job_form_input(&mut self) -> &mut String {
        match self.job_form_field {
            JobFormField::Title => &mut self.job_form.title,
            JobFormField::Description => &mut self.job_form.description,
            JobFormField::Skills => &mut self.job_form.skills,
        }
    }

    pub fn next_job_field(&mut self) {
        self.job_form_field = self.job_form_field.next();
    }

    /// Validate locally, then hand the post to the runner
    pub fn submit_job_form(&mut self) {
        if let Err(e) = self.job_form.to_new_job() {
            self.error_message = Some(e.to_string());
            return;
        }
        self.error_message = None;
        let request = Request::PostJob {
            board: self.jobs.clone(),
            form: self.job_form.clone(),
        };
        self.request(request);
    }

    // Upload

    pub fn enter_file_mode(&mut self) {
        if self.page == Page::Upload {
            self.input_mode = InputMode::ChoosingFile;
            self.path_input = self
                .upload
                .file()
                .map(|p| p.display().to_string())
                .unwrap_or_default();
        }
    }

    pub fn confirm_file(&mut self) {
        let path = self.path_input.trim();
        if !path.is_empty() {
            self.upload.select(path);
        }
        self.input_mode = InputMode::Normal;
    }

    pub fn start_upload(&mut self) {
        if let Some(path) = self.upload.begin() {
            self.request(Request::Upload(path));
        }
    }

    // Settings

    pub fn save_settings(&mut self) {
        match self.settings.save(&mut self.config, &self.config_path) {
            Ok(()) => {
                self.theme = Theme::for_mode(self.config.settings.theme);
                self.error_message = None;
            }
            Err(e) => self.error_message = Some(format!("Failed to save settings: {}", e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recruitai_core::models::{Job, JobMatches, MatchDetails, MatchEntry};
    use tempfile::TempDir;

    fn app() -> App {
        App::new(Config::default(), PathBuf::from("/nonexistent/config.toml"))
    }

    fn job(id: &str) -> Job {
        Job {
            id: id.to_string(),
            title: format!("Role {}", id),
            description: "desc".to_string(),
            required_skills: Vec::new(),
            created_at: None,
        }
    }

    fn entry(id: &str) -> MatchEntry {
        MatchEntry {
            candidate_id: id.to_string(),
            filename: format!("{}.pdf", id),
            skills: Vec::new(),
            match_score: 0.82,
            details: MatchDetails {
                semantic_score: 0.9,
                skill_score: 0.6,
                matched_skills: Vec::new(),
                total_score: None,
            },
            summary: None,
        }
    }

    #[test]
    fn test_starts_on_overview_with_load_queued() {
        let mut app = app();
        assert_eq!(app.page, Page::Overview);
        let pending = app.take_requests();
        assert_eq!(pending.len(), 1);
        assert!(matches!(pending[0].request, Request::Overview));
        assert!(app.take_requests().is_empty());
    }

    #[test]
    fn test_navigation_cancels_previous_scope() {
        let mut app = app();
        let first = app.take_requests().remove(0);

        app.go_to_tab(1);
        assert_eq!(app.page, Page::Jobs);
        assert!(first.token.is_cancelled());

        let second = app.take_requests().remove(0);
        assert!(!second.token.is_cancelled());
        assert!(second.generation > first.generation);
    }

    #[test]
    fn test_stale_results_are_ignored() {
        let mut app = app();
        let stale = app.generation();
        app.go_to_tab(1);

        app.apply(Message {
            generation: stale,
            payload: Loaded::Overview(Overview {
                jobs: vec![job("old")],
                ..Default::default()
            }),
        });
        assert!(app.overview.jobs.is_empty());
        assert!(app.loading);

        app.apply(Message {
            generation: app.generation(),
            payload: Loaded::Jobs(JobBoard {
                jobs: vec![job("j1"), job("j2")],
            }),
        });
        assert_eq!(app.jobs.jobs.len(), 2);
        assert!(!app.loading);
    }

    #[test]
    fn test_open_job_then_back() {
        let mut app = app();
        app.go_to_tab(1);
        app.apply(Message {
            generation: app.generation(),
            payload: Loaded::Jobs(JobBoard {
                jobs: vec![job("j1"), job("j2")],
            }),
        });
        app.next_item();
        app.open_selected();
        assert_eq!(
            app.page,
            Page::JobMatches {
                job_id: "j2".to_string()
            }
        );
        let pending = app.take_requests();
        assert!(matches!(&pending.last().unwrap().request, Request::Matches(id) if id == "j2"));

        app.go_back();
        assert_eq!(app.page, Page::Jobs);
    }

    #[test]
    fn test_enter_toggles_match_expansion() {
        let mut app = app();
        app.navigate(Page::JobMatches {
            job_id: "j1".to_string(),
        });
        app.apply(Message {
            generation: app.generation(),
            payload: Loaded::Matches(Some(MatchBoard::new(JobMatches {
                job_title: "Role".to_string(),
                candidates: vec![entry("a"), entry("b")],
            }))),
        });

        app.open_selected();
        assert_eq!(app.matches.as_ref().unwrap().expanded(), Some("a"));
        app.open_selected();
        assert_eq!(app.matches.as_ref().unwrap().expanded(), None);
    }

    #[test]
    fn test_invalid_job_form_is_not_sent() {
        let mut app = app();
        app.go_to_tab(1);
        app.take_requests();

        app.enter_job_form();
        app.job_form_input().push_str("Title only");
        app.submit_job_form();
        assert!(app.error_message.is_some());
        assert!(app.take_requests().is_empty());
        assert_eq!(app.input_mode, InputMode::PostingJob);
    }

    #[test]
    fn test_failed_post_shows_message() {
        let mut app = app();
        app.go_to_tab(1);
        app.input_mode = InputMode::PostingJob;
        app.apply(Message {
            generation: app.generation(),
            payload: Loaded::JobPosted {
                board: JobBoard::default(),
                result: Err(Error::ApiError("status 500".into())),
            },
        });
        assert_eq!(app.error_message.as_deref(), Some(CREATE_FAILED));
        assert_eq!(app.input_mode, InputMode::PostingJob);
    }

    #[test]
    fn test_upload_success_redirects_to_candidates() {
        let mut app = app();
        app.go_to_tab(3);
        app.path_input = "/tmp/r.pdf".to_string();
        app.confirm_file();
        app.start_upload();
        let pending = app.take_requests();
        assert!(matches!(&pending[0].request, Request::Upload(p) if p.ends_with("r.pdf")));

        app.apply(Message {
            generation: app.generation(),
            payload: Loaded::Uploaded(Ok(UploadReceipt {
                message: "ok".to_string(),
                id: "c1".to_string(),
                extracted_skills: vec!["Go".to_string()],
            })),
        });

        app.on_tick(Instant::now());
        assert_eq!(app.page, Page::Upload);

        app.on_tick(Instant::now() + std::time::Duration::from_secs(5));
        assert_eq!(app.page, Page::Candidates);
    }

    #[test]
    fn test_leaving_mid_upload_allows_retry() {
        let mut app = app();
        app.go_to_tab(3);
        app.path_input = "/tmp/r.pdf".to_string();
        app.confirm_file();
        app.start_upload();
        assert!(app.upload.is_uploading());

        app.go_to_tab(2);
        app.go_to_tab(3);
        assert!(!app.upload.is_uploading());
        assert_eq!(app.upload.file(), Some(std::path::Path::new("/tmp/r.pdf")));
        app.take_requests();

        app.open_selected();
        let pending = app.take_requests();
        assert_eq!(pending.len(), 1);
        assert!(matches!(&pending[0].request, Request::Upload(p) if p.ends_with("r.pdf")));
    }

    #[test]
    fn test_post_status_clears_on_navigation() {
        let mut app = app();
        app.go_to_tab(1);
        app.apply(Message {
            generation: app.generation(),
            payload: Loaded::JobPosted {
                board: JobBoard::default(),
                result: Ok(JobCreated {
                    message: "ok".to_string(),
                    id: "j9".to_string(),
                }),
            },
        });
        assert_eq!(app.status_message.as_deref(), Some("Posted job j9"));

        app.go_to_tab(2);
        assert!(app.status_message.is_none());
        app.go_to_tab(0);
        assert!(app.status_message.is_none());
        assert!(app.loading);
    }

    #[test]
    fn test_settings_save_updates_theme() {
        let temp_dir = TempDir::new().unwrap();
        let mut app = App::new(Config::default(), temp_dir.path().join("config.toml"));
        app.go_to_tab(4);

        app.settings.adjust(true);
        app.open_selected();
        assert!(app.error_message.is_none());
        assert_eq!(app.theme, Theme::light());
        assert!(temp_dir.path().join("config.toml").exists());
    }
}
