// TUI event loop and terminal management
use crate::app::{App, InputMode, Loaded, Message, Pending, Request};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use recruitai_core::{
    pages::{CandidateDirectory, JobBoard, MatchBoard, Overview, Profile},
    ScreeningBackend,
};
use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

pub async fn run_tui(mut app: App, backend: Arc<dyn ScreeningBackend>) -> anyhow::Result<()> {
    let tick_rate = Duration::from_millis(app.config.ui.tick_rate_ms.max(10));
    let (tx, mut rx) = mpsc::unbounded_channel();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = event_loop(&mut terminal, &mut app, &backend, &tx, &mut rx, tick_rate);

    // Restore terminal even if the loop bailed out
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    backend: &Arc<dyn ScreeningBackend>,
    tx: &mpsc::UnboundedSender<Message>,
    rx: &mut mpsc::UnboundedReceiver<Message>,
    tick_rate: Duration,
) -> anyhow::Result<()> {
    loop {
        for pending in app.take_requests() {
            spawn_request(pending, Arc::clone(backend), tx.clone());
        }

        terminal.draw(|f| crate::ui::render(f, app))?;

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key(app, key);
                }
            }
        }

        while let Ok(message) = rx.try_recv() {
            app.apply(message);
        }
        app.on_tick(Instant::now());

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Run one request on its own task. A cancelled scope means nobody is
/// listening any more, so nothing is sent back.
pub fn spawn_request(
    pending: Pending,
    backend: Arc<dyn ScreeningBackend>,
    tx: mpsc::UnboundedSender<Message>,
) -> tokio::task::JoinHandle<()> {
    let Pending {
        generation,
        token,
        request,
    } = pending;

    tokio::spawn(async move {
        let backend = backend.as_ref();
        let work = async move {
            match request {
                Request::Overview => Loaded::Overview(Overview::load(backend).await),
                Request::Jobs => Loaded::Jobs(JobBoard::load(backend).await),
                Request::Matches(job_id) => {
                    Loaded::Matches(MatchBoard::load(backend, &job_id).await)
                }
                Request::Candidates => Loaded::Candidates(CandidateDirectory::load(backend).await),
                Request::Profile(id) => Loaded::Profile(Profile::load(backend, &id).await),
                Request::PostJob {
                    mut board,
                    mut form,
                } => {
                    let result = board.post(backend, &mut form).await;
                    Loaded::JobPosted { board, result }
                }
                Request::Upload(path) => Loaded::Uploaded(backend.upload_resume(&path).await),
            }
        };

        if let Some(payload) = token.run(work).await {
            // The receiver only goes away when the dashboard is shutting down
            let _ = tx.send(Message {
                generation,
                payload,
            });
        }
    })
}

pub(crate) fn handle_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    if app.show_help {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')) {
            app.toggle_help();
        }
        return;
    }

    match app.input_mode {
        InputMode::Searching => match key.code {
            KeyCode::Enter => app.enter_normal_mode(),
            KeyCode::Esc => {
                app.candidates.set_query("");
                app.enter_normal_mode();
            }
            KeyCode::Char(c) => app.search_push(c),
            KeyCode::Backspace => app.search_pop(),
            _ => {}
        },
        InputMode::PostingJob => match key.code {
            KeyCode::Enter => app.submit_job_form(),
            KeyCode::Esc => {
                app.clear_error();
                app.enter_normal_mode();
            }
            KeyCode::Tab => app.next_job_field(),
            KeyCode::Char(c) => app.job_form_input().push(c),
            KeyCode::Backspace => {
                app.job_form_input().pop();
            }
            _ => {}
        },
        InputMode::ChoosingFile => match key.code {
            KeyCode::Enter => app.confirm_file(),
            KeyCode::Esc => app.enter_normal_mode(),
            KeyCode::Char(c) => app.path_input.push(c),
            KeyCode::Backspace => {
                app.path_input.pop();
            }
            _ => {}
        },
        InputMode::Normal => handle_normal_key(app, key.code),
    }
}

fn handle_normal_key(app: &mut App, code: KeyCode) {
    use crate::app::Page;

    match code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('?') => app.toggle_help(),
        KeyCode::Char(c @ '1'..='5') => app.go_to_tab(c as usize - '1' as usize),
        KeyCode::Char('r') => app.refresh(),
        KeyCode::Esc => {
            if app.error_message.is_some() {
                app.clear_error();
            } else {
                app.go_back();
            }
        }
        KeyCode::Char('/') => app.enter_search_mode(),
        KeyCode::Char('n') => app.enter_job_form(),
        KeyCode::Char('o') => app.enter_file_mode(),
        KeyCode::Enter => app.open_selected(),
        KeyCode::Char('j') | KeyCode::Down => {
            if app.page == Page::Settings {
                app.settings.focus_next();
            } else {
                app.next_item();
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            if app.page == Page::Settings {
                app.settings.focus_prev();
            } else {
                app.previous_item();
            }
        }
        KeyCode::Char('h') | KeyCode::Left if app.page == Page::Settings => {
            app.settings.adjust(false)
        }
        KeyCode::Char('l') | KeyCode::Right if app.page == Page::Settings => {
            app.settings.adjust(true)
        }
        KeyCode::Char('s') if app.page == Page::Settings => app.save_settings(),
        _ => {}
    }
}
