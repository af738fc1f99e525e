// UI rendering logic
use crate::{
    app::{InputMode, JobFormField, Page},
    help_ui::{centered_rect, render_keybindings_help},
    App,
};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{BarChart, Block, Borders, Clear, Gauge, List, ListItem, Paragraph, Tabs, Wrap},
    Frame,
};
use recruitai_core::{
    models::{format_date, initials},
    pages::{candidates, jobs, matches, overview, profile, settings::SettingsField},
    pages::{MatchRow, UploadState},
    skills::chips,
    theme,
};

/// Bars shown in the skill distribution chart
const CHART_SKILLS: usize = 8;

pub(crate) fn rgb(color: theme::Color) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}

pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tabs
            Constraint::Min(5),    // Page
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_tabs(frame, app, chunks[0]);

    match app.page {
        Page::Overview => render_overview(frame, app, chunks[1]),
        Page::Jobs => render_jobs(frame, app, chunks[1]),
        Page::JobMatches { .. } => render_matches(frame, app, chunks[1]),
        Page::Candidates => render_candidates(frame, app, chunks[1]),
        Page::Profile { .. } => render_profile(frame, app, chunks[1]),
        Page::Upload => render_upload(frame, app, chunks[1]),
        Page::Settings => render_settings(frame, app, chunks[1]),
    }

    if app.input_mode == InputMode::PostingJob {
        render_job_form(frame, app, frame.area());
    }

    if app.show_help {
        render_keybindings_help(frame, app, frame.area());
    }

    render_status_bar(frame, app, chunks[2]);
}

fn block<'a>(app: &App, title: impl Into<Line<'a>>) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(rgb(app.theme.colors.border)))
}

fn muted(app: &App) -> Style {
    Style::default().fg(rgb(app.theme.colors.muted))
}

fn highlight(app: &App) -> Style {
    Style::default()
        .fg(rgb(app.theme.colors.selected))
        .bg(rgb(app.theme.colors.selected_bg))
        .add_modifier(Modifier::BOLD)
}

fn placeholder(frame: &mut Frame, app: &App, area: Rect, title: &str, text: &str, style: Style) {
    let paragraph = Paragraph::new(text.to_string())
        .style(style)
        .alignment(Alignment::Center)
        .block(block(app, format!(" {} ", title)));
    frame.render_widget(paragraph, area);
}

fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = Page::TABS
        .iter()
        .enumerate()
        .map(|(i, page)| Line::from(format!("{} {}", i + 1, page.title())))
        .collect();

    let tabs = Tabs::new(titles)
        .select(app.page.tab_index())
        .block(block(app, " RecruitAI "))
        .style(Style::default().fg(rgb(app.theme.colors.tab_inactive)))
        .highlight_style(
            Style::default()
                .fg(rgb(app.theme.colors.tab_active))
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, area);
}

fn render_overview(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(6)])
        .split(area);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25); 4])
        .split(chunks[0]);

    for (card, area) in app.overview.stat_cards().iter().zip(cards.iter()) {
        let lines = vec![
            Line::from(Span::styled(
                card.value.clone(),
                Style::default()
                    .fg(rgb(app.theme.colors.title))
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(card.trend, muted(app))),
        ];
        frame.render_widget(
            Paragraph::new(lines).block(block(app, format!(" {} ", card.title))),
            *area,
        );
    }

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    match app.overview.skill_distribution() {
        Some(distribution) => {
            let data: Vec<(&str, u64)> = distribution
                .iter()
                .take(CHART_SKILLS)
                .map(|s| (s.name.as_str(), s.value))
                .collect();
            let chart = BarChart::default()
                .block(block(app, " Skill Distribution "))
                .data(data.as_slice())
                .bar_width(7)
                .bar_gap(2)
                .bar_style(Style::default().fg(rgb(app.theme.colors.primary)))
                .value_style(
                    Style::default()
                        .fg(Color::Black)
                        .bg(rgb(app.theme.colors.primary)),
                )
                .label_style(muted(app));
            frame.render_widget(chart, body[0]);
        }
        None => {
            let text = if app.loading {
                "Loading..."
            } else {
                overview::NO_ANALYTICS
            };
            placeholder(frame, app, body[0], "Skill Distribution", text, muted(app));
        }
    }

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(body[1]);

    let recent: Vec<ListItem> = app
        .overview
        .recent_jobs()
        .iter()
        .map(|job| {
            ListItem::new(Line::from(vec![
                Span::raw(job.title.clone()),
                Span::styled(format!("  {}", format_date(job.created_at)), muted(app)),
            ]))
        })
        .collect();
    if recent.is_empty() {
        placeholder(frame, app, side[0], "Recent Jobs", overview::NO_JOBS, muted(app));
    } else {
        frame.render_widget(List::new(recent).block(block(app, " Recent Jobs ")), side[0]);
    }

    let uploads: Vec<ListItem> = app
        .overview
        .latest_uploads()
        .iter()
        .map(|c| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("[{}] ", initials(&c.filename, candidates::ROW_INITIALS)),
                    Style::default().fg(rgb(app.theme.colors.accent)),
                ),
                Span::raw(c.filename.clone()),
                Span::styled(format!("  {}", format_date(c.upload_date)), muted(app)),
            ]))
        })
        .collect();
    if uploads.is_empty() {
        placeholder(
            frame,
            app,
            side[1],
            "Latest Uploads",
            overview::NO_CANDIDATES,
            muted(app),
        );
    } else {
        frame.render_widget(
            List::new(uploads).block(block(app, " Latest Uploads ")),
            side[1],
        );
    }
}

fn skill_spans(app: &App, skills: &[String], limit: usize) -> Vec<Span<'static>> {
    let chips = chips(skills, limit);
    let mut spans: Vec<Span> = chips
        .shown
        .iter()
        .map(|s| {
            Span::styled(
                format!("[{}] ", s),
                Style::default().fg(rgb(app.theme.colors.chip)),
            )
        })
        .collect();
    if let Some(more) = chips.overflow_label() {
        spans.push(Span::styled(more, muted(app)));
    }
    spans
}

fn render_jobs(frame: &mut Frame, app: &mut App, area: Rect) {
    if app.jobs.is_empty() {
        let text = if app.loading { jobs::LOADING } else { jobs::EMPTY };
        placeholder(frame, app, area, "Job Listings", text, muted(app));
        return;
    }

    let items: Vec<ListItem> = app
        .jobs
        .jobs
        .iter()
        .map(|job| {
            let description = job.description.lines().next().unwrap_or_default().to_string();
            ListItem::new(vec![
                Line::from(Span::styled(
                    job.title.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(format!("  {}", description), muted(app))),
                Line::from(
                    std::iter::once(Span::raw("  "))
                        .chain(skill_spans(app, &job.required_skills, usize::MAX))
                        .collect::<Vec<_>>(),
                ),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(block(app, format!(" Job Listings ({}) ", app.jobs.jobs.len())))
        .highlight_style(highlight(app))
        .highlight_symbol("> ");
    frame.render_stateful_widget(list, area, &mut app.list_state);
}

fn render_job_form(frame: &mut Frame, app: &App, area: Rect) {
    let popup = centered_rect(60, 50, area);
    frame.render_widget(Clear, popup);

    let outer = block(app, " Post New Job ")
        .border_style(Style::default().fg(rgb(app.theme.colors.border_focused)));
    let inner = outer.inner(popup);
    frame.render_widget(outer, popup);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(inner);

    let fields = [
        (JobFormField::Title, "Job Title", &app.job_form.title),
        (JobFormField::Description, "Description", &app.job_form.description),
        (
            JobFormField::Skills,
            "Required Skills (comma separated)",
            &app.job_form.skills,
        ),
    ];

    for (idx, (field, label, value)) in fields.into_iter().enumerate() {
        let focused = app.job_form_field == field;
        let border = if focused {
            rgb(app.theme.colors.border_focused)
        } else {
            rgb(app.theme.colors.border)
        };
        let mut text = value.clone();
        if focused {
            text.push('█');
        }
        let paragraph = Paragraph::new(text)
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {} ", label))
                    .border_style(Style::default().fg(border)),
            );
        frame.render_widget(paragraph, rows[idx]);
    }

    frame.render_widget(
        Paragraph::new("TAB: next field | ENTER: post job | ESC: cancel").style(muted(app)),
        rows[3],
    );
}

fn meter(percent: u8, width: usize) -> String {
    let filled = (percent as usize * width + 50) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled.min(width)))
}

fn match_item(app: &App, row: &MatchRow) -> ListItem<'static> {
    let bucket_color = rgb(app.theme.score_color(row.bucket));
    let mut lines = vec![Line::from(vec![
        Span::styled(format!("#{:<3}", row.rank), muted(app)),
        Span::styled(
            format!("{:<32}", row.entry.filename),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("{:>4}% ", row.percent),
            Style::default().fg(bucket_color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(meter(row.percent, 10), Style::default().fg(bucket_color)),
        Span::styled(format!(" {}", row.bucket.label()), muted(app)),
    ])];

    if row.expanded {
        lines.push(Line::from(vec![
            Span::styled(format!("    {}: ", matches::CONTEXTUAL_MATCH), muted(app)),
            Span::raw(format!("{}%", row.semantic_percent)),
            Span::styled(format!("   {}: ", matches::KEYWORD_MATCH), muted(app)),
            Span::raw(format!("{}%", row.skill_percent)),
        ]));

        let matched = row.matched_skills();
        let matched_line = if matched.is_empty() {
            Span::styled(matches::NO_MATCHED_SKILLS, muted(app))
        } else {
            Span::styled(
                matched.join(", "),
                Style::default().fg(rgb(app.theme.colors.success)),
            )
        };
        lines.push(Line::from(vec![
            Span::styled("    Matched skills: ", muted(app)),
            matched_line,
        ]));

        let others = row.other_skills();
        if !others.is_empty() {
            lines.push(Line::from(vec![
                Span::styled("    Other skills: ", muted(app)),
                Span::raw(others.join(", ")),
            ]));
        }

        lines.push(Line::from(vec![
            Span::styled(
                format!("    {}: ", matches::SUMMARY_TITLE),
                Style::default().fg(rgb(app.theme.colors.accent)),
            ),
            Span::raw(row.summary().to_string()),
        ]));
    }

    ListItem::new(lines)
}

fn render_matches(frame: &mut Frame, app: &mut App, area: Rect) {
    let Some(board) = app.matches.as_ref() else {
        if app.loading {
            placeholder(frame, app, area, "Matches", matches::LOADING, muted(app));
        } else {
            let style = Style::default().fg(rgb(app.theme.colors.error));
            placeholder(frame, app, area, "Matches", matches::LOAD_FAILED, style);
        }
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(4),
            Constraint::Length(3),
        ])
        .split(area);

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            board.job_title.clone(),
            Style::default()
                .fg(rgb(app.theme.colors.title))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(board.headline(), muted(app))),
    ])
    .block(block(app, " Job Matches "));
    frame.render_widget(header, chunks[0]);

    let rows = board.rows();
    let items: Vec<ListItem> = rows.iter().map(|row| match_item(app, row)).collect();
    let selected = rows.get(app.selected()).map(|row| {
        (
            row.semantic_percent,
            row.skill_percent,
            rgb(app.theme.score_color(row.bucket)),
        )
    });

    let list = List::new(items)
        .block(block(app, " Ranked Candidates "))
        .highlight_style(Style::default().bg(rgb(app.theme.colors.selected_bg)))
        .highlight_symbol("> ");
    frame.render_stateful_widget(list, chunks[1], &mut app.list_state);

    if let Some((semantic, skill, color)) = selected {
        let gauges = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[2]);

        for (area, title, value) in [
            (gauges[0], matches::CONTEXTUAL_MATCH, semantic),
            (gauges[1], matches::KEYWORD_MATCH, skill),
        ] {
            let gauge = Gauge::default()
                .block(block(app, format!(" {} ", title)))
                .gauge_style(Style::default().fg(color))
                .percent(value as u16)
                .label(format!("{}%", value));
            frame.render_widget(gauge, area);
        }
    }
}

fn render_candidates(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    let searching = app.input_mode == InputMode::Searching;
    let mut query = app.candidates.query().to_string();
    if searching {
        query.push('█');
    }
    let search_border = if searching {
        rgb(app.theme.colors.border_focused)
    } else {
        rgb(app.theme.colors.border)
    };
    let search = Paragraph::new(query).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Search by filename or skill (/) ")
            .border_style(Style::default().fg(search_border)),
    );
    frame.render_widget(search, chunks[0]);

    let visible = app.candidates.visible();
    if visible.is_empty() {
        let text = if app.loading {
            "Loading candidates..."
        } else {
            candidates::NO_MATCHES
        };
        placeholder(frame, app, chunks[1], candidates::TITLE, text, muted(app));
        return;
    }

    let items: Vec<ListItem> = visible
        .iter()
        .map(|c| {
            let mut spans = vec![
                Span::styled(
                    format!("[{}] ", initials(&c.filename, candidates::ROW_INITIALS)),
                    Style::default().fg(rgb(app.theme.colors.accent)),
                ),
                Span::styled(
                    format!("{:<30}", c.filename),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("{:<14}", format_date(c.upload_date)), muted(app)),
            ];
            spans.extend(skill_spans(app, &c.skills, candidates::ROW_SKILL_CHIPS));
            ListItem::new(Line::from(spans))
        })
        .collect();
    let title = format!(" {} ({}) ", candidates::TITLE, visible.len());

    let list = List::new(items)
        .block(block(app, title))
        .highlight_style(highlight(app))
        .highlight_symbol("> ");
    frame.render_stateful_widget(list, chunks[1], &mut app.list_state);
}

fn bullet_list<'a>(app: &App, items: &'a [String], empty: &'a str) -> Vec<Line<'a>> {
    if items.is_empty() {
        return vec![Line::from(Span::styled(
            empty,
            muted(app).add_modifier(Modifier::ITALIC),
        ))];
    }
    items
        .iter()
        .map(|item| Line::from(format!("• {}", item)))
        .collect()
}

fn render_profile(frame: &mut Frame, app: &App, area: Rect) {
    let Some(profile) = app.profile.as_ref() else {
        if app.loading {
            placeholder(frame, app, area, "Profile", profile::LOADING, muted(app));
        } else {
            let text = format!("{}\n\nESC: Back to Database", profile::NOT_FOUND);
            placeholder(frame, app, area, "Profile", &text, muted(app));
        }
        return;
    };
    let candidate = &profile.candidate;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(6)])
        .split(area);

    let mut contact = vec![Span::styled(
        format!("Uploaded {}", profile.uploaded()),
        muted(app),
    )];
    if let Some(email) = profile.email() {
        contact.push(Span::raw("  |  "));
        contact.push(Span::styled(
            email.to_string(),
            Style::default().fg(rgb(app.theme.colors.info)),
        ));
    }
    contact.push(Span::raw("  |  "));
    contact.push(Span::styled(profile::NO_PHONE, muted(app)));

    let header = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(
                format!("[{}] ", profile.initials()),
                Style::default().fg(rgb(app.theme.colors.accent)),
            ),
            Span::styled(
                profile.display_name().to_string(),
                Style::default()
                    .fg(rgb(app.theme.colors.title))
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(contact),
    ])
    .block(block(app, format!(" {} ", candidate.filename)));
    frame.render_widget(header, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(chunks[1]);

    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(body[0]);

    frame.render_widget(
        Paragraph::new(bullet_list(app, &candidate.experience, profile::NO_EXPERIENCE))
            .block(block(app, " Work Experience / Org ")),
        main[0],
    );
    frame.render_widget(
        Paragraph::new(profile.raw_text().to_string())
            .wrap(Wrap { trim: false })
            .block(block(app, " Resume Overview ")),
        main[1],
    );

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(body[1]);

    let skills = if candidate.skills.is_empty() {
        Paragraph::new(Span::styled(profile::NO_SKILLS, muted(app)))
    } else {
        Paragraph::new(Line::from(skill_spans(app, &candidate.skills, usize::MAX)))
            .wrap(Wrap { trim: true })
    };
    frame.render_widget(skills.block(block(app, " Skills ")), side[0]);
    frame.render_widget(
        Paragraph::new(bullet_list(app, &candidate.education, profile::NO_EDUCATION))
            .wrap(Wrap { trim: false })
            .block(block(app, " Education ")),
        side[1],
    );
}

fn render_upload(frame: &mut Frame, app: &App, area: Rect) {
    let panel = centered_rect(70, 70, area);
    let colors = &app.theme.colors;

    let status_style = match &app.upload.state {
        UploadState::Success(_) => Style::default().fg(rgb(colors.success)),
        UploadState::Error(_) => Style::default().fg(rgb(colors.error)),
        UploadState::Uploading => Style::default().fg(rgb(colors.info)),
        UploadState::Idle => Style::default().fg(rgb(colors.foreground)),
    };

    let mut lines = vec![
        Line::from(Span::styled(
            app.upload.status_message(),
            status_style.add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    if app.input_mode == InputMode::ChoosingFile {
        lines.push(Line::from(vec![
            Span::styled("Path: ", muted(app)),
            Span::raw(format!("{}█", app.path_input)),
        ]));
    } else if let Some(file) = app.upload.file() {
        lines.push(Line::from(vec![
            Span::styled("File: ", muted(app)),
            Span::raw(file.display().to_string()),
        ]));
    }

    if let UploadState::Success(receipt) = &app.upload.state {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Extracted skills: ", muted(app)),
            Span::raw(receipt.extracted_skills.join(", ")),
        ]));
        lines.push(Line::from(Span::styled(
            "Opening the candidate database...",
            muted(app),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Supports PDF, DOCX, TXT", muted(app))));
    lines.push(Line::from(Span::styled(
        "o: choose file | ENTER: upload",
        muted(app),
    )));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(block(app, " Upload Resume "));
    frame.render_widget(paragraph, panel);
}

fn render_settings(frame: &mut Frame, app: &App, area: Rect) {
    let form = &app.settings;
    let colors = &app.theme.colors;

    let outer = block(app, " Platform Settings ");
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(inner);

    let field_block = |field: SettingsField| {
        let color = if form.focus == field {
            colors.border_focused
        } else {
            colors.border
        };
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", field.label()))
            .border_style(Style::default().fg(rgb(color)))
    };

    frame.render_widget(
        Paragraph::new(form.draft.theme.label()).block(field_block(SettingsField::Theme)),
        rows[0],
    );

    let weights = form.draft.weights();
    let gauge = Gauge::default()
        .block(field_block(SettingsField::SemanticWeight))
        .gauge_style(
            Style::default()
                .fg(rgb(colors.primary))
                .bg(rgb(colors.accent)),
        )
        .percent(weights.semantic() as u16)
        .label(format!(
            "Semantic Similarity {}% | Skill Match {}%",
            weights.semantic(),
            weights.skills()
        ));
    frame.render_widget(gauge, rows[1]);

    let auto = if form.draft.auto_analyze { "On" } else { "Off" };
    frame.render_widget(
        Paragraph::new(auto).block(field_block(SettingsField::AutoAnalyze)),
        rows[2],
    );

    let label = form.button_label();
    let button_style = if label == recruitai_core::pages::settings::SAVED {
        Style::default().fg(rgb(colors.success))
    } else {
        Style::default().fg(rgb(colors.primary))
    };
    frame.render_widget(
        Paragraph::new(Span::styled(
            format!("[ {} ]", label),
            button_style.add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        rows[3],
    );
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let status = if let Some(error) = &app.error_message {
        Span::styled(error.clone(), Style::default().fg(Color::Red))
    } else {
        match app.input_mode {
            InputMode::Searching => Span::styled(
                "SEARCH | type to filter | ENTER: keep | ESC: clear",
                Style::default().fg(Color::Yellow),
            ),
            InputMode::PostingJob => Span::styled(
                "NEW JOB | TAB: next field | ENTER: post | ESC: cancel",
                Style::default().fg(Color::Yellow),
            ),
            InputMode::ChoosingFile => Span::styled(
                "FILE | type a path | ENTER: select | ESC: cancel",
                Style::default().fg(Color::Yellow),
            ),
            InputMode::Normal => {
                if let Some(message) = &app.status_message {
                    Span::styled(message.clone(), Style::default().fg(Color::Green))
                } else if app.loading {
                    Span::styled("Loading...", Style::default().fg(Color::Cyan))
                } else {
                    Span::raw("1-5: pages | j/k: move | ENTER: open | ESC: back | r: reload | ?: help | q: quit")
                }
            }
        }
    };

    frame.render_widget(Paragraph::new(Line::from(status)), area);
}
