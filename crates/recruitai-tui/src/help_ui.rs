use crate::{ui::rgb, App};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Keybindings popup over whatever page is showing
pub fn render_keybindings_help(frame: &mut Frame, app: &App, area: Rect) {
    let popup_area = centered_rect(70, 80, area);
    frame.render_widget(Clear, popup_area);

    let colors = &app.theme.colors;
    let bg = rgb(colors.background);
    let fg = rgb(colors.foreground);
    let primary = rgb(colors.primary);
    let accent = rgb(colors.accent);
    let muted = rgb(colors.muted);

    let mut lines = keybindings_content(primary, accent, fg);
    lines.push(Line::from(vec![
        Span::styled("Press ", Style::default().fg(muted)),
        Span::styled("? ", Style::default().fg(accent).add_modifier(Modifier::BOLD)),
        Span::styled("or ", Style::default().fg(muted)),
        Span::styled("ESC ", Style::default().fg(accent).add_modifier(Modifier::BOLD)),
        Span::styled("to close", Style::default().fg(muted)),
    ]));

    let help = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Keybindings Help ")
                .title_alignment(Alignment::Center)
                .border_style(Style::default().fg(primary)),
        )
        .style(Style::default().fg(fg).bg(bg));

    frame.render_widget(help, popup_area);
}

fn keybindings_content(primary: Color, accent: Color, fg: Color) -> Vec<Line<'static>> {
    let section = |title: &str| -> Line<'static> {
        Line::from(vec![Span::styled(
            format!(" {} ", title),
            Style::default()
                .fg(Color::Black)
                .bg(primary)
                .add_modifier(Modifier::BOLD),
        )])
    };

    let key = |k: &str, desc: &str| -> Line<'static> {
        Line::from(vec![
            Span::styled(
                format!("  {:12}", k),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ),
            Span::styled(desc.to_string(), Style::default().fg(fg)),
        ])
    };

    vec![
        section("Global"),
        key("1-5", "Overview / Jobs / Candidates / Upload / Settings"),
        key("q", "Quit"),
        key("?", "Toggle this help"),
        key("r", "Reload the current page"),
        key("ESC", "Back / clear error / leave input"),
        Line::from(""),
        section("Lists"),
        key("j / Down", "Next item"),
        key("k / Up", "Previous item"),
        key("ENTER", "Open job matches / candidate profile, expand a match"),
        Line::from(""),
        section("Jobs"),
        key("n", "Post a new job"),
        key("TAB", "Next form field"),
        key("ENTER", "Submit the form"),
        Line::from(""),
        section("Candidates"),
        key("/", "Search by filename or skill"),
        Line::from(""),
        section("Upload"),
        key("o", "Choose a resume file (PDF, DOCX, TXT)"),
        key("ENTER", "Upload the chosen file"),
        Line::from(""),
        section("Settings"),
        key("j / k", "Move between fields"),
        key("h / l", "Change the focused value"),
        key("s / ENTER", "Save"),
        Line::from(""),
    ]
}

pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
