//! Layout components (header, status bar)

use crate::app::App;
use crate::state::{NotificationKind, View};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into header, content and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Draw the portal header
pub fn draw_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(" ◆ ", Style::default().fg(Color::Blue)),
        Span::styled(
            "SecurePortal",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ]))
    .style(Style::default().bg(Color::Black));
    frame.render_widget(header, area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::raw(" ")];

    // Notification first so the backend hint never covers it
    if let Some(notification) = &app.state.notification {
        let color = match notification.kind {
            NotificationKind::Loading => Color::Yellow,
            NotificationKind::Success => Color::Green,
            NotificationKind::Error => Color::Red,
        };
        spans.push(Span::styled(
            notification.message.as_str(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(" | "));
    }

    // View-specific hints
    spans.push(Span::styled(
        get_view_hints(&app.state.current_view),
        Style::default().fg(Color::Gray),
    ));

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Backend on the right
    let backend_hint = format!(" {} ", app.backend_description());
    let width = (backend_hint.chars().count() as u16).min(area.width);
    let backend_area = Rect {
        x: area.x + area.width.saturating_sub(width),
        y: area.y,
        width,
        height: 1,
    };
    let backend_widget =
        Paragraph::new(backend_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Black));
    frame.render_widget(backend_widget, backend_area);
}

/// Get keyboard hints for the current view
fn get_view_hints(view: &View) -> String {
    match view {
        View::Register => format!(
            "Tab:next  S-Tab:prev  Enter:select  {}:submit  Esc:quit",
            crate::platform::SUBMIT_SHORTCUT
        ),
        View::SignIn => "r:register  q:quit".to_string(),
    }
}
