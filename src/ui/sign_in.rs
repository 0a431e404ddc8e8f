//! Sign-in page, the destination after a successful registration

use crate::app::App;
use crate::ui::components::render_link;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the sign-in page
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(7), // Card
            Constraint::Length(1), // Register link
            Constraint::Min(0),
        ])
        .split(area);

    let mut lines = vec![
        Line::styled(
            app.state.current_view.title(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from(vec![
            Span::styled("Route: ", Style::default().fg(Color::Gray)),
            Span::styled(app.config().sign_in_route(), Style::default().fg(Color::Cyan)),
        ]),
    ];
    if app.state.registration_sent {
        lines.push(Line::styled(
            "Your registration request is pending approval.",
            Style::default().fg(Color::Gray),
        ));
    }

    let card = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(card, chunks[1]);

    render_link(
        frame,
        chunks[2],
        "Don't have an account?",
        "Register",
        true,
    );
}
