//! Government officer registration page

use super::field_renderer::{draw_field, FIELD_HEIGHT};
use crate::app::App;
use crate::state::{FieldName, FocusTarget};
use crate::ui::components::{render_button, render_link, BUTTON_HEIGHT};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Widest the form card grows on large terminals
const MAX_FORM_WIDTH: u16 = 90;

/// Fields are laid out two per row
const FIELD_ROWS: [[FieldName; 2]; 4] = [
    [FieldName::FullName, FieldName::Age],
    [FieldName::Email, FieldName::Username],
    [FieldName::Password, FieldName::ConfirmPassword],
    [FieldName::EmployeeId, FieldName::DepartmentName],
];

/// Draw the registration page
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let width = area.width.min(MAX_FORM_WIDTH);
    let area = Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title and subtitle
            Constraint::Min(0),    // Form card
        ])
        .split(area);

    let title = Paragraph::new(vec![
        Line::styled(
            app.state.current_view.title(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            "Create your government officer account",
            Style::default().fg(Color::Gray),
        ),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_form(frame, chunks[1], app);
}

/// Draw the form card: field grid, submit button, sign-in link
fn draw_form(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;

    let block = Block::default()
        .title(" Fill in your details ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints: Vec<Constraint> = FIELD_ROWS
        .iter()
        .map(|_| Constraint::Length(FIELD_HEIGHT))
        .collect();
    constraints.push(Constraint::Length(BUTTON_HEIGHT)); // Submit
    constraints.push(Constraint::Length(1)); // Sign-in link
    constraints.push(Constraint::Min(0));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .horizontal_margin(1)
        .split(inner);

    for (row, names) in FIELD_ROWS.iter().enumerate() {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .spacing(2)
            .split(rows[row]);

        for (column, name) in names.iter().enumerate() {
            draw_field(
                frame,
                columns[column],
                form.field(*name),
                form.is_focused(*name),
                form.error(*name),
            );
        }
    }

    let submitting = form.is_submitting();
    let label = if submitting {
        "Submitting Request..."
    } else {
        "Request Registration"
    };
    render_button(
        frame,
        rows[FIELD_ROWS.len()],
        label,
        form.focus() == FocusTarget::SubmitButton,
        !submitting,
    );

    render_link(
        frame,
        rows[FIELD_ROWS.len() + 1],
        "Already have an account?",
        "Sign in instead",
        form.focus() == FocusTarget::SignInLink,
    );
}
