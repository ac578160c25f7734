//! Account creation screen.

use ratatui::layout::Alignment;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::{App, REGISTER_SUBMIT, REGISTER_TO_LOGIN};
use crate::ui::centered_rect;
use crate::ui::login_scene::{button_line, field_line};

pub fn draw(frame: &mut Frame, app: &App) {
    let area = centered_rect(frame.size(), 44, 14);
    let form = &app.register;

    let mut lines = vec![
        Line::raw(""),
        field_line("Username", &form.username, form.focus == 0),
        field_line("Password", &form.password, form.focus == 1),
        field_line("Confirm ", &form.confirm, form.focus == 2),
        Line::raw(""),
        button_line("Create account", form.focus == REGISTER_SUBMIT),
        button_line("Back", form.focus == REGISTER_TO_LOGIN),
        Line::raw(""),
    ];

    if let Some(error) = &form.error {
        lines.push(Line::styled(
            error.clone(),
            Style::default().fg(Color::Red),
        ));
    } else {
        lines.push(Line::raw(""));
    }

    lines.push(Line::styled(
        "Tab/arrows move, Enter select, Esc back",
        Style::default().fg(Color::DarkGray),
    ));

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Register "));
    frame.render_widget(widget, area);
}
