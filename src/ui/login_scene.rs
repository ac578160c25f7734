//! Login screen: two fields, a submit button and a link to registration.

use ratatui::layout::Alignment;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::{App, LOGIN_SUBMIT, LOGIN_TO_REGISTER};
use crate::ui::centered_rect;
use crate::ui::text_field::TextField;

pub fn draw(frame: &mut Frame, app: &App) {
    let area = centered_rect(frame.size(), 44, 14);
    let form = &app.login;

    let mut lines = vec![
        Line::styled(
            "S E R P E N T",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Line::raw(""),
        field_line("Username", &form.username, form.focus == 0),
        field_line("Password", &form.password, form.focus == 1),
        Line::raw(""),
        button_line("Log in", form.focus == LOGIN_SUBMIT),
        button_line("Register", form.focus == LOGIN_TO_REGISTER),
        Line::raw(""),
    ];

    if let Some(error) = &form.error {
        lines.push(Line::styled(
            error.clone(),
            Style::default().fg(Color::Red),
        ));
    } else if let Some(info) = &form.info {
        lines.push(Line::styled(
            info.clone(),
            Style::default().fg(Color::Green),
        ));
    } else {
        lines.push(Line::raw(""));
    }

    lines.push(Line::styled(
        "Tab/arrows move, Enter select, Esc quit",
        Style::default().fg(Color::DarkGray),
    ));

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Sign in "));
    frame.render_widget(widget, area);
}

pub(super) fn field_line(label: &str, field: &TextField, focused: bool) -> Line<'static> {
    let style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Gray)
    };
    let cursor = if focused { "_" } else { "" };
    Line::styled(format!("{}: {}{}", label, field.display(), cursor), style)
}

pub(super) fn button_line(label: &str, focused: bool) -> Line<'static> {
    let style = if focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    Line::styled(format!("[ {} ]", label), style)
}
