//! High-score table, top entries highlighted.

use ratatui::layout::Alignment;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::App;
use crate::ui::centered_rect;

pub fn draw(frame: &mut Frame, app: &App) {
    let area = centered_rect(frame.size(), 40, 16);

    let mut lines = vec![
        Line::styled(
            "HIGH SCORES",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Line::raw(""),
    ];

    let top = app.leaderboard.top();
    if top.is_empty() {
        lines.push(Line::styled(
            "No scores yet",
            Style::default().fg(Color::DarkGray),
        ));
    }
    for (i, entry) in top.iter().enumerate() {
        let style = match i {
            0 => Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            1 | 2 => Style::default().fg(Color::Yellow),
            _ => Style::default().fg(Color::Gray),
        };
        lines.push(Line::styled(
            format!("{:>2}. {:<20} {:>6}", i + 1, entry.name, entry.score),
            style,
        ));
    }

    lines.push(Line::raw(""));
    lines.push(Line::styled(
        "Esc back",
        Style::default().fg(Color::DarkGray),
    ));

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Leaderboard "));
    frame.render_widget(widget, area);
}
