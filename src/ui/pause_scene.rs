//! Pause overlay menu.

use ratatui::layout::Alignment;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::{App, PAUSE_ITEMS};
use crate::ui::{centered_rect, list_line};

pub fn draw(frame: &mut Frame, app: &App) {
    let area = centered_rect(frame.size(), 30, 10);

    let mut lines = vec![
        Line::styled(
            "PAUSED",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            format!("score {}", app.sim.score),
            Style::default().fg(Color::DarkGray),
        ),
        Line::raw(""),
    ];
    for (i, item) in PAUSE_ITEMS.iter().enumerate() {
        lines.push(list_line(item, i == app.pause_selected));
    }

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(widget, area);
}
