//! Main menu.

use ratatui::layout::Alignment;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::{App, MENU_ITEMS};
use crate::ui::{centered_rect, list_line};

pub fn draw(frame: &mut Frame, app: &App) {
    let area = centered_rect(frame.size(), 36, 12);

    let mut lines = vec![
        Line::styled(
            "S E R P E N T",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            format!("Welcome, {}", app.current_user()),
            Style::default().fg(Color::DarkGray),
        ),
        Line::raw(""),
    ];
    for (i, item) in MENU_ITEMS.iter().enumerate() {
        lines.push(list_line(item, i == app.menu_selected));
    }
    lines.push(Line::raw(""));
    lines.push(Line::styled(
        format!("Difficulty: {}", app.settings.difficulty.name()),
        Style::default().fg(Color::DarkGray),
    ));

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(widget, area);
}
