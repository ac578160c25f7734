//! Game-over screen with the final score.

use ratatui::layout::Alignment;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::{App, GAME_OVER_ITEMS};
use crate::ui::{centered_rect, list_line};

pub fn draw(frame: &mut Frame, app: &App) {
    let area = centered_rect(frame.size(), 34, 10);

    let mut lines = vec![
        Line::styled(
            "GAME OVER",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            format!("{} scored {}", app.current_user(), app.sim.score),
            Style::default().fg(Color::Gray),
        ),
        Line::raw(""),
    ];
    for (i, item) in GAME_OVER_ITEMS.iter().enumerate() {
        lines.push(list_line(item, i == app.over_selected));
    }

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(widget, area);
}
