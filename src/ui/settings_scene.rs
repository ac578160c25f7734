//! Settings screen: difficulty, audio toggles, save.

use ratatui::layout::Alignment;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::{App, SETTINGS_ROWS};
use crate::ui::centered_rect;

pub fn draw(frame: &mut Frame, app: &App) {
    let area = centered_rect(frame.size(), 40, 12);

    let mut lines = vec![Line::raw("")];
    for (i, row) in SETTINGS_ROWS.iter().enumerate() {
        let selected = i == app.settings_selected;
        let text = match i {
            0 => format!("{}: < {} >", row, app.settings.difficulty.name()),
            1 => format!("{}: {}", row, on_off(app.settings.music_enabled)),
            2 => format!("{}: {}", row, on_off(app.settings.sound_enabled)),
            _ => format!("[ {} ]", row),
        };
        let style = if selected {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        lines.push(Line::styled(text, style));
    }
    lines.push(Line::raw(""));
    lines.push(Line::styled(
        "Left/Right change, Enter select, Esc back",
        Style::default().fg(Color::DarkGray),
    ));

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Settings "));
    frame.render_widget(widget, area);
}

fn on_off(value: bool) -> &'static str {
    if value {
        "On"
    } else {
        "Off"
    }
}
