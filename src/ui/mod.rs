//! Scene rendering. Every screen has a scene module with a single `draw`
//! entry point; [`draw`] dispatches on the active screen.

pub mod game_over_scene;
pub mod leaderboard_scene;
pub mod login_scene;
pub mod menu_scene;
pub mod pause_scene;
pub mod play_scene;
pub mod register_scene;
pub mod settings_scene;
pub mod text_field;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::Frame;

use crate::app::{App, Screen};

pub fn draw(frame: &mut Frame, app: &App) {
    match app.screen {
        Screen::Login => login_scene::draw(frame, app),
        Screen::Register => register_scene::draw(frame, app),
        Screen::Menu => menu_scene::draw(frame, app),
        Screen::Playing => play_scene::draw(frame, app),
        Screen::Paused => pause_scene::draw(frame, app),
        Screen::GameOver => game_over_scene::draw(frame, app),
        Screen::Settings => settings_scene::draw(frame, app),
        Screen::Leaderboard => leaderboard_scene::draw(frame, app),
    }
}

/// A `width` x `height` rect centered inside `area`, clamped to fit.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height - height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width - width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vertical[1]);
    horizontal[1]
}

/// One line of a selectable list, highlighted when selected.
pub fn list_line(label: &str, selected: bool) -> Line<'static> {
    if selected {
        Line::styled(
            format!("> {}", label),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Line::styled(format!("  {}", label), Style::default().fg(Color::Gray))
    }
}
